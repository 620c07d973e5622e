//! Command to show path information for a single path.

use crate::error::CliError;
use crate::utils::{print_path_ref, GlobalOptions};
use clap::Args;
use pathinfo::PathResolver;

/// Show parent, name, and absolute path for a single path.
#[derive(Args)]
pub struct ShowCommand {
    /// Path to inspect (need not exist)
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ShowCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let info = PathResolver::new().resolve(&self.path)?;
        print_path_ref(&info);
        Ok(())
    }
}
