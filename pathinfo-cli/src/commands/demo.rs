//! Default command showing the built-in demonstration paths.

use crate::error::CliError;
use crate::utils::{print_path_ref, GlobalOptions};
use pathinfo::PathResolver;

/// The illustrative paths: two absolute, two relative.
pub const DEMO_PATHS: [&str; 4] = [
    "/home/lionel/fotos",
    "/home/lionel/fotos/albania1.jpg",
    "trabajos",
    "trabajos/documento.txt",
];

/// Show path information for each of the built-in demonstration paths.
///
/// This is what runs when the binary is invoked without a subcommand.
pub struct DemoCommand;

impl DemoCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = PathResolver::new();

        for raw in DEMO_PATHS {
            let info = resolver.resolve(raw)?;
            print_path_ref(&info);
        }

        Ok(())
    }
}
