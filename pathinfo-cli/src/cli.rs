//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::ShowCommand;
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting filesystem path strings.
#[derive(Parser)]
#[command(name = "pathinfo")]
#[command(
    version,
    about = "Show parent, name, and absolute path of filesystem paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// With no subcommand, a built-in set of demonstration paths is shown.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show path information for a single path
    Show(ShowCommand),
}
