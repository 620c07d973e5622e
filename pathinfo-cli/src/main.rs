//! Main entry point for the pathinfo CLI.
//!
//! This is the command-line interface for inspecting filesystem path strings.
//! Run without arguments it decomposes a built-in set of demonstration paths
//! (two absolute, two relative); the `show` subcommand decomposes a single
//! user-supplied path.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::DemoCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = pathinfo::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command; no subcommand means the demonstration
    let result = match cli.command {
        Some(cli::Command::Show(cmd)) => cmd.execute(&global),
        None => DemoCommand.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
