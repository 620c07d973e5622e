//! CLI command implementations.
//!
//! This module contains the implementations of the CLI commands:
//! - `demo`: Show path information for the built-in demonstration paths
//!   (the default when no subcommand is given)
//! - `show`: Show path information for a single user-supplied path

pub mod demo;
pub mod show;

pub use demo::DemoCommand;
pub use show::ShowCommand;
