//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by all commands and the
//! output formatting used to display a decomposed path.

use pathinfo::PathRef;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields consumed by init_logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Printed in place of an absent parent.
const NO_PARENT: &str = "null";

/// Print the three derived fields of a path, one labeled line each.
///
/// The labels and their order (parent, name, absolute path) are fixed:
///
/// ```text
/// getParent(): <parent-or-null>
/// getName(): <name>
/// getAbsolutePath(): <absolute-path>
/// ```
pub fn print_path_ref(info: &PathRef) {
    println!("getParent(): {}", info.parent().unwrap_or(NO_PARENT));
    println!("getName(): {}", info.name());
    println!("getAbsolutePath(): {}", info.absolute_path());
}
