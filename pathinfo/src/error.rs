//! Error types for the pathinfo library.
//!
//! Path decomposition itself is total: every string input, including the
//! empty string, produces a result. The only fallible step is reading the
//! process working directory while resolving a relative path, so the error
//! hierarchy here is deliberately small.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathinfo error.
///
/// # Examples
///
/// ```
/// use pathinfo::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("fotos".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathinfo library.
#[derive(Debug, Error)]
pub enum Error {
    /// The current working directory could not be read.
    ///
    /// This is the only failure mode of path resolution and indicates an
    /// unrecoverable environment fault (e.g. the directory was deleted out
    /// from under the process).
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[from] std::io::Error),

    /// A path could not be represented as a string.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },
}
