#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathinfo
//!
//! A library for decomposing filesystem path strings.
//!
//! Given a path string, absolute or relative, this library derives three
//! values: the parent path, the final component name, and the absolute path
//! (the input resolved against the current working directory when relative).
//! The decomposition is purely lexical: no file I/O is performed, paths need
//! not exist, symlinks are never followed, and `.`/`..` segments are left
//! untouched.
//!
//! ## Core Types
//!
//! - [`PathRef`]: the decomposed view of a single path string
//! - [`PathResolver`]: derives a [`PathRef`] from a string
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathinfo::PathResolver;
//!
//! let resolver = PathResolver::new();
//! let info = resolver.resolve("/home/lionel/fotos").unwrap();
//!
//! assert_eq!(info.parent(), Some("/home/lionel"));
//! assert_eq!(info.name(), "fotos");
//! assert_eq!(info.absolute_path(), "/home/lionel/fotos");
//! ```

pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathRef, PathResolver};
