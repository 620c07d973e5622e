//! Lexical path decomposition.
//!
//! This module derives three values from a path string: the parent path,
//! the final component name, and the absolute path.
//!
//! # Key Concepts
//!
//! ## Splitting
//!
//! Splitting is purely textual. The input is cut at its last path separator:
//! everything after it is the name, everything before it is the parent. An
//! input with no separator has no parent, and its name is the whole string.
//! Trailing separators are ignored, so `"a/b/"` splits the same way as
//! `"a/b"`.
//!
//! ## Absolute paths
//!
//! An input that is already absolute passes through unchanged; `.` and `..`
//! segments are not resolved and symlinks are not followed. A relative input
//! is prefixed with the current working directory, read fresh on every call.
//! The result is therefore only stable across calls while the working
//! directory is unchanged.
//!
//! # Examples
//!
//! ```
//! use pathinfo::path::PathResolver;
//!
//! let resolver = PathResolver::new();
//!
//! let file = resolver.resolve("/home/lionel/fotos/albania1.jpg").unwrap();
//! assert_eq!(file.parent(), Some("/home/lionel/fotos"));
//! assert_eq!(file.name(), "albania1.jpg");
//!
//! // A single-component relative path has no parent
//! let bare = resolver.resolve("trabajos").unwrap();
//! assert_eq!(bare.parent(), None);
//! assert_eq!(bare.name(), "trabajos");
//! ```

pub mod resolver;
pub mod split;
mod types;

// Re-export key types
pub use resolver::PathResolver;
pub use types::PathRef;
