//! Path resolution against the current working directory.
//!
//! This module provides the `PathResolver` type, the main interface for
//! turning a path string into a [`PathRef`].

use std::env;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{Error, Result};
use crate::path::split;
use crate::path::types::PathRef;

/// Derives parent, name, and absolute path from a path string.
///
/// Resolution is total over string input: any string, including the empty
/// string, produces a [`PathRef`]. The only failure mode is an unreadable
/// working directory, which is needed to absolutize relative input.
///
/// The resolver holds no state and performs no caching; the working
/// directory is re-read on every call, so each call is independent and
/// thread-safe.
///
/// # Examples
///
/// ```
/// use pathinfo::PathResolver;
///
/// let resolver = PathResolver::new();
///
/// // Absolute input passes through unchanged
/// let info = resolver.resolve("/home/lionel/fotos").unwrap();
/// assert_eq!(info.absolute_path(), "/home/lionel/fotos");
///
/// // Relative input is joined onto the working directory
/// let info = resolver.resolve("trabajos").unwrap();
/// assert!(info.absolute_path().ends_with("trabajos"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Create a new path resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decompose a path string into parent, name, and absolute path.
    ///
    /// The split is lexical: the input is cut at its last separator, with
    /// trailing separators ignored. No `.`/`..` resolution and no symlink
    /// following happens at any point; the path need not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDir`] if the working directory cannot be read
    /// while absolutizing relative input, or [`Error::InvalidPath`] if the
    /// working directory is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathinfo::PathResolver;
    ///
    /// let info = PathResolver::new()
    ///     .resolve("/home/lionel/fotos/albania1.jpg")
    ///     .unwrap();
    /// assert_eq!(info.parent(), Some("/home/lionel/fotos"));
    /// assert_eq!(info.name(), "albania1.jpg");
    /// assert_eq!(info.absolute_path(), "/home/lionel/fotos/albania1.jpg");
    /// ```
    pub fn resolve(&self, raw: &str) -> Result<PathRef> {
        let name = split::name_of(raw).to_string();
        let parent = split::parent_of(raw).map(str::to_string);

        let absolute_path = if Path::new(raw).is_absolute() {
            raw.to_string()
        } else {
            let cwd = current_dir_string()?;
            if raw.is_empty() {
                // Degenerate case: the empty path resolves to the working
                // directory itself
                cwd
            } else {
                format!("{cwd}{MAIN_SEPARATOR}{raw}")
            }
        };

        log::debug!("resolved {raw:?}: parent={parent:?} name={name:?}");

        Ok(PathRef::new(raw.to_string(), parent, name, absolute_path))
    }
}

/// Read the current working directory as a string.
fn current_dir_string() -> Result<String> {
    let cwd = env::current_dir()?;
    cwd.into_os_string()
        .into_string()
        .map_err(|os| Error::InvalidPath {
            path: PathBuf::from(os),
            reason: "current directory is not valid UTF-8".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> String {
        env::current_dir().unwrap().display().to_string()
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_absolute_directory() {
        let info = PathResolver::new().resolve("/home/lionel/fotos").unwrap();
        assert_eq!(info.parent(), Some("/home/lionel"));
        assert_eq!(info.name(), "fotos");
        assert_eq!(info.absolute_path(), "/home/lionel/fotos");
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_absolute_file() {
        let info = PathResolver::new()
            .resolve("/home/lionel/fotos/albania1.jpg")
            .unwrap();
        assert_eq!(info.parent(), Some("/home/lionel/fotos"));
        assert_eq!(info.name(), "albania1.jpg");
        assert_eq!(info.absolute_path(), "/home/lionel/fotos/albania1.jpg");
    }

    #[test]
    fn test_resolve_relative_single_component() {
        let info = PathResolver::new().resolve("trabajos").unwrap();
        assert_eq!(info.parent(), None);
        assert_eq!(info.name(), "trabajos");
        assert_eq!(
            info.absolute_path(),
            format!("{}{}trabajos", cwd(), MAIN_SEPARATOR)
        );
    }

    #[test]
    fn test_resolve_relative_multi_component() {
        let raw = format!("trabajos{MAIN_SEPARATOR}documento.txt");
        let info = PathResolver::new().resolve(&raw).unwrap();
        assert_eq!(info.parent(), Some("trabajos"));
        assert_eq!(info.name(), "documento.txt");
        assert_eq!(
            info.absolute_path(),
            format!("{}{}{}", cwd(), MAIN_SEPARATOR, raw)
        );
    }

    #[test]
    fn test_resolve_empty_string_yields_cwd() {
        let info = PathResolver::new().resolve("").unwrap();
        assert_eq!(info.parent(), None);
        assert_eq!(info.name(), "");
        assert_eq!(info.absolute_path(), cwd());
    }

    #[test]
    fn test_resolve_preserves_raw() {
        let info = PathResolver::new().resolve("trabajos").unwrap();
        assert_eq!(info.raw(), "trabajos");
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_does_not_normalize_dot_segments() {
        let info = PathResolver::new().resolve("/a/./b/../c").unwrap();
        assert_eq!(info.absolute_path(), "/a/./b/../c");
        assert_eq!(info.name(), "c");
        assert_eq!(info.parent(), Some("/a/./b/.."));
    }

    #[test]
    fn test_resolve_is_idempotent_under_stable_cwd() {
        let resolver = PathResolver::new();
        let first = resolver.resolve("trabajos/documento.txt").unwrap();
        let second = resolver.resolve("trabajos/documento.txt").unwrap();
        assert_eq!(first, second);
    }

    // Property-based tests
    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Strategy to generate absolute path strings
        fn absolute_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_.-]{1,10}", 1..=5)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        // Strategy to generate relative path strings
        fn relative_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)
                .prop_map(|parts| parts.join("/"))
        }

        proptest! {
            /// Absolute input passes through to absolute_path unchanged
            #[test]
            fn absolute_input_passes_through(s in absolute_path_strategy()) {
                let info = PathResolver::new().resolve(&s).unwrap();
                prop_assert_eq!(info.absolute_path(), s.as_str());
            }

            /// Relative input is prefixed with the working directory
            #[test]
            fn relative_input_prefixed_with_cwd(s in relative_path_strategy()) {
                let info = PathResolver::new().resolve(&s).unwrap();
                let cwd = env::current_dir().unwrap().display().to_string();
                prop_assert_eq!(info.absolute_path(), format!("{cwd}/{s}"));
            }

            /// Resolution under a stable working directory is idempotent
            #[test]
            fn resolution_is_idempotent(s in relative_path_strategy()) {
                let resolver = PathResolver::new();
                let first = resolver.resolve(&s).unwrap();
                let second = resolver.resolve(&s).unwrap();
                prop_assert_eq!(first, second);
            }

            /// Parent and name rejoin to the raw input when a parent exists
            #[test]
            fn parent_and_name_rejoin(s in absolute_path_strategy()) {
                let info = PathResolver::new().resolve(&s).unwrap();
                if let Some(parent) = info.parent() {
                    let rebuilt = if parent.ends_with('/') {
                        format!("{parent}{}", info.name())
                    } else {
                        format!("{parent}/{}", info.name())
                    };
                    prop_assert_eq!(rebuilt, s.as_str());
                }
            }
        }
    }
}
