//! Core types for path decomposition.

/// The decomposed view of a single path string.
///
/// A `PathRef` is built on demand by [`PathResolver`](crate::PathResolver),
/// read, and discarded; it is never mutated. The absent-parent case is
/// modeled as `None`; display layers choose how to render it (the CLI prints
/// the literal `null`).
///
/// # Examples
///
/// ```
/// use pathinfo::PathRef;
///
/// let info = PathRef::new(
///     "trabajos/documento.txt".to_string(),
///     Some("trabajos".to_string()),
///     "documento.txt".to_string(),
///     "/home/lionel/trabajos/documento.txt".to_string(),
/// );
/// assert_eq!(info.parent(), Some("trabajos"));
/// assert_eq!(info.name(), "documento.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathRef {
    /// The path string as supplied by the caller.
    raw: String,
    /// The path with its final component removed, when one exists.
    parent: Option<String>,
    /// The final path component.
    name: String,
    /// The path resolved against the working directory at resolve time.
    absolute_path: String,
}

impl PathRef {
    /// Create a new decomposed path.
    #[must_use]
    pub fn new(raw: String, parent: Option<String>, name: String, absolute_path: String) -> Self {
        Self {
            raw,
            parent,
            name,
            absolute_path,
        }
    }

    /// The original path string as supplied.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parent path, or `None` when the path has no parent segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathinfo::PathResolver;
    ///
    /// let info = PathResolver::new().resolve("trabajos").unwrap();
    /// assert_eq!(info.parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// The final path component.
    ///
    /// Empty only for degenerate input (the empty string or a bare root).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The absolute form of the path.
    ///
    /// Equal to [`raw`](Self::raw) when the input was already absolute;
    /// otherwise the working directory joined with the input.
    #[must_use]
    pub fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    /// Consume the decomposition, returning the absolute path.
    #[must_use]
    pub fn into_absolute_path(self) -> String {
        self.absolute_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathRef {
        PathRef::new(
            "/home/lionel/fotos".to_string(),
            Some("/home/lionel".to_string()),
            "fotos".to_string(),
            "/home/lionel/fotos".to_string(),
        )
    }

    #[test]
    fn test_accessors() {
        let info = sample();
        assert_eq!(info.raw(), "/home/lionel/fotos");
        assert_eq!(info.parent(), Some("/home/lionel"));
        assert_eq!(info.name(), "fotos");
        assert_eq!(info.absolute_path(), "/home/lionel/fotos");
    }

    #[test]
    fn test_parent_and_name_reconstruct_raw() {
        let info = sample();
        let rebuilt = format!(
            "{}{}{}",
            info.parent().unwrap(),
            std::path::MAIN_SEPARATOR,
            info.name()
        );
        assert_eq!(rebuilt, info.raw());
    }

    #[test]
    fn test_absent_parent() {
        let info = PathRef::new(
            "trabajos".to_string(),
            None,
            "trabajos".to_string(),
            "/home/lionel/trabajos".to_string(),
        );
        assert_eq!(info.parent(), None);
        assert_eq!(info.name(), "trabajos");
    }

    #[test]
    fn test_into_absolute_path() {
        assert_eq!(sample().into_absolute_path(), "/home/lionel/fotos");
    }
}
