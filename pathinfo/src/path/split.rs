//! Lexical splitting of path strings.
//!
//! These functions cut a path string at its last separator. They never touch
//! the filesystem and never allocate; both return subslices of the input.

use std::path::MAIN_SEPARATOR;

/// Strip trailing separators, keeping a lone root separator.
///
/// `"a/b/"` becomes `"a/b"`, `"///"` becomes `"/"`, and `""` stays empty.
fn trim_trailing(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() && raw.starts_with(MAIN_SEPARATOR) {
        // Input was all separators; the root remains
        &raw[..MAIN_SEPARATOR.len_utf8()]
    } else {
        trimmed
    }
}

/// The final component of a path string.
///
/// Returns the substring after the last separator, or the whole string when
/// no separator is present. Trailing separators are ignored. The empty
/// string and the bare root both yield an empty name.
///
/// # Examples
///
/// ```
/// use pathinfo::path::split::name_of;
///
/// assert_eq!(name_of("/home/lionel/fotos"), "fotos");
/// assert_eq!(name_of("trabajos"), "trabajos");
/// assert_eq!(name_of("trabajos/"), "trabajos");
/// assert_eq!(name_of(""), "");
/// ```
#[must_use]
pub fn name_of(raw: &str) -> &str {
    let trimmed = trim_trailing(raw);
    match trimmed.rfind(MAIN_SEPARATOR) {
        Some(idx) => &trimmed[idx + MAIN_SEPARATOR.len_utf8()..],
        None => trimmed,
    }
}

/// The parent of a path string, or `None` when it has no parent segment.
///
/// Returns the substring before the last separator. A path whose only
/// separator is the leading root separator has the root as its parent.
/// Single-component paths, the empty string, and the bare root have no
/// parent.
///
/// # Examples
///
/// ```
/// use pathinfo::path::split::parent_of;
///
/// assert_eq!(parent_of("/home/lionel/fotos"), Some("/home/lionel"));
/// assert_eq!(parent_of("trabajos/documento.txt"), Some("trabajos"));
/// assert_eq!(parent_of("/fotos"), Some("/"));
/// assert_eq!(parent_of("trabajos"), None);
/// assert_eq!(parent_of("/"), None);
/// ```
#[must_use]
pub fn parent_of(raw: &str) -> Option<&str> {
    let trimmed = trim_trailing(raw);
    match trimmed.rfind(MAIN_SEPARATOR) {
        // The last separator is the root itself
        Some(0) if trimmed.len() == MAIN_SEPARATOR.len_utf8() => None,
        Some(0) => Some(&trimmed[..MAIN_SEPARATOR.len_utf8()]),
        Some(idx) => Some(&trimmed[..idx]),
        None => None,
    }
}
