//! Splitting of dotted section paths.
//!
//! A key such as `log.level` names the nested section `level` inside `log`.
//! A separator preceded by a backslash (`a\.b`) is part of the name instead
//! of a boundary.

use std::borrow::Cow;

/// Splits `s` at every separator that is not directly preceded by a backslash.
///
/// Escaped separators are left escaped in the returned segments.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::split_sections;
///
/// assert_eq!(split_sections("a.b.c", '.'), vec!["a", "b", "c"]);
/// assert_eq!(split_sections("a\\.b.c", '.'), vec!["a\\.b", "c"]);
/// assert_eq!(split_sections("plain", '.'), vec!["plain"]);
/// assert_eq!(split_sections("a.b", '*'), vec!["a.b"]);
/// ```
#[must_use]
pub fn split_sections(s: &str, separator: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, _) in s.match_indices(separator) {
        if s[..idx].ends_with('\\') {
            continue;
        }
        segments.push(&s[start..idx]);
        start = idx + separator.len_utf8();
    }
    segments.push(&s[start..]);
    segments
}

/// Joins path segments into one section-name component, escaping the dots
/// between them.
pub(crate) fn join_escaped(segments: &[&str]) -> String {
    segments.join("\\.")
}

/// Turns every `\.` back into `.`.
pub(crate) fn unescape_dots(segment: &str) -> Cow<'_, str> {
    if segment.contains("\\.") {
        Cow::Owned(segment.replace("\\.", "."))
    } else {
        Cow::Borrowed(segment)
    }
}
