//! Escaping primitives shared by the encoder and the decoder.
//!
//! [`safe`] renders a string so that it survives as a key, value or section
//! name on a single INI line. [`unsafe_str`] reads such text back: it strips
//! quotes, cuts off trailing comments and resolves backslash escapes.
//!
//! ```rust
//! use serde_ini_ext::{safe, unsafe_str};
//!
//! assert_eq!(safe("a;b"), "a\\;b");
//! assert_eq!(safe("x = y"), "\"x = y\"");
//! assert_eq!(unsafe_str("a\\;b ; trailing comment", true), "a;b");
//! ```

/// Returns `true` if `val` starts and ends with the same quote character.
///
/// A lone `"` or `'` counts as quoted.
fn is_quoted(val: &str) -> bool {
    (val.starts_with('"') && val.ends_with('"')) || (val.starts_with('\'') && val.ends_with('\''))
}

fn json_quote(val: &str) -> String {
    serde_json::Value::String(val.to_string()).to_string()
}

/// Escapes a string for use in INI text.
///
/// The string is written as a JSON string literal when it contains `=` or a
/// line terminator, starts with `[`, is already wrapped in matching quotes, or
/// has leading or trailing whitespace. Otherwise `;` and `#` are escaped with a
/// backslash and everything else is kept verbatim.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::safe;
///
/// assert_eq!(safe("plain value"), "plain value");
/// assert_eq!(safe("#hashtag"), "\\#hashtag");
/// assert_eq!(safe("[not a section]"), "\"[not a section]\"");
/// assert_eq!(safe("line\nbreak"), "\"line\\nbreak\"");
/// assert_eq!(safe(" padded "), "\" padded \"");
/// ```
#[must_use]
pub fn safe(val: &str) -> String {
    if val.contains(|c| c == '=' || c == '\r' || c == '\n')
        || val.starts_with('[')
        || (val.len() > 1 && is_quoted(val))
        || val != val.trim()
    {
        return json_quote(val);
    }
    val.replace(';', "\\;").replace('#', "\\#")
}

/// Reads a key, value or section name back from INI text.
///
/// Surrounding whitespace is trimmed. A value wrapped in single quotes loses
/// them; a value wrapped in double quotes is JSON-decoded when `strip_quotes`
/// is set, and kept as-is when decoding fails. Unquoted text ends at the
/// first unescaped `;` or `#`, and `\\`, `\;` and `\#` become the literal
/// character. Any other backslash is kept.
///
/// This never fails: malformed input is returned as literal text.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::unsafe_str;
///
/// assert_eq!(unsafe_str("", true), "");
/// assert_eq!(unsafe_str("x;y", true), "x");
/// assert_eq!(unsafe_str("x  # y", true), "x");
/// assert_eq!(unsafe_str("x \"\\\"", true), "x \"\\\"");
/// assert_eq!(unsafe_str("\"quoted ; text\"", true), "quoted ; text");
/// assert_eq!(unsafe_str("\"quoted\"", false), "\"quoted\"");
/// assert_eq!(unsafe_str("'single'", false), "single");
/// ```
#[must_use]
pub fn unsafe_str(text: &str, strip_quotes: bool) -> String {
    let val = text.trim();
    if is_quoted(val) {
        let inner = if val.starts_with('\'') {
            val.get(1..val.len() - 1).unwrap_or("")
        } else {
            val
        };
        if strip_quotes {
            // Non-string JSON (numbers, `true`, `null`) keeps its text.
            if let Ok(serde_json::Value::String(decoded)) = serde_json::from_str(inner) {
                return decoded;
            }
        }
        return inner.to_string();
    }

    let mut escaped = false;
    let mut unescaped = String::with_capacity(val.len());
    for c in val.chars() {
        if escaped {
            if !matches!(c, '\\' | ';' | '#') {
                unescaped.push('\\');
            }
            unescaped.push(c);
            escaped = false;
        } else if c == ';' || c == '#' {
            break;
        } else if c == '\\' {
            escaped = true;
        } else {
            unescaped.push(c);
        }
    }
    if escaped {
        unescaped.push('\\');
    }
    unescaped.trim().to_string()
}
