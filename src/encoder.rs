//! [`IniMap`] → INI text.
//!
//! Every mapping level becomes one block: first the scalar and array entries
//! of that level as `key=value` lines, then one `[section]` block per nested
//! mapping, recursively. Section names are the dotted path from the root, so
//!
//! ```text
//! {log: {type: "file", level: {label: "debug"}}}
//! ```
//!
//! encodes as
//!
//! ```text
//! [log]
//! type=file
//!
//! [log.level]
//! label=debug
//! ```
//!
//! Blocks are separated by one blank line; the output never starts with a
//! blank line and never ends with more than one line ending. Encoding never
//! fails.

use crate::escape::safe;
use crate::path::{join_escaped, split_sections};
use crate::{EncodeOptions, IniMap, Value};
use log::warn;
use std::borrow::Cow;

/// Encodes a mapping using the default [`EncodeOptions`].
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::{encode, ini};
///
/// let data = ini!({ "foo": { "bar": "baz" } });
/// assert_eq!(encode(data.as_object().unwrap()), "[foo]\nbar=baz\n");
/// ```
#[must_use]
pub fn encode(map: &IniMap) -> String {
    encode_with_options(map, EncodeOptions::default())
}

/// Encodes a mapping with custom options, or under a section name.
///
/// Anything convertible into [`EncodeOptions`] is accepted; a `&str` is
/// shorthand for options that only set `section`.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::{encode_with_options, ini, EncodeOptions};
///
/// let data = ini!({ "bar": "baz" });
/// let map = data.as_object().unwrap();
/// assert_eq!(encode_with_options(map, "foo"), "[foo]\nbar=baz\n");
///
/// let options = EncodeOptions::new().with_whitespace(true);
/// assert_eq!(encode_with_options(map, options), "bar = baz\n");
/// ```
#[must_use]
pub fn encode_with_options(map: &IniMap, options: impl Into<EncodeOptions>) -> String {
    let options = options.into();
    let encoder = Encoder::new(&options);
    encoder.block(map, options.section.as_deref())
}

struct Encoder<'o> {
    options: &'o EncodeOptions,
    eol: &'static str,
    separator: &'static str,
    array_suffix: &'static str,
}

impl<'o> Encoder<'o> {
    fn new(options: &'o EncodeOptions) -> Self {
        Encoder {
            options,
            eol: options.platform.line_ending(),
            separator: options.separator(),
            array_suffix: if options.bracketed_array { "[]" } else { "" },
        }
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.skip_escaping {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(safe(text))
        }
    }

    fn render<'a>(&self, value: &'a Value) -> Cow<'a, str> {
        match value {
            Value::String(s) => self.escape(s),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Null => Cow::Borrowed("null"),
            Value::Array(_) | Value::Object(_) => {
                warn!(
                    "array element is a {}, writing it as JSON text",
                    value.type_name()
                );
                Cow::Owned(serde_json::to_string(value).unwrap_or_default())
            }
        }
    }

    /// Width of the widest escaped key among the non-mapping entries. Array
    /// keys are measured with `[]` appended.
    fn pad_width(&self, entries: &[(&String, &Value)]) -> usize {
        entries
            .iter()
            .filter(|(_, value)| !value.is_object())
            .map(|(key, value)| {
                let key: Cow<'_, str> = if value.is_array() {
                    Cow::Owned(format!("{}[]", key))
                } else {
                    Cow::Borrowed(key.as_str())
                };
                self.escape(&key).chars().count()
            })
            .max()
            .unwrap_or(0)
    }

    fn push_line(&self, out: &mut String, key: &str, pad: usize, value: &str) {
        out.push_str(&format!("{:<width$}", key, width = pad));
        out.push_str(self.separator);
        out.push_str(value);
        out.push_str(self.eol);
    }

    fn block(&self, map: &IniMap, section: Option<&str>) -> String {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        if self.options.sort {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        let pad = if self.options.align {
            self.pad_width(&entries)
        } else {
            0
        };

        let mut out = String::new();
        let mut children = Vec::new();
        for (key, value) in entries {
            match value {
                Value::Array(items) => {
                    let array_key = format!("{}{}", key, self.array_suffix);
                    let array_key = self.escape(&array_key);
                    for item in items {
                        self.push_line(&mut out, &array_key, pad, &self.render(item));
                    }
                }
                Value::Object(child) => children.push((key, child)),
                scalar => self.push_line(&mut out, &self.escape(key), pad, &self.render(scalar)),
            }
        }

        let section = section.filter(|name| !name.is_empty());
        if let Some(name) = section {
            if !out.is_empty() {
                let mut header = format!("[{}]{}", self.escape(name), self.eol);
                if self.options.newline {
                    header.push_str(self.eol);
                }
                out.insert_str(0, &header);
            }
        }

        for (key, child) in children {
            let nested = join_escaped(&split_sections(key, self.options.split_separator));
            let child_section = match section {
                Some(parent) => format!("{}.{}", parent, nested),
                None => nested,
            };
            let child_out = self.block(child, Some(&child_section));
            if !out.is_empty() && !child_out.is_empty() {
                out.push_str(self.eol);
            }
            out.push_str(&child_out);
        }

        out
    }
}
