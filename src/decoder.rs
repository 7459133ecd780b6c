//! INI text → [`IniMap`].
//!
//! Decoding is a single pass over the lines of the input followed by a pass
//! that nests dotted section names:
//!
//! 1. Blank lines and lines starting with `;` or `#` are skipped.
//! 2. `[name]` opens (or re-opens) the section `name` at the top level.
//! 3. `key=value` writes into the current section. A line without `=` sets
//!    the key to `true`. The literals `true`, `false` and `null` become
//!    booleans and null; every other value stays a string.
//! 4. `key[]=value` appends to an array (or, with bracketed arrays turned off,
//!    any key seen more than once in the same section becomes an array).
//! 5. `[a.b]` ends up as the mapping `b` inside the mapping `a`.
//!
//! The key `__proto__` is never written to the result. A `[__proto__]`
//! section is still parsed so that following lines stay inside it, but its
//! contents are thrown away.
//!
//! Lines that fit neither shape, such as `=value`, are skipped. Decoding never
//! fails.

use crate::escape::unsafe_str;
use crate::path::{split_sections, unescape_dots};
use crate::{DecodeOptions, IniMap, Value};
use log::debug;
use std::collections::{HashMap, HashSet};

/// The key that is dropped wherever it appears.
pub(crate) const RESERVED_KEY: &str = "__proto__";

/// Decodes INI text using the default [`DecodeOptions`].
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::{decode, Value};
///
/// let map = decode("=just junk!\n[foo]\nbar\n");
/// let foo = map.get("foo").and_then(Value::as_object).unwrap();
/// assert_eq!(foo.get("bar"), Some(&Value::Bool(true)));
/// ```
#[must_use]
pub fn decode(text: &str) -> IniMap {
    decode_with_options(text, DecodeOptions::default())
}

/// Decodes INI text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::{decode_with_options, DecodeOptions, Value};
///
/// let options = DecodeOptions::new().with_bracketed_array(false);
/// let map = decode_with_options("y=1\ny=2", options);
/// assert_eq!(
///     map.get("y"),
///     Some(&Value::Array(vec![Value::from("1"), Value::from("2")]))
/// );
/// ```
#[must_use]
pub fn decode_with_options(text: &str, options: DecodeOptions) -> IniMap {
    let mut decoder = Decoder::new(&options);
    for line in text.split(|c| c == '\r' || c == '\n') {
        decoder.line(line);
    }
    let mut out = decoder.finish();
    unflatten_sections(&mut out, options.split_separator);
    out
}

enum Line<'a> {
    Section(&'a str),
    Entry { key: &'a str, value: Option<&'a str> },
}

/// Matches a line against `[section]` or `key[=value]`.
fn classify(line: &str) -> Option<Line<'_>> {
    if let Some(rest) = line.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            if rest[end + 1..].chars().all(char::is_whitespace) {
                return Some(Line::Section(&rest[..end]));
            }
        }
    }
    match line.find('=') {
        Some(0) => None,
        Some(idx) => Some(Line::Entry {
            key: &line[..idx],
            value: Some(&line[idx + 1..]),
        }),
        None => Some(Line::Entry {
            key: line,
            value: None,
        }),
    }
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#')
}

/// Converts the literals `true`, `false` and `null`; everything else is a string.
fn literal(text: String) -> Value {
    match text.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => Value::String(text),
    }
}

fn new_object() -> Value {
    Value::Object(IniMap::new())
}

/// Replaces `value` with an empty mapping unless it already is one.
fn ensure_object(value: &mut Value) -> &mut IniMap {
    if !value.is_object() {
        *value = new_object();
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced with a mapping"),
    }
}

/// Where key lines are currently written.
enum Scope {
    Root,
    Section(String),
    Discarded,
}

struct Decoder<'o> {
    options: &'o DecodeOptions,
    out: IniMap,
    scope: Scope,
    discarded: IniMap,
    // Occurrences per (section, key); root is `None`.
    seen: HashMap<(Option<String>, String), usize>,
}

impl<'o> Decoder<'o> {
    fn new(options: &'o DecodeOptions) -> Self {
        Decoder {
            options,
            out: IniMap::new(),
            scope: Scope::Root,
            discarded: IniMap::new(),
            seen: HashMap::new(),
        }
    }

    fn finish(self) -> IniMap {
        self.out
    }

    fn line(&mut self, line: &str) {
        if is_skippable(line) {
            return;
        }
        match classify(line) {
            Some(Line::Section(name)) => self.open_section(name),
            Some(Line::Entry { key, value }) => self.entry(key, value),
            None => debug!("skipping malformed line {:?}", line),
        }
    }

    fn open_section(&mut self, raw: &str) {
        let name = unsafe_str(raw, true);
        if name == RESERVED_KEY {
            debug!("discarding contents of reserved section [{}]", name);
            self.discarded = IniMap::new();
            self.scope = Scope::Discarded;
            return;
        }
        ensure_object(self.out.get_or_insert_with(&name, new_object));
        self.scope = Scope::Section(name);
    }

    fn scope_name(&self) -> Option<String> {
        match &self.scope {
            Scope::Root => None,
            Scope::Section(name) => Some(name.clone()),
            Scope::Discarded => Some(RESERVED_KEY.to_string()),
        }
    }

    fn target(&mut self) -> &mut IniMap {
        match &self.scope {
            Scope::Root => &mut self.out,
            Scope::Discarded => &mut self.discarded,
            Scope::Section(name) => ensure_object(self.out.get_or_insert_with(name, new_object)),
        }
    }

    fn entry(&mut self, raw_key: &str, raw_value: Option<&str>) {
        let key_raw = unsafe_str(raw_key, true);

        let is_array = if self.options.bracketed_array {
            key_raw.len() > 2 && key_raw.ends_with("[]")
        } else {
            let scope = self.scope_name();
            let count = self.seen.entry((scope, key_raw.clone())).or_insert(0);
            *count += 1;
            *count > 1
        };
        let key = if is_array && self.options.bracketed_array {
            key_raw[..key_raw.len() - 2].to_string()
        } else {
            key_raw
        };

        if key == RESERVED_KEY {
            debug!("dropping reserved key {:?}", raw_key.trim());
            return;
        }

        let value = match raw_value {
            Some(text) => literal(unsafe_str(text, self.options.strip_quotes)),
            None => Value::Bool(true),
        };

        let target = self.target();
        if is_array {
            match target.get_mut(&key) {
                None => {
                    target.insert(key.clone(), Value::Array(Vec::new()));
                }
                Some(existing) if !existing.is_array() => {
                    let previous = std::mem::take(existing);
                    *existing = Value::Array(vec![previous]);
                }
                Some(_) => {}
            }
        }

        // A key written without brackets after an array was started still appends.
        match target.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            _ => {
                target.insert(key, value);
            }
        }
    }
}

/// Moves every top-level mapping with a dotted name to its nested position:
/// `{a: {y: 1}, "a.b": {x: 2}}` becomes `{a: {y: 1, b: {x: 2}}}`.
fn unflatten_sections(out: &mut IniMap, separator: char) {
    let dotted: Vec<String> = out
        .iter()
        .filter(|(_, value)| value.is_object())
        .map(|(key, _)| key.clone())
        .collect();

    // Moved sections leave a null slot behind until the final `retain`.
    let mut moved: HashSet<String> = HashSet::new();

    for key in dotted {
        let mut parts = split_sections(&key, separator);
        let last = parts.pop().unwrap_or_default();
        let name = unescape_dots(last);
        let parents: Vec<&str> = parts
            .into_iter()
            .filter(|part| *part != RESERVED_KEY)
            .collect();
        if parents.is_empty() && name == last {
            continue;
        }

        let section = match out.get_mut(&key) {
            Some(slot) if slot.is_object() => std::mem::take(slot),
            _ => continue,
        };
        let Value::Object(section) = section else {
            continue;
        };
        moved.insert(key.clone());
        if name == RESERVED_KEY {
            debug!("discarding reserved section path {:?}", key);
            continue;
        }

        // A root name that still holds a moved slot is gone; it is added
        // again at the end.
        let root = parents.first().map_or_else(|| name.clone(), |part| unescape_dots(part));
        if moved.remove(root.as_ref()) {
            out.remove(&root);
        }

        // Parents are looked up by their unescaped names, which is where an
        // already-moved parent section now lives.
        let mut target = &mut *out;
        for part in parents {
            let part = unescape_dots(part);
            target = ensure_object(target.get_or_insert_with(&part, new_object));
        }
        let name = name.into_owned();
        match target.get_mut(&name) {
            Some(Value::Object(existing)) => {
                for (k, v) in section {
                    existing.insert(k, v);
                }
            }
            _ => {
                target.insert(name, Value::Object(section));
            }
        }
    }

    if !moved.is_empty() {
        out.retain(|key, _| !moved.contains(key));
    }
}
