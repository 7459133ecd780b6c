//! # serde_ini_ext
//!
//! An INI codec with nested sections, arrays and a Serde bridge.
//!
//! ## The dialect
//!
//! - `[section]` headers, with dotted names for nesting (`[log.level]`)
//! - `key=value` entries; a key with no `=` reads as `true`
//! - `key[]=value` lines collect into an array
//! - `;` and `#` start comments, both on their own line and after a value
//! - values may be quoted (`"..."` uses JSON escapes, `'...'` is literal)
//! - the literals `true`, `false` and `null` decode to booleans and null
//!
//! Decoding never fails: lines that fit no shape are skipped. Entries and
//! sections named `__proto__` are always dropped.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_ini_ext = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Dynamic values
//!
//! ```rust
//! use serde_ini_ext::{decode, encode, Value};
//!
//! let text = "\
//! name=app
//! [log]
//! type=file
//! [log.level]
//! label=debug
//! ";
//!
//! let config = decode(text);
//! let log = config.get("log").and_then(Value::as_object).unwrap();
//! assert_eq!(log.get("type").and_then(Value::as_str), Some("file"));
//! assert!(log.get("level").is_some_and(Value::is_object));
//!
//! assert_eq!(
//!     encode(&config),
//!     "name=app\n\n[log]\ntype=file\n\n[log.level]\nlabel=debug\n"
//! );
//! ```
//!
//! ### Typed configuration
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_ini_ext::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Config {
//!     name: String,
//!     server: Server,
//! }
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     port: u16,
//!     hosts: Vec<String>,
//! }
//!
//! let config = Config {
//!     name: "app".to_string(),
//!     server: Server { port: 8080, hosts: vec!["a".to_string(), "b".to_string()] },
//! };
//!
//! let text = to_string(&config).unwrap();
//! assert_eq!(text, "name=app\n\n[server]\nport=8080\nhosts[]=a\nhosts[]=b\n");
//!
//! let back: Config = from_str(&text).unwrap();
//! assert_eq!(back, config);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and installs no logger. Dropped
//! reserved keys and skipped lines are reported at `debug`, array elements
//! that had to be written as JSON at `warn`.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - typed structs to INI and back
//! - **`dynamic_values.rs`** - decoding, inspecting and editing a [`Value`] tree
//! - **`custom_options.rs`** - alignment, sorting, line endings and friends
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod ser;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use decoder::{decode, decode_with_options};
pub use encoder::{encode, encode_with_options};
pub use error::{Error, Result};
pub use escape::{safe, unsafe_str};
pub use map::IniMap;
pub use options::{DecodeOptions, EncodeOptions, Platform};
pub use path::split_sections;
pub use ser::{to_value, ValueSerializer};
pub use value::Value;

/// Alias of [`decode`].
pub use decoder::decode as parse;
/// Alias of [`encode`].
pub use encoder::encode as stringify;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to an INI string.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let ini = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(ini, "x=1\ny=2\n");
/// ```
///
/// # Errors
///
/// Returns an error if `T` is not a struct or map at the top level, or
/// holds a type with no INI form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to an INI string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::{to_string_with_options, EncodeOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let options = EncodeOptions::new()
///     .with_section("origin")
///     .with_whitespace(true);
/// let ini = to_string_with_options(&Point { x: 0, y: 0 }, options).unwrap();
/// assert_eq!(ini, "[origin]\nx = 0\ny = 0\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::TopLevelNotMapping`] when `T` does not serialize to a
/// mapping, and any error of [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: impl Into<EncodeOptions>) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        Value::Object(map) => Ok(encode_with_options(&map, options)),
        other => Err(Error::TopLevelNotMapping(other.type_name().to_string())),
    }
}

/// Serialize any `T: Serialize` to a writer as INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x=1\ny=2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer as INI text with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: impl Into<EncodeOptions>,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let ini_string = to_string_with_options(value, options)?;
    writer
        .write_all(ini_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x=1\ny=-2").unwrap();
/// assert_eq!(point, Point { x: 1, y: -2 });
/// ```
///
/// # Errors
///
/// The text itself always decodes; errors come from a decoded shape that
/// does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, DecodeOptions::default())
}

/// Deserialize an instance of type `T` from INI text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::{from_str_with_options, DecodeOptions};
/// use std::collections::HashMap;
///
/// let options = DecodeOptions::new().with_bracketed_array(false);
/// let map: HashMap<String, Vec<String>> =
///     from_str_with_options("path=/usr\npath=/opt", options).unwrap();
/// assert_eq!(map["path"], vec!["/usr", "/opt"]);
/// ```
///
/// # Errors
///
/// Returns an error if the decoded shape does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(Value::Object(decode_with_options(s, options)))
}

/// Deserialize an instance of type `T` from an I/O stream of INI text.
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x=1\ny=2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the data cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of INI text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
