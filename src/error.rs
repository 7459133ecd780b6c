//! Error types for INI serialization and deserialization.
//!
//! Decoding text into a [`Value`](crate::Value) and encoding a mapping back to
//! text never fail: malformed lines are skipped and odd escapes degrade to
//! literal text. Errors only surface at the edges of the crate:
//!
//! - **Serde conversions**: a Rust type that cannot be expressed as a mapping,
//!   or a decoded value that does not fit the requested type
//! - **I/O**: failures of the reader or writer handed to
//!   [`from_reader`](crate::from_reader) / [`to_writer`](crate::to_writer)
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini_ext::{from_str, Error};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug)]
//! struct Server { port: u16 }
//!
//! let result: Result<Server, Error> = from_str("port=not-a-number");
//! assert!(matches!(result, Err(Error::InvalidNumber { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur at the serde and I/O boundaries.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A decoded value did not have the shape the target type asked for
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A string could not be parsed into the requested numeric type
    #[error("Invalid number {value:?}: cannot parse as {target}")]
    InvalidNumber { value: String, target: &'static str },

    /// INI text can only be produced from a mapping at the top level
    #[error("Top-level value must be a mapping, found {0}")]
    TopLevelNotMapping(String),

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini_ext::Error;
    ///
    /// let err = Error::type_mismatch("array", "string");
    /// assert!(err.to_string().contains("expected array"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a string that does not parse as `target`.
    pub fn invalid_number(value: &str, target: &'static str) -> Self {
        Error::InvalidNumber {
            value: value.to_string(),
            target,
        }
    }

    /// Creates an unsupported type error for types that have no INI form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini_ext::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::invalid_number("abc", "u16");
        assert_eq!(err.to_string(), "Invalid number \"abc\": cannot parse as u16");

        let err = Error::TopLevelNotMapping("array".to_string());
        assert!(err.to_string().contains("found array"));
    }
}
