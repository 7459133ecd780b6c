//! Configuration options for INI encoding and decoding.
//!
//! - [`DecodeOptions`]: quote stripping, array notation and section path separator
//! - [`EncodeOptions`]: alignment, sorting, whitespace, line endings and escaping
//! - [`Platform`]: picks the line ending used by the encoder
//!
//! ## Examples
//!
//! ```rust
//! use serde_ini_ext::{encode_with_options, ini, EncodeOptions, Platform};
//!
//! let data = ini!({ "name": "app", "debug": true });
//!
//! let options = EncodeOptions::new()
//!     .with_whitespace(true)
//!     .with_platform(Platform::Windows);
//! let text = encode_with_options(data.as_object().unwrap(), options);
//! assert_eq!(text, "name = app\r\ndebug = true\r\n");
//! ```

/// The host family whose line ending the encoder uses.
///
/// The encoder never looks at the machine it runs on; callers that want the
/// native convention pass `Platform::from_name(std::env::consts::OS)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Platform {
    /// CRLF line endings
    Windows,
    /// LF line endings
    #[default]
    Unix,
}

impl Platform {
    /// Maps a platform name to a line-ending family. Only `"windows"` selects
    /// CRLF; every other name (`"linux"`, `"darwin"`, `"macos"`...) selects LF.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini_ext::Platform;
    ///
    /// assert_eq!(Platform::from_name("windows"), Platform::Windows);
    /// assert_eq!(Platform::from_name("darwin"), Platform::Unix);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "windows" {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Returns the line terminator for this platform.
    #[must_use]
    pub const fn line_ending(&self) -> &'static str {
        match self {
            Platform::Windows => "\r\n",
            Platform::Unix => "\n",
        }
    }
}

/// Options controlling [`decode_with_options`](crate::decode_with_options).
///
/// # Examples
///
/// ```rust
/// use serde_ini_ext::DecodeOptions;
///
/// let options = DecodeOptions::new()
///     .with_bracketed_array(false)
///     .with_split_separator('*');
/// assert!(options.strip_quotes);
/// assert!(!options.bracketed_array);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// JSON-decode fully double-quoted values. Single quotes are always removed.
    pub strip_quotes: bool,
    /// `key[]` marks array entries. When `false`, a repeated key becomes an array.
    pub bracketed_array: bool,
    /// Separator between segments of a dotted section name.
    pub split_separator: char,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strip_quotes: true,
            bracketed_array: true,
            split_separator: '.',
        }
    }
}

impl DecodeOptions {
    /// Creates default options (strip quotes, bracketed arrays, `.` separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strip_quotes(mut self, strip_quotes: bool) -> Self {
        self.strip_quotes = strip_quotes;
        self
    }

    #[must_use]
    pub fn with_bracketed_array(mut self, bracketed_array: bool) -> Self {
        self.bracketed_array = bracketed_array;
        self
    }

    #[must_use]
    pub fn with_split_separator(mut self, separator: char) -> Self {
        self.split_separator = separator;
        self
    }
}

/// Options controlling [`encode_with_options`](crate::encode_with_options).
///
/// A bare section name converts into options through `From<&str>`:
///
/// ```rust
/// use serde_ini_ext::EncodeOptions;
///
/// let options = EncodeOptions::from("prefix");
/// assert_eq!(options.section.as_deref(), Some("prefix"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Pad keys so that every `=` of a block lines up. Implies `whitespace`.
    pub align: bool,
    /// Section name to emit the top-level keys under.
    pub section: Option<String>,
    /// Emit keys in lexicographic order instead of insertion order.
    pub sort: bool,
    /// Surround `=` with single spaces.
    pub whitespace: bool,
    /// Leave a blank line after each section header.
    pub newline: bool,
    pub platform: Platform,
    /// Suffix array keys with `[]`.
    pub bracketed_array: bool,
    /// Separator between segments of a dotted key.
    pub split_separator: char,
    /// Write keys, values and section names verbatim instead of escaping them.
    pub skip_escaping: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            align: false,
            section: None,
            sort: false,
            whitespace: false,
            newline: false,
            platform: Platform::default(),
            bracketed_array: true,
            split_separator: '.',
            skip_escaping: false,
        }
    }
}

impl EncodeOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ini_ext::{EncodeOptions, Platform};
    ///
    /// let options = EncodeOptions::new();
    /// assert!(options.bracketed_array);
    /// assert_eq!(options.platform, Platform::Unix);
    /// assert_eq!(options.separator(), "=");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn with_whitespace(mut self, whitespace: bool) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn with_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[must_use]
    pub fn with_bracketed_array(mut self, bracketed_array: bool) -> Self {
        self.bracketed_array = bracketed_array;
        self
    }

    #[must_use]
    pub fn with_split_separator(mut self, separator: char) -> Self {
        self.split_separator = separator;
        self
    }

    #[must_use]
    pub fn with_skip_escaping(mut self, skip_escaping: bool) -> Self {
        self.skip_escaping = skip_escaping;
        self
    }

    /// The token placed between a key and its value.
    ///
    /// ```rust
    /// use serde_ini_ext::EncodeOptions;
    ///
    /// assert_eq!(EncodeOptions::new().with_align(true).separator(), " = ");
    /// ```
    #[must_use]
    pub fn separator(&self) -> &'static str {
        if self.whitespace || self.align {
            " = "
        } else {
            "="
        }
    }
}

impl From<&str> for EncodeOptions {
    fn from(section: &str) -> Self {
        EncodeOptions::new().with_section(section)
    }
}

impl From<String> for EncodeOptions {
    fn from(section: String) -> Self {
        EncodeOptions::new().with_section(section)
    }
}
