//! Encoding Module
//!
//! The closed set of text encodings a buffer converts to and from, with the
//! case-insensitive name normalisation used by every string-accepting entry
//! point.

use crate::error::{BufferError, BufferResult};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    /// UTF-16 little endian, also named `ucs2`
    Utf16le,
    /// One byte per code unit, also named `binary`
    Latin1,
    Ascii,
    Base64,
    Base64Url,
    Hex,
}

impl Encoding {
    /// Normalise an encoding name
    ///
    /// Returns None for an unknown name. The empty string means utf8.
    ///
    /// ```rust
    /// use entities_data_handling::Encoding;
    ///
    /// assert_eq!(Encoding::normalize("UTF-8"), Some(Encoding::Utf8));
    /// assert_eq!(Encoding::normalize("ucs-2"), Some(Encoding::Utf16le));
    /// assert_eq!(Encoding::normalize("Binary"), Some(Encoding::Latin1));
    /// assert_eq!(Encoding::normalize("utf9"), None);
    /// ```
    pub fn normalize(name: &str) -> Option<Self> {
        let encoding = match name.to_ascii_lowercase().as_str() {
            "" | "utf8" | "utf-8" => Encoding::Utf8,
            "ucs2" | "ucs-2" | "utf16le" | "utf-16le" => Encoding::Utf16le,
            "latin1" | "binary" => Encoding::Latin1,
            "ascii" => Encoding::Ascii,
            "base64" => Encoding::Base64,
            "base64url" => Encoding::Base64Url,
            "hex" => Encoding::Hex,
            _ => return None,
        };
        Some(encoding)
    }

    /// Encoding named by an argument; undefined means utf8
    ///
    /// Any other value is converted to a string first, so `null` reports
    /// `Unknown encoding: null`.
    pub fn from_value(value: &Value) -> BufferResult<Self> {
        match value {
            Value::Undefined => Ok(Encoding::Utf8),
            other => {
                let name = other.to_js_string();
                Self::normalize(&name).ok_or_else(|| BufferError::unknown_encoding(&name))
            }
        }
    }

    /// Encoding for string construction: only a string argument is
    /// considered, anything else means utf8
    pub fn from_value_lenient(value: &Value) -> BufferResult<Self> {
        match value {
            Value::String(name) => {
                Self::normalize(name).ok_or_else(|| BufferError::unknown_encoding(name))
            }
            _ => Ok(Encoding::Utf8),
        }
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Utf16le => "utf16le",
            Encoding::Latin1 => "latin1",
            Encoding::Ascii => "ascii",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Hex => "hex",
        }
    }

    /// True if `name` is a recognised, non-empty encoding name
    pub fn is_encoding(name: &str) -> bool {
        !name.is_empty() && Self::normalize(name).is_some()
    }
}

impl FromStr for Encoding {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s).ok_or_else(|| BufferError::unknown_encoding(s))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Encoding> for Value {
    fn from(encoding: Encoding) -> Self {
        Value::String(encoding.name().to_string())
    }
}
