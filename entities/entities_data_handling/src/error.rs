//! Error Policy Module
//!
//! Every buffer operation reports failures through [`BufferError`]. There are
//! exactly two kinds, mirroring the reference runtime: `RangeError` for a value,
//! offset or length outside its domain and `TypeError` for an argument of the
//! wrong kind. Messages are deterministic so callers can assert on them
//! verbatim.
//!
//! The constructors in this module own the message templates; nothing else in
//! the workspace formats an error message by hand.

use crate::constants::SEPARATOR_THRESHOLD;
use crate::value::{describe_received, inspect, number_to_js_string, Value};
use thiserror::Error;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// The two error kinds of the buffer engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Value, offset or length outside its valid domain
    Range,
    /// Argument of the wrong fundamental kind
    Type,
}

/// Error codes attached to buffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    OutOfRange,
    BufferOutOfBounds,
    InvalidArgType,
    InvalidArgValue,
    UnknownEncoding,
    InvalidBufferSize,
    InvalidCharacter,
    /// Native conversion failure (no runtime error code)
    Conversion,
}

impl ErrorCode {
    /// The runtime's error code string, if the error carries one
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ErrorCode::OutOfRange => Some("ERR_OUT_OF_RANGE"),
            ErrorCode::BufferOutOfBounds => Some("ERR_BUFFER_OUT_OF_BOUNDS"),
            ErrorCode::InvalidArgType => Some("ERR_INVALID_ARG_TYPE"),
            ErrorCode::InvalidArgValue => Some("ERR_INVALID_ARG_VALUE"),
            ErrorCode::UnknownEncoding => Some("ERR_UNKNOWN_ENCODING"),
            ErrorCode::InvalidBufferSize => Some("ERR_INVALID_BUFFER_SIZE"),
            ErrorCode::InvalidCharacter => Some("ERR_INVALID_CHARACTER"),
            ErrorCode::Conversion => None,
        }
    }
}

/// Buffer error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// RangeError
    #[error("{message}")]
    Range { code: ErrorCode, message: String },
    /// TypeError
    #[error("{message}")]
    Type { code: ErrorCode, message: String },
}

impl BufferError {
    /// Which of the two error kinds this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::Range { .. } => ErrorKind::Range,
            BufferError::Type { .. } => ErrorKind::Type,
        }
    }

    /// Error code
    pub fn code(&self) -> ErrorCode {
        match self {
            BufferError::Range { code, .. } | BufferError::Type { code, .. } => *code,
        }
    }

    /// Message text without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            BufferError::Range { message, .. } | BufferError::Type { message, .. } => message,
        }
    }

    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }

    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    fn range(code: ErrorCode, message: String) -> Self {
        BufferError::Range { code, message }
    }

    fn type_error(code: ErrorCode, message: String) -> Self {
        BufferError::Type { code, message }
    }

    /// `The value of "<name>" is out of range. It must be <range>. Received <value>`
    pub fn out_of_range(name: &str, range: &str, received: &Value) -> Self {
        Self::range(
            ErrorCode::OutOfRange,
            format!(
                "The value of \"{}\" is out of range. It must be {}. Received {}",
                name,
                range,
                format_out_of_range_received(received)
            ),
        )
    }

    /// Out-of-range error for a plain numeric argument
    pub fn out_of_range_number(name: &str, range: &str, received: f64) -> Self {
        Self::out_of_range(name, range, &Value::Number(received))
    }

    /// `The value of "<name>" is out of range.` without range details
    pub fn out_of_range_bare(name: &str) -> Self {
        Self::range(
            ErrorCode::OutOfRange,
            format!("The value of \"{}\" is out of range.", name),
        )
    }

    /// Access outside the underlying memory
    ///
    /// Without a name: `Attempt to access memory outside buffer bounds`.
    /// With a name: `"<name>" is outside of buffer bounds`.
    pub fn buffer_out_of_bounds(name: Option<&str>) -> Self {
        let message = match name {
            Some(name) => format!("\"{}\" is outside of buffer bounds", name),
            None => "Attempt to access memory outside buffer bounds".to_string(),
        };
        Self::range(ErrorCode::BufferOutOfBounds, message)
    }

    /// `The "<name>" argument must be <expected>. Received <description>`
    ///
    /// `expected` is the full phrase, e.g. `of type number` or
    /// `an instance of Buffer or Uint8Array`.
    pub fn invalid_arg_type(name: &str, expected: &str, received: &Value) -> Self {
        Self::type_error(
            ErrorCode::InvalidArgType,
            format!(
                "The \"{}\" argument must be {}. Received {}",
                name,
                expected,
                describe_received(received)
            ),
        )
    }

    /// `The argument '<name>' is invalid. Received <inspected>`
    pub fn invalid_arg_value(name: &str, received: &Value) -> Self {
        let mut inspected = inspect(received);
        if inspected.chars().count() > 128 {
            inspected = inspected.chars().take(128).collect::<String>() + "...";
        }
        Self::type_error(
            ErrorCode::InvalidArgValue,
            format!("The argument '{}' is invalid. Received {}", name, inspected),
        )
    }

    /// `Unknown encoding: <name>`
    pub fn unknown_encoding(name: &str) -> Self {
        Self::type_error(
            ErrorCode::UnknownEncoding,
            format!("Unknown encoding: {}", name),
        )
    }

    /// `Buffer size must be a multiple of <unit>`
    pub fn invalid_buffer_size(unit: &str) -> Self {
        Self::range(
            ErrorCode::InvalidBufferSize,
            format!("Buffer size must be a multiple of {}", unit),
        )
    }

    /// Malformed base64 input
    pub fn invalid_character() -> Self {
        Self::type_error(
            ErrorCode::InvalidCharacter,
            "The string to be decoded is not correctly encoded.".to_string(),
        )
    }

    /// Non Latin-1 input handed to `btoa`
    pub fn invalid_latin1_character() -> Self {
        Self::type_error(ErrorCode::InvalidCharacter, "Invalid character".to_string())
    }

    /// A BigInt used where a number is required
    pub fn bigint_to_number() -> Self {
        Self::type_error(
            ErrorCode::Conversion,
            "Cannot convert a BigInt value to a number".to_string(),
        )
    }
}

/// Render the `Received ...` part of an out-of-range message
///
/// Integers larger than 2^32 in magnitude get `_` digit separators and BigInts
/// carry an `n` suffix; everything else is inspected.
pub fn format_out_of_range_received(received: &Value) -> String {
    match received {
        Value::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() > SEPARATOR_THRESHOLD => {
            add_numerical_separator(&number_to_js_string(*n))
        }
        Value::BigInt(b) => {
            let mut text = b.to_string();
            if b.magnitude_exceeds(32) {
                text = add_numerical_separator(&text);
            }
            text + "n"
        }
        other => inspect(other),
    }
}

/// Insert `_` every three digits counting from the right
///
/// ```rust
/// use entities_data_handling::error::add_numerical_separator;
///
/// assert_eq!(add_numerical_separator("4294967297"), "4_294_967_297");
/// assert_eq!(add_numerical_separator("-12345"), "-12_345");
/// assert_eq!(add_numerical_separator("999"), "999");
/// ```
pub fn add_numerical_separator(digits: &str) -> String {
    let start = if digits.starts_with('-') { 1 } else { 0 };
    let mut end = digits.len();
    let mut groups: Vec<&str> = Vec::new();
    while end >= start + 4 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    let mut result = digits[..end].to_string();
    for group in groups.iter().rev() {
        result.push('_');
        result.push_str(group);
    }
    result
}
