//! Argument Value Module
//!
//! Buffer entry points accept loosely-typed arguments (offsets that may be
//! missing, needles that may be strings, numbers or byte sequences, fill values
//! of several kinds). [`Value`] is the single representation of such an
//! argument. Conversions into `Value` exist for the ordinary Rust types, so
//! callers write `buf.read_uint16_be(0)` or `buf.index_of("world", -5, ())`.
//!
//! ## Coercion order
//!
//! Conversion to a number happens once, at the API boundary, through
//! [`Value::to_number`]:
//!
//! 1. primitive conversion: byte sequences and views become the comma-joined
//!    list of their byte values (`[5]` becomes `"5"`, `[]` becomes `""`)
//! 2. numeric parsing: strings are trimmed and parsed as decimal, `0x`/`0o`/`0b`
//!    literals or `Infinity`; anything else is NaN
//!
//! `undefined` is NaN, `null` is 0, booleans are 0 or 1 and a BigInt is a
//! TypeError.
//!
//! The module also owns the rendering of values inside error messages
//! (`inspect` and `describe_received`).

use crate::constants::INSPECT_MAX_BYTES;
use crate::error::{BufferError, BufferResult};
use crate::view::View;
use entities_utilities::BigNumber;

/// A loosely-typed argument
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Missing argument
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(BigNumber),
    String(String),
    /// A plain byte array (`Uint8Array`)
    Bytes(Vec<u8>),
    /// A buffer view
    View(View),
}

impl Value {
    /// `typeof` of the value
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Bytes(_) | Value::View(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// The number carried by a `Number` value, without coercion
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text carried by a `String` value, without coercion
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a number following the documented coercion order
    pub fn to_number(&self) -> BufferResult<f64> {
        match self {
            Value::Undefined => Ok(f64::NAN),
            Value::Null => Ok(0.0),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => Ok(*n),
            Value::BigInt(_) => Err(BufferError::bigint_to_number()),
            Value::String(s) => Ok(string_to_number(s)),
            Value::Bytes(bytes) => Ok(string_to_number(&join_bytes(bytes))),
            Value::View(view) => Ok(string_to_number(&join_bytes(&view.to_vec()))),
        }
    }

    /// Convert to a byte: number coercion, truncation, then modulo 256
    ///
    /// NaN and infinities become 0.
    pub fn to_uint8(&self) -> BufferResult<u8> {
        Ok(number_to_uint8(self.to_number()?))
    }

    /// `String(value)` for primitives; used when a value names an encoding
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_js_string(*n),
            Value::BigInt(b) => b.to_string(),
            Value::String(s) => s.clone(),
            Value::Bytes(bytes) => join_bytes(bytes),
            Value::View(view) => join_bytes(&view.to_vec()),
        }
    }
}

/// Truncate toward zero and wrap into `0..=255`
pub fn number_to_uint8(n: f64) -> u8 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(256.0) as u8
}

fn join_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parse a string the way numeric coercion does
///
/// ```rust
/// use entities_data_handling::value::string_to_number;
///
/// assert_eq!(string_to_number("  42 "), 42.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert_eq!(string_to_number("0x1f"), 31.0);
/// assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(string_to_number("12px").is_nan());
/// ```
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_literal(&trimmed[2..], radix);
    }
    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !valid {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    value
}

/// `Number.prototype.toString()` for a double
///
/// ```rust
/// use entities_data_handling::value::number_to_js_string;
///
/// assert_eq!(number_to_js_string(1.5), "1.5");
/// assert_eq!(number_to_js_string(-0.0), "0");
/// assert_eq!(number_to_js_string(1e21), "1e+21");
/// assert_eq!(number_to_js_string(1.5e-7), "1.5e-7");
/// assert_eq!(number_to_js_string(f64::NAN), "NaN");
/// ```
pub fn number_to_js_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{}", mantissa, sign, exponent.abs())
            }
            None => formatted,
        };
    }
    format!("{}", n)
}

fn inspect_number(n: f64) -> String {
    if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else {
        number_to_js_string(n)
    }
}

/// Quote a string the way the runtime's inspector does
///
/// Single quotes are preferred; a string containing a single quote but no
/// double quote is wrapped in double quotes, and one containing both in
/// backticks.
pub fn quote_js_string(text: &str) -> String {
    let quote = if !text.contains('\'') {
        '\''
    } else if !text.contains('"') {
        '"'
    } else if !text.contains('`') && !text.contains("${") {
        '`'
    } else {
        '\''
    };
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Render bytes as `<Buffer 48 65 6c ...>`
///
/// At most [`INSPECT_MAX_BYTES`] bytes are shown, the rest is summarised as
/// `... N more bytes`.
pub fn inspect_bytes(bytes: &[u8]) -> String {
    let shown = bytes.len().min(INSPECT_MAX_BYTES);
    let mut body = bytes[..shown]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    if bytes.len() > INSPECT_MAX_BYTES {
        let remaining = bytes.len() - INSPECT_MAX_BYTES;
        body.push_str(&format!(
            " ... {} more byte{}",
            remaining,
            if remaining > 1 { "s" } else { "" }
        ));
    }
    format!("<Buffer {}>", body)
}

fn inspect_uint8_array(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "Uint8Array(0) []".to_string();
    }
    let mut items: Vec<String> = bytes.iter().take(100).map(|b| b.to_string()).collect();
    if bytes.len() > 100 {
        let remaining = bytes.len() - 100;
        items.push(format!(
            "... {} more item{}",
            remaining,
            if remaining > 1 { "s" } else { "" }
        ));
    }
    format!("Uint8Array({}) [ {} ]", bytes.len(), items.join(", "))
}

/// Inspect a value for an error message
pub fn inspect(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => inspect_number(*n),
        Value::BigInt(b) => format!("{}n", b),
        Value::String(s) => quote_js_string(s),
        Value::Bytes(bytes) => inspect_uint8_array(bytes),
        Value::View(view) => inspect_bytes(&view.to_vec()),
    }
}

/// Describe the received value of an invalid-type error
///
/// Objects are described by their constructor (`an instance of Buffer`),
/// primitives by `type <typeof> (<inspected>)` with the inspected text cut
/// at 25 characters when it exceeds 28.
pub fn describe_received(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bytes(_) => "an instance of Uint8Array".to_string(),
        Value::View(_) => "an instance of Buffer".to_string(),
        other => {
            let mut inspected = inspect(other);
            if inspected.chars().count() > 28 {
                inspected = inspected.chars().take(25).collect::<String>() + "...";
            }
            format!("type {} ({})", other.type_of(), inspected)
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Undefined,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(value: &[u8; N]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<View> for Value {
    fn from(value: View) -> Self {
        Value::View(value)
    }
}

impl From<&View> for Value {
    fn from(value: &View) -> Self {
        Value::View(value.clone())
    }
}

impl From<BigNumber> for Value {
    fn from(value: BigNumber) -> Self {
        Value::BigInt(value)
    }
}

impl From<&BigNumber> for Value {
    fn from(value: &BigNumber) -> Self {
        Value::BigInt(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_primitives() {
        assert!(Value::Undefined.to_number().unwrap().is_nan());
        assert_eq!(Value::Null.to_number().unwrap(), 0.0);
        assert_eq!(Value::Bool(true).to_number().unwrap(), 1.0);
        assert_eq!(Value::from("  -3.5\n").to_number().unwrap(), -3.5);
        assert_eq!(Value::from("0b101").to_number().unwrap(), 5.0);
        assert_eq!(Value::from("0o17").to_number().unwrap(), 15.0);
        assert!(Value::from("inf").to_number().unwrap().is_nan());
        assert!(Value::from("0x").to_number().unwrap().is_nan());
    }

    #[test]
    fn test_to_number_objects_join_bytes() {
        assert_eq!(Value::Bytes(vec![7]).to_number().unwrap(), 7.0);
        assert_eq!(Value::Bytes(vec![]).to_number().unwrap(), 0.0);
        assert!(Value::Bytes(vec![1, 2]).to_number().unwrap().is_nan());
    }

    #[test]
    fn test_to_number_bigint_is_type_error() {
        let err = Value::BigInt(BigNumber::from_i64(1)).to_number().unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.message(), "Cannot convert a BigInt value to a number");
    }

    #[test]
    fn test_to_uint8_wraps() {
        assert_eq!(Value::from(257).to_uint8().unwrap(), 1);
        assert_eq!(Value::from(-1).to_uint8().unwrap(), 255);
        assert_eq!(Value::from(1.9).to_uint8().unwrap(), 1);
        assert_eq!(Value::from(f64::NAN).to_uint8().unwrap(), 0);
        assert_eq!(Value::from(f64::INFINITY).to_uint8().unwrap(), 0);
    }

    #[test]
    fn test_number_to_js_string() {
        assert_eq!(number_to_js_string(100.0), "100");
        assert_eq!(number_to_js_string(-2.25), "-2.25");
        assert_eq!(number_to_js_string(123456789012345680000.0), "123456789012345680000");
        assert_eq!(number_to_js_string(-1e22), "-1e+22");
        assert_eq!(number_to_js_string(0.000001), "0.000001");
        assert_eq!(number_to_js_string(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_inspect_values() {
        assert_eq!(inspect(&Value::Number(-0.0)), "-0");
        assert_eq!(inspect(&Value::from("it's")), "\"it's\"");
        assert_eq!(inspect(&Value::from("a\nb")), "'a\\nb'");
        assert_eq!(inspect(&Value::Bytes(vec![1, 2])), "Uint8Array(2) [ 1, 2 ]");
        assert_eq!(inspect(&Value::BigInt(BigNumber::from_i64(5))), "5n");
    }

    #[test]
    fn test_describe_received() {
        assert_eq!(describe_received(&Value::Undefined), "undefined");
        assert_eq!(describe_received(&Value::Bool(true)), "type boolean (true)");
        assert_eq!(describe_received(&Value::Number(1.5)), "type number (1.5)");
        assert_eq!(
            describe_received(&Value::from("abcdefghijklmnopqrstuvwxyz0123")),
            "type string ('abcdefghijklmnopqrstuvwx...)"
        );
        assert_eq!(describe_received(&Value::Bytes(vec![])), "an instance of Uint8Array");
    }

    #[test]
    fn test_inspect_bytes() {
        assert_eq!(inspect_bytes(b"Hello"), "<Buffer 48 65 6c 6c 6f>");
        assert_eq!(inspect_bytes(&[]), "<Buffer >");
        let long = vec![0u8; 52];
        assert!(inspect_bytes(&long).ends_with(" ... 2 more bytes>"));
        let long = vec![0u8; 51];
        assert!(inspect_bytes(&long).ends_with(" ... 1 more byte>"));
    }

    #[test]
    fn test_conversions() {
        assert!(matches!(Value::from(()), Value::Undefined));
        assert!(matches!(Value::from(None::<i32>), Value::Undefined));
        assert!(matches!(Value::from(Some(3)), Value::Number(n) if n == 3.0));
        assert!(matches!(Value::from(&[1u8, 2][..]), Value::Bytes(_)));
        assert_eq!(Value::Null.to_js_string(), "null");
    }
}
