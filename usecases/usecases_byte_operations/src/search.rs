//! Search Module
//!
//! `indexOf` / `lastIndexOf` / `includes` over a view.
//!
//! The needle is converted to bytes once, before scanning:
//! - a string is encoded with the requested encoding
//! - a number is reduced to a single byte (`value mod 256`)
//! - a byte array or view is used as is
//!
//! The start offset is normalised the same way in both directions:
//! - a string in the offset position names the encoding instead
//! - the offset is clamped to `[-2^31, 2^31 - 1]`, coerced to a number and
//!   truncated; NaN means 0 forward and `len` backward
//! - a negative offset counts back from the end
//!
//! An empty needle matches at the normalised offset clamped to `[0, len]`.
//! Forward searches report the lowest match at or after the start, backward
//! searches the highest match at or before it. utf16le searches compare
//! whole 2-byte code units at even positions only.

use entities_data_handling::constants::{SEARCH_OFFSET_MAX, SEARCH_OFFSET_MIN};
use entities_data_handling::value::number_to_uint8;
use entities_data_handling::{BufferError, BufferResult, Encoding, Value, View};
use infrastructure_data_handling::transcoder;

/// Scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing indices (`indexOf`)
    Forward,
    /// Decreasing indices (`lastIndexOf`)
    Backward,
}

impl Direction {
    fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

/// Search `haystack` for `needle`, returning the match index or -1
///
/// ```rust
/// use entities_data_handling::{Value, View};
/// use usecases_byte_operations::search::{index_of, Direction};
///
/// let haystack = View::from_vec(b"hello world".to_vec());
/// let found = index_of(&haystack, &Value::from("world"), &Value::from(-5), &Value::Undefined, Direction::Forward);
/// assert_eq!(found.unwrap(), 6);
/// ```
pub fn index_of(
    haystack: &View,
    needle: &Value,
    byte_offset: &Value,
    encoding: &Value,
    direction: Direction,
) -> BufferResult<i64> {
    let (offset, encoding) = match byte_offset {
        Value::String(_) => (f64::NAN, byte_offset),
        other => (other.to_number()?, encoding),
    };
    let length = haystack.len();
    let offset = if offset.is_nan() {
        if direction.is_forward() {
            0
        } else {
            length as i64
        }
    } else {
        offset.clamp(SEARCH_OFFSET_MIN, SEARCH_OFFSET_MAX).trunc() as i64
    };

    let (pattern, ucs2) = match needle {
        Value::Number(n) => (vec![number_to_uint8(*n)], false),
        Value::String(text) => {
            let named = match encoding {
                Value::String(name) if name.is_empty() => None,
                other => resolve_encoding(other),
            };
            let encoding =
                named.ok_or_else(|| BufferError::unknown_encoding(&encoding.to_js_string()))?;
            (
                transcoder::encode(text, encoding)?,
                encoding == Encoding::Utf16le,
            )
        }
        Value::Bytes(bytes) => (
            bytes.clone(),
            resolve_encoding(encoding) == Some(Encoding::Utf16le),
        ),
        Value::View(view) => (
            view.to_vec(),
            resolve_encoding(encoding) == Some(Encoding::Utf16le),
        ),
        other => {
            return Err(BufferError::invalid_arg_type(
                "value",
                "of type number or string or an instance of Buffer or Uint8Array",
                other,
            ))
        }
    };

    Ok(haystack.with_bytes(|bytes| search_bytes(bytes, &pattern, offset, direction, ucs2)))
}

/// True if `needle` occurs at or after the normalised offset
pub fn includes(
    haystack: &View,
    needle: &Value,
    byte_offset: &Value,
    encoding: &Value,
) -> BufferResult<bool> {
    index_of(haystack, needle, byte_offset, encoding, Direction::Forward).map(|i| i != -1)
}

fn resolve_encoding(encoding: &Value) -> Option<Encoding> {
    match encoding {
        Value::Undefined => Some(Encoding::Utf8),
        other => Encoding::normalize(&other.to_js_string()),
    }
}

/// Resolve a possibly negative or out-of-range start into a scan position
///
/// Returns -1 when the search cannot match at all.
pub fn start_position(length: usize, offset: i64, needle_length: usize, direction: Direction) -> i64 {
    let length = length as i64;
    let needle_length = needle_length as i64;
    if offset < 0 {
        if offset + length >= 0 {
            length + offset
        } else if direction.is_forward() || needle_length == 0 {
            0
        } else {
            -1
        }
    } else if offset + needle_length <= length {
        offset
    } else if needle_length == 0 {
        length
    } else if direction.is_forward() {
        -1
    } else {
        length - 1
    }
}

/// Byte-level search with an already normalised offset
pub fn search_bytes(
    haystack: &[u8],
    needle: &[u8],
    offset: i64,
    direction: Direction,
    ucs2: bool,
) -> i64 {
    let start = start_position(haystack.len(), offset, needle.len(), direction);
    if needle.is_empty() {
        return start;
    }
    if haystack.is_empty() || start < 0 {
        return -1;
    }
    let start = start as usize;
    if needle.len() > haystack.len() || (direction.is_forward() && start + needle.len() > haystack.len()) {
        return -1;
    }
    if ucs2 {
        if haystack.len() < 2 || needle.len() < 2 {
            return -1;
        }
        let hay = to_units(haystack);
        let pat = to_units(needle);
        return match find(&hay, &pat, start / 2, direction) {
            Some(unit) => (unit * 2) as i64,
            None => -1,
        };
    }
    find(haystack, needle, start, direction).map_or(-1, |i| i as i64)
}

fn to_units(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

fn find<T: PartialEq>(haystack: &[T], needle: &[T], start: usize, direction: Direction) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let last = haystack.len() - needle.len();
    match direction {
        Direction::Forward => (start..=last).find(|&i| haystack[i..i + needle.len()] == *needle),
        Direction::Backward => (0..=start.min(last))
            .rev()
            .find(|&i| haystack[i..i + needle.len()] == *needle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hay(text: &str) -> View {
        View::from_vec(text.as_bytes().to_vec())
    }

    fn forward(view: &View, needle: impl Into<Value>, offset: impl Into<Value>) -> i64 {
        index_of(view, &needle.into(), &offset.into(), &Value::Undefined, Direction::Forward).unwrap()
    }

    fn backward(view: &View, needle: impl Into<Value>, offset: impl Into<Value>) -> i64 {
        index_of(view, &needle.into(), &offset.into(), &Value::Undefined, Direction::Backward).unwrap()
    }

    #[test]
    fn test_forward_and_backward() {
        let view = hay("abcabc");
        assert_eq!(forward(&view, "bc", ()), 1);
        assert_eq!(forward(&view, "bc", 2), 4);
        assert_eq!(backward(&view, "bc", ()), 4);
        assert_eq!(backward(&view, "bc", 3), 1);
        assert_eq!(backward(&view, "bc", 4), 4);
        assert_eq!(forward(&view, "x", ()), -1);
    }

    #[test]
    fn test_offset_normalisation() {
        let view = hay("hello world");
        assert_eq!(forward(&view, "world", -5), 6);
        assert_eq!(forward(&view, "o", -100), 4);
        assert_eq!(backward(&view, "o", -100), -1);
        assert_eq!(forward(&view, "o", 100), -1);
        assert_eq!(backward(&view, "o", 100), 7);
        assert_eq!(forward(&view, "o", f64::NAN), 4);
        assert_eq!(backward(&view, "o", f64::NAN), 7);
        assert_eq!(forward(&view, "o", 4.9), 4);
        assert_eq!(forward(&view, "o", Value::Null), 4);
    }

    #[test]
    fn test_empty_needle() {
        let view = hay("abc");
        assert_eq!(forward(&view, "", 1), 1);
        assert_eq!(forward(&view, "", 10), 3);
        assert_eq!(forward(&view, "", -10), 0);
        assert_eq!(backward(&view, "", -10), 0);
        assert_eq!(backward(&view, "", ()), 3);
        assert_eq!(forward(&View::empty(), "", 0), 0);
        assert_eq!(forward(&View::empty(), "a", 0), -1);
    }

    #[test]
    fn test_backward_start_before_beginning() {
        assert_eq!(start_position(3, -10, 1, Direction::Backward), -1);
        assert_eq!(start_position(3, -10, 0, Direction::Backward), 0);
        assert_eq!(start_position(3, -10, 1, Direction::Forward), 0);
        assert_eq!(backward(&hay("abc"), "a", -4), -1);
        assert_eq!(backward(&hay("abc"), "a", -3), 0);
    }

    #[test]
    fn test_number_needle() {
        let view = View::from_vec(vec![1, 2, 255, 2]);
        assert_eq!(forward(&view, 2, ()), 1);
        assert_eq!(forward(&view, 258, ()), 1);
        assert_eq!(forward(&view, -1, ()), 2);
        assert_eq!(backward(&view, 2, ()), 3);
        assert_eq!(forward(&view, 2.7, ()), 1);
    }

    #[test]
    fn test_string_offset_is_encoding() {
        let view = hay("abc");
        let found = index_of(
            &view,
            &Value::from("6263"),
            &Value::from("hex"),
            &Value::Undefined,
            Direction::Forward,
        )
        .unwrap();
        assert_eq!(found, 1);
    }

    #[test]
    fn test_ucs2_alignment() {
        let bytes = transcoder::encode("\u{0100}\u{0001}", Encoding::Utf16le).unwrap();
        let view = View::from_vec(bytes);
        // bytes are 00 01 01 00; "\u{0101}" is 01 01 at odd offset 1 only
        let enc = Value::from("ucs2");
        let found = index_of(&view, &Value::from("\u{0101}"), &Value::Undefined, &enc, Direction::Forward).unwrap();
        assert_eq!(found, -1);
        let found = index_of(&view, &Value::Bytes(vec![1, 1]), &Value::Undefined, &enc, Direction::Forward).unwrap();
        assert_eq!(found, -1);
        let found = index_of(&view, &Value::from("\u{0001}"), &Value::Undefined, &enc, Direction::Backward).unwrap();
        assert_eq!(found, 2);
    }

    #[test]
    fn test_errors() {
        let view = hay("abc");
        let err = index_of(&view, &Value::Bool(true), &Value::Undefined, &Value::Undefined, Direction::Forward)
            .unwrap_err();
        assert_eq!(
            err.message(),
            "The \"value\" argument must be of type number or string or an instance of Buffer or Uint8Array. Received type boolean (true)"
        );
        let err = index_of(&view, &Value::from("a"), &Value::Undefined, &Value::from("bogus"), Direction::Forward)
            .unwrap_err();
        assert_eq!(err.message(), "Unknown encoding: bogus");
        // byte needles ignore an unknown encoding
        let found = index_of(&view, &Value::Bytes(b"c".to_vec()), &Value::Undefined, &Value::from("bogus"), Direction::Forward)
            .unwrap();
        assert_eq!(found, 2);
    }

    #[test]
    fn test_includes() {
        let view = hay("buffer");
        assert!(includes(&view, &Value::from("fer"), &Value::Undefined, &Value::Undefined).unwrap());
        assert!(!includes(&view, &Value::from("buf"), &Value::from(1), &Value::Undefined).unwrap());
    }
}
