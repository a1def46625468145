//! Fill Module
//!
//! `fill(value, offset, end, encoding)` over a view. A numeric value (or any
//! value that is neither a string nor bytes) is reduced to one byte and
//! repeated; strings are encoded first and byte arrays used as they are, with
//! the resulting pattern repeated and cut at `end`.
//!
//! With a string value the argument list is shifted: a string in the offset
//! position names the encoding and fills the whole view, a string in the end
//! position names the encoding and fills to the end.

use entities_data_handling::constants::K_MAX_LENGTH;
use entities_data_handling::validation::validate_offset;
use entities_data_handling::{BufferError, BufferResult, Encoding, Value, View};
use infrastructure_data_handling::transcoder;

enum Pattern {
    Byte(u8),
    Repeat(Vec<u8>),
}

/// Fill `view[offset..end]`
///
/// # Errors
/// - TypeError for a non-string encoding argument or an unknown encoding
/// - RangeError for an offset or end outside its domain
/// - TypeError `The argument 'value' is invalid` when the value encodes to
///   no bytes
///
/// ```rust
/// use entities_data_handling::{Value, View};
/// use usecases_byte_operations::fill::fill;
///
/// let view = View::from_vec(vec![0; 5]);
/// fill(&view, &Value::from("ab"), &Value::from(1), &Value::Undefined, &Value::Undefined).unwrap();
/// assert_eq!(view.to_vec(), b"\0abab");
/// ```
pub fn fill(
    view: &View,
    value: &Value,
    offset: &Value,
    end: &Value,
    encoding: &Value,
) -> BufferResult<()> {
    let whole = Value::Undefined;
    let mut offset = offset;
    let mut end = end;
    let mut encoding = encoding;
    let pattern = match value {
        Value::String(text) => {
            if offset.is_undefined() || matches!(offset, Value::String(_)) {
                encoding = offset;
                offset = &whole;
                end = &whole;
            } else if matches!(end, Value::String(_)) {
                encoding = end;
                end = &whole;
            }
            let encoding = resolve_encoding(encoding)?;
            string_pattern(text, encoding)?
        }
        Value::Bytes(bytes) => Pattern::Repeat(bytes.clone()),
        Value::View(source) => Pattern::Repeat(source.to_vec()),
        other => Pattern::Byte(other.to_uint8()?),
    };

    let length = view.len();
    let (start, stop) = if offset.is_undefined() {
        (0, length)
    } else {
        let start = validate_offset(offset, "offset", K_MAX_LENGTH)?;
        let stop = if end.is_undefined() {
            length
        } else {
            validate_offset(end, "end", length)?
        };
        if start >= stop {
            return Ok(());
        }
        (start, stop)
    };

    match pattern {
        Pattern::Byte(byte) => view.with_bytes_mut(|bytes| bytes[start..stop].fill(byte)),
        Pattern::Repeat(pattern) => {
            if pattern.is_empty() {
                return Err(BufferError::invalid_arg_value("value", value));
            }
            view.with_bytes_mut(|bytes| {
                for (slot, byte) in bytes[start..stop].iter_mut().zip(pattern.iter().cycle()) {
                    *slot = *byte;
                }
            });
        }
    }
    Ok(())
}

fn resolve_encoding(encoding: &Value) -> BufferResult<Encoding> {
    match encoding {
        Value::Undefined | Value::Null => Ok(Encoding::Utf8),
        Value::String(name) => {
            Encoding::normalize(name).ok_or_else(|| BufferError::unknown_encoding(name))
        }
        other => Err(BufferError::invalid_arg_type(
            "encoding",
            "of type string",
            other,
        )),
    }
}

fn string_pattern(text: &str, encoding: Encoding) -> BufferResult<Pattern> {
    let mut units = text.encode_utf16();
    match (units.next(), units.next()) {
        (None, _) => return Ok(Pattern::Byte(0)),
        (Some(code), None) => match encoding {
            Encoding::Utf8 if code < 128 => return Ok(Pattern::Byte(code as u8)),
            Encoding::Latin1 => return Ok(Pattern::Byte(code as u8)),
            _ => {}
        },
        _ => {}
    }
    Ok(Pattern::Repeat(transcoder::encode(text, encoding)?))
}
