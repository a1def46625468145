//! Argument Validation Module
//!
//! Validators shared by every buffer entry point. Each one takes the raw
//! [`Value`] an operation received, checks its kind and domain, and returns the
//! native value the operation works with. Validation always runs before any
//! byte is touched, so a failing call leaves every view unchanged.

use crate::constants::{K_MAX_LENGTH, MAX_SAFE_INTEGER};
use crate::error::{BufferError, BufferResult};
use crate::value::{number_to_js_string, Value};

fn range_text(min: Option<f64>, max: Option<f64>) -> String {
    let mut text = String::new();
    if let Some(min) = min {
        text.push_str(&format!(">= {}", number_to_js_string(min)));
    }
    if min.is_some() && max.is_some() {
        text.push_str(" && ");
    }
    if let Some(max) = max {
        text.push_str(&format!("<= {}", number_to_js_string(max)));
    }
    text
}

/// Require a number, optionally within `[min, max]`
///
/// NaN is rejected whenever a bound is given.
pub fn validate_number(
    value: &Value,
    name: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> BufferResult<f64> {
    let n = match value {
        Value::Number(n) => *n,
        other => return Err(BufferError::invalid_arg_type(name, "of type number", other)),
    };
    let below = min.map_or(false, |min| n < min);
    let above = max.map_or(false, |max| n > max);
    let bounded = min.is_some() || max.is_some();
    if below || above || (bounded && n.is_nan()) {
        return Err(BufferError::out_of_range(name, &range_text(min, max), value));
    }
    Ok(n)
}

/// Require an integral number within `[min, max]`
pub fn validate_integer(value: &Value, name: &str, min: f64, max: f64) -> BufferResult<i64> {
    let n = match value {
        Value::Number(n) => *n,
        other => return Err(BufferError::invalid_arg_type(name, "of type number", other)),
    };
    if !n.is_finite() || n.trunc() != n {
        return Err(BufferError::out_of_range(name, "an integer", value));
    }
    if n < min || n > max {
        return Err(BufferError::out_of_range(
            name,
            &range_text(Some(min), Some(max)),
            value,
        ));
    }
    Ok(n as i64)
}

/// Validate a buffer position in `[0, max]`
pub fn validate_offset(value: &Value, name: &str, max: usize) -> BufferResult<usize> {
    validate_integer(value, name, 0.0, max as f64).map(|n| n as usize)
}

/// Like [`validate_offset`] but an undefined argument yields `default`
pub fn validate_offset_or(
    value: &Value,
    name: &str,
    max: usize,
    default: usize,
) -> BufferResult<usize> {
    if value.is_undefined() {
        return Ok(default);
    }
    validate_offset(value, name, max)
}

/// Error for a position that does not fit `[0, last]`
///
/// Non-integers are reported as such; when the view is too short for the
/// access at all, the generic bounds error is raised.
pub fn bounds_error(value: f64, last: i64, name: Option<&str>) -> BufferError {
    let label = name.unwrap_or("offset");
    if value.floor() != value {
        return BufferError::out_of_range_number(label, "an integer", value);
    }
    if last < 0 {
        return BufferError::buffer_out_of_bounds(None);
    }
    let lower = if name.is_some() { 1 } else { 0 };
    BufferError::out_of_range_number(label, &format!(">= {} and <= {}", lower, last), value)
}

/// Validate a codec offset for an access of `width` bytes into `length` bytes
///
/// An undefined offset means 0. Returns the offset as an index.
pub fn check_bounds(offset: &Value, length: usize, width: usize) -> BufferResult<usize> {
    let n = codec_offset_number(offset)?;
    let last = length as i64 - width as i64;
    if n.floor() != n || last < 0 || n < 0.0 || n > last as f64 {
        return Err(bounds_error(n, last, None));
    }
    Ok(n as usize)
}

/// Type check of a codec offset; undefined means 0
pub fn codec_offset_number(offset: &Value) -> BufferResult<f64> {
    match offset {
        Value::Undefined => Ok(0.0),
        Value::Number(n) => Ok(*n),
        other => Err(BufferError::invalid_arg_type(
            "offset",
            "of type number",
            other,
        )),
    }
}

/// Validate the width argument of the variable-width codecs (1 to 6 bytes)
pub fn validate_byte_length(value: &Value) -> BufferResult<usize> {
    let n = match value {
        Value::Number(n) => *n,
        other => {
            return Err(BufferError::invalid_arg_type(
                "byteLength",
                "of type number",
                other,
            ))
        }
    };
    if n.floor() != n || !(1.0..=6.0).contains(&n) {
        return Err(bounds_error(n, 6, Some("byteLength")));
    }
    Ok(n as usize)
}

/// Validate an allocation size: an integer in `[0, K_MAX_LENGTH]`
pub fn validate_size(value: &Value) -> BufferResult<usize> {
    let n = validate_number(value, "size", Some(0.0), Some(K_MAX_LENGTH as f64))?;
    if n.trunc() != n {
        return Err(BufferError::out_of_range("size", "an integer", value));
    }
    Ok(n as usize)
}

/// Truncate an optional position argument the way `toInteger` does
///
/// Undefined, NaN and anything outside the safe integer range map to
/// `default`; fractions are floored.
pub fn to_integer(value: &Value, default: i64) -> BufferResult<i64> {
    if value.is_undefined() {
        return Ok(default);
    }
    let n = value.to_number()?;
    if n.is_nan() || n.abs() > MAX_SAFE_INTEGER {
        return Ok(default);
    }
    Ok(n.floor() as i64)
}

/// Relative index adjustment used by `slice`/`subarray`
///
/// Undefined and NaN mean `default`; negative values count back from
/// `length`; the result is clamped into `[0, length]`.
pub fn adjust_offset(value: &Value, length: usize, default: usize) -> BufferResult<usize> {
    if value.is_undefined() {
        return Ok(default);
    }
    let n = value.to_number()?;
    if n.is_nan() {
        return Ok(0);
    }
    Ok(adjust_index(n.trunc(), length))
}

/// Clamp a truncated index into `[0, length]`, counting negatives from the end
pub fn adjust_index(n: f64, length: usize) -> usize {
    let len = length as f64;
    if n < 0.0 {
        (len + n).max(0.0) as usize
    } else {
        n.min(len) as usize
    }
}
