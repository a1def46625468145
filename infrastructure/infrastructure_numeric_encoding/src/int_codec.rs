//! Integer Codec Module
//!
//! Reads and writes two's complement integers of 1 to 6 bytes in either byte
//! order. Offsets and values arrive as [`Value`]s and are validated here,
//! before any byte is written.
//!
//! Value handling on write:
//!
//! 1. the value is coerced to a number
//! 2. the number is truncated toward zero (NaN becomes 0)
//! 3. the truncated number is checked against the width's range
//!
//! The out-of-range message reports the value as received.

use crate::byte_order::{get_uint, put_uint, sign_extend};
use entities_data_handling::validation::{check_bounds, codec_offset_number, validate_byte_length};
use entities_data_handling::{
    BufferError, BufferResult, Endianness, NumericWidth, Value, View,
};

/// Widest field the integer codec handles; 64-bit fields go through
/// [`BigIntCodec`](crate::BigIntCodec)
pub const MAX_INT_WIDTH: usize = 6;

/// Codec for integers up to 48 bits
pub struct IntCodec;

impl IntCodec {
    /// Read an integer field
    ///
    /// An undefined offset reads at 0. Widths above [`MAX_INT_WIDTH`] are a
    /// RangeError.
    pub fn read(view: &View, offset: &Value, width: NumericWidth) -> BufferResult<i64> {
        check_width(width)?;
        let start = check_bounds(offset, view.len(), width.width_bytes())?;
        let raw = view.with_bytes(|bytes| {
            get_uint(&bytes[start..start + width.width_bytes()], width.endianness())
        });
        Ok(if width.is_signed() {
            sign_extend(raw, width.bits())
        } else {
            raw as i64
        })
    }

    /// Write an integer field, returning the offset just past it
    pub fn write(
        view: &View,
        value: &Value,
        offset: &Value,
        width: NumericWidth,
    ) -> BufferResult<usize> {
        check_width(width)?;
        let number = value.to_number()?;
        if width.width_bytes() == 1 {
            codec_offset_number(offset)?;
        }
        let truncated = check_int(number, value, width)?;
        let start = check_bounds(offset, view.len(), width.width_bytes())?;
        let end = start + width.width_bytes();
        view.with_bytes_mut(|bytes| {
            put_uint(&mut bytes[start..end], truncated as u64, width.endianness())
        });
        Ok(end)
    }

    /// Read a field whose width is given at call time (1 to 6 bytes)
    ///
    /// Unlike the fixed-width readers the offset is required.
    pub fn read_variable(
        view: &View,
        offset: &Value,
        byte_length: &Value,
        signed: bool,
        endianness: Endianness,
    ) -> BufferResult<i64> {
        require_offset(offset)?;
        let width = variable_width(byte_length, signed, endianness)?;
        Self::read(view, offset, width)
    }

    /// Write a field whose width is given at call time (1 to 6 bytes)
    pub fn write_variable(
        view: &View,
        value: &Value,
        offset: &Value,
        byte_length: &Value,
        signed: bool,
        endianness: Endianness,
    ) -> BufferResult<usize> {
        let width = variable_width(byte_length, signed, endianness)?;
        require_offset(offset)?;
        Self::write(view, value, offset, width)
    }
}

fn require_offset(offset: &Value) -> BufferResult<()> {
    if offset.is_undefined() {
        return Err(BufferError::invalid_arg_type(
            "offset",
            "of type number",
            offset,
        ));
    }
    Ok(())
}

fn check_width(width: NumericWidth) -> BufferResult<()> {
    if width.width_bytes() > MAX_INT_WIDTH {
        return Err(BufferError::out_of_range(
            "byteLength",
            ">= 1 and <= 6",
            &Value::from(width.width_bytes()),
        ));
    }
    Ok(())
}

fn variable_width(
    byte_length: &Value,
    signed: bool,
    endianness: Endianness,
) -> BufferResult<NumericWidth> {
    let bytes = validate_byte_length(byte_length)?;
    NumericWidth::new(bytes, signed, endianness)
        .filter(|width| width.width_bytes() <= MAX_INT_WIDTH)
        .ok_or_else(|| BufferError::out_of_range("byteLength", ">= 1 and <= 6", byte_length))
}

/// Truncate `number` and check it fits `width`
///
/// Returns the truncated value. `received` is what the caller passed and is
/// only used for the error message. Bounds of fields up to 48 bits are exact
/// in an f64.
fn check_int(number: f64, received: &Value, width: NumericWidth) -> BufferResult<i64> {
    let truncated = if number.is_nan() { 0.0 } else { number.trunc() };
    if truncated < width.min() as f64 || truncated > width.max() as f64 {
        let shown = match received {
            Value::Number(_) => received.clone(),
            _ => Value::Number(number),
        };
        return Err(BufferError::out_of_range(
            "value",
            &width.range_description(),
            &shown,
        ));
    }
    Ok(truncated as i64)
}
