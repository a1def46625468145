//! BigInt Codec Module
//!
//! 64-bit integer fields read as and written from [`BigNumber`]s. Writes
//! only accept BigInt values; a number is a TypeError even when it would
//! fit.

use crate::byte_order::{get_uint, put_uint};
use entities_data_handling::validation::check_bounds;
use entities_data_handling::{BufferError, BufferResult, Endianness, NumericWidth, Value, View};
use entities_utilities::BigNumber;

/// Codec for 64-bit BigInt fields
pub struct BigIntCodec;

impl BigIntCodec {
    /// Read a 64-bit field
    pub fn read(
        view: &View,
        offset: &Value,
        signed: bool,
        endianness: Endianness,
    ) -> BufferResult<BigNumber> {
        let start = check_bounds(offset, view.len(), 8)?;
        let raw = view.with_bytes(|bytes| get_uint(&bytes[start..start + 8], endianness));
        Ok(if signed {
            BigNumber::from_i64(raw as i64)
        } else {
            BigNumber::from_u64(raw)
        })
    }

    /// Write a 64-bit field, returning the offset just past it
    pub fn write(
        view: &View,
        value: &Value,
        offset: &Value,
        signed: bool,
        endianness: Endianness,
    ) -> BufferResult<usize> {
        let big = match value {
            Value::BigInt(big) => big,
            other => {
                return Err(BufferError::invalid_arg_type(
                    "value",
                    "of type bigint",
                    other,
                ))
            }
        };
        let raw = encode_two_complement(big, signed).ok_or_else(|| {
            let width = NumericWidth::int64(signed, endianness);
            BufferError::out_of_range("value", &width.bigint_range_description(), value)
        })?;
        let start = check_bounds(offset, view.len(), 8)?;
        view.with_bytes_mut(|bytes| put_uint(&mut bytes[start..start + 8], raw, endianness));
        Ok(start + 8)
    }
}

/// Two's complement bit pattern of `value`, if it fits 64 bits
fn encode_two_complement(value: &BigNumber, signed: bool) -> Option<u64> {
    if signed {
        value.to_i64().map(|v| v as u64)
    } else {
        value.to_u64()
    }
}
