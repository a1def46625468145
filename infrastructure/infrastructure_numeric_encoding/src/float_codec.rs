//! Float Codec Module
//!
//! IEEE-754 binary32 and binary64 fields in either byte order. Writes are
//! not range checked: a double written as binary32 is rounded to the nearest
//! single, overflowing to an infinity.
//!
//! Reads return every NaN as the canonical quiet NaN; other bit patterns,
//! infinities and -0 round-trip exactly.

use entities_data_handling::validation::check_bounds;
use entities_data_handling::{BufferResult, Endianness, Value, View};

/// Codec for binary32 and binary64 fields
pub struct FloatCodec;

impl FloatCodec {
    pub fn read_f32(view: &View, offset: &Value, endianness: Endianness) -> BufferResult<f64> {
        let start = check_bounds(offset, view.len(), 4)?;
        let raw: [u8; 4] = view.with_bytes(|bytes| {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(&bytes[start..start + 4]);
            raw
        });
        let value = match endianness {
            Endianness::Big => f32::from_be_bytes(raw),
            Endianness::Little => f32::from_le_bytes(raw),
        };
        Ok(canonicalize(value as f64))
    }

    pub fn read_f64(view: &View, offset: &Value, endianness: Endianness) -> BufferResult<f64> {
        let start = check_bounds(offset, view.len(), 8)?;
        let raw: [u8; 8] = view.with_bytes(|bytes| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(&bytes[start..start + 8]);
            raw
        });
        let value = match endianness {
            Endianness::Big => f64::from_be_bytes(raw),
            Endianness::Little => f64::from_le_bytes(raw),
        };
        Ok(canonicalize(value))
    }

    /// Write a binary32 field, returning the offset just past it
    pub fn write_f32(
        view: &View,
        value: &Value,
        offset: &Value,
        endianness: Endianness,
    ) -> BufferResult<usize> {
        let number = value.to_number()? as f32;
        let start = check_bounds(offset, view.len(), 4)?;
        let raw = match endianness {
            Endianness::Big => number.to_be_bytes(),
            Endianness::Little => number.to_le_bytes(),
        };
        view.with_bytes_mut(|bytes| bytes[start..start + 4].copy_from_slice(&raw));
        Ok(start + 4)
    }

    /// Write a binary64 field, returning the offset just past it
    pub fn write_f64(
        view: &View,
        value: &Value,
        offset: &Value,
        endianness: Endianness,
    ) -> BufferResult<usize> {
        let number = value.to_number()?;
        let start = check_bounds(offset, view.len(), 8)?;
        let raw = match endianness {
            Endianness::Big => number.to_be_bytes(),
            Endianness::Little => number.to_le_bytes(),
        };
        view.with_bytes_mut(|bytes| bytes[start..start + 8].copy_from_slice(&raw));
        Ok(start + 8)
    }
}

fn canonicalize(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        value
    }
}
