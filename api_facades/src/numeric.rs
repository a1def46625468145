//! Numeric Accessors
//!
//! The `read*` / `write*` method family of [`Buffer`]. Fixed widths are
//! generated from one table; every writer returns the offset just past the
//! written field.

use crate::buffer::Buffer;
use entities_data_handling::Endianness::{self, Big, Little};
use entities_data_handling::{BufferError, BufferResult, NumericWidth, Value};
use entities_utilities::BigNumber;
use infrastructure_numeric_encoding::{BigIntCodec, FloatCodec, IntCodec};

macro_rules! int_accessors {
    ($($read:ident / $write:ident: $bytes:expr, $signed:expr, $endianness:expr;)*) => {
        impl Buffer {
            $(
                #[doc = concat!("`", stringify!($read), "(offset)`")]
                pub fn $read(&self, offset: impl Into<Value>) -> BufferResult<i64> {
                    IntCodec::read(self.view(), &offset.into(), width($bytes, $signed, $endianness)?)
                }

                #[doc = concat!("`", stringify!($write), "(value, offset)`")]
                pub fn $write(
                    &self,
                    value: impl Into<Value>,
                    offset: impl Into<Value>,
                ) -> BufferResult<usize> {
                    IntCodec::write(
                        self.view(),
                        &value.into(),
                        &offset.into(),
                        width($bytes, $signed, $endianness)?,
                    )
                }
            )*
        }
    };
}

fn width(width_bytes: usize, signed: bool, endianness: Endianness) -> BufferResult<NumericWidth> {
    NumericWidth::new(width_bytes, signed, endianness).ok_or_else(|| {
        BufferError::out_of_range("byteLength", ">= 1 and <= 6", &Value::from(width_bytes))
    })
}

int_accessors! {
    read_uint8 / write_uint8: 1, false, Big;
    read_int8 / write_int8: 1, true, Big;
    read_uint16_be / write_uint16_be: 2, false, Big;
    read_uint16_le / write_uint16_le: 2, false, Little;
    read_int16_be / write_int16_be: 2, true, Big;
    read_int16_le / write_int16_le: 2, true, Little;
    read_uint24_be / write_uint24_be: 3, false, Big;
    read_uint24_le / write_uint24_le: 3, false, Little;
    read_int24_be / write_int24_be: 3, true, Big;
    read_int24_le / write_int24_le: 3, true, Little;
    read_uint32_be / write_uint32_be: 4, false, Big;
    read_uint32_le / write_uint32_le: 4, false, Little;
    read_int32_be / write_int32_be: 4, true, Big;
    read_int32_le / write_int32_le: 4, true, Little;
    read_uint40_be / write_uint40_be: 5, false, Big;
    read_uint40_le / write_uint40_le: 5, false, Little;
    read_int40_be / write_int40_be: 5, true, Big;
    read_int40_le / write_int40_le: 5, true, Little;
    read_uint48_be / write_uint48_be: 6, false, Big;
    read_uint48_le / write_uint48_le: 6, false, Little;
    read_int48_be / write_int48_be: 6, true, Big;
    read_int48_le / write_int48_le: 6, true, Little;
}

impl Buffer {
    /// Read an unsigned big-endian field of `byte_length` (1 to 6) bytes
    pub fn read_uint_be(&self, offset: impl Into<Value>, byte_length: impl Into<Value>) -> BufferResult<i64> {
        IntCodec::read_variable(self.view(), &offset.into(), &byte_length.into(), false, Big)
    }

    pub fn read_uint_le(&self, offset: impl Into<Value>, byte_length: impl Into<Value>) -> BufferResult<i64> {
        IntCodec::read_variable(self.view(), &offset.into(), &byte_length.into(), false, Little)
    }

    pub fn read_int_be(&self, offset: impl Into<Value>, byte_length: impl Into<Value>) -> BufferResult<i64> {
        IntCodec::read_variable(self.view(), &offset.into(), &byte_length.into(), true, Big)
    }

    pub fn read_int_le(&self, offset: impl Into<Value>, byte_length: impl Into<Value>) -> BufferResult<i64> {
        IntCodec::read_variable(self.view(), &offset.into(), &byte_length.into(), true, Little)
    }

    /// Write an unsigned big-endian field of `byte_length` (1 to 6) bytes
    pub fn write_uint_be(
        &self,
        value: impl Into<Value>,
        offset: impl Into<Value>,
        byte_length: impl Into<Value>,
    ) -> BufferResult<usize> {
        IntCodec::write_variable(self.view(), &value.into(), &offset.into(), &byte_length.into(), false, Big)
    }

    pub fn write_uint_le(
        &self,
        value: impl Into<Value>,
        offset: impl Into<Value>,
        byte_length: impl Into<Value>,
    ) -> BufferResult<usize> {
        IntCodec::write_variable(self.view(), &value.into(), &offset.into(), &byte_length.into(), false, Little)
    }

    pub fn write_int_be(
        &self,
        value: impl Into<Value>,
        offset: impl Into<Value>,
        byte_length: impl Into<Value>,
    ) -> BufferResult<usize> {
        IntCodec::write_variable(self.view(), &value.into(), &offset.into(), &byte_length.into(), true, Big)
    }

    pub fn write_int_le(
        &self,
        value: impl Into<Value>,
        offset: impl Into<Value>,
        byte_length: impl Into<Value>,
    ) -> BufferResult<usize> {
        IntCodec::write_variable(self.view(), &value.into(), &offset.into(), &byte_length.into(), true, Little)
    }

    pub fn read_big_uint64_be(&self, offset: impl Into<Value>) -> BufferResult<BigNumber> {
        BigIntCodec::read(self.view(), &offset.into(), false, Big)
    }

    pub fn read_big_uint64_le(&self, offset: impl Into<Value>) -> BufferResult<BigNumber> {
        BigIntCodec::read(self.view(), &offset.into(), false, Little)
    }

    pub fn read_big_int64_be(&self, offset: impl Into<Value>) -> BufferResult<BigNumber> {
        BigIntCodec::read(self.view(), &offset.into(), true, Big)
    }

    pub fn read_big_int64_le(&self, offset: impl Into<Value>) -> BufferResult<BigNumber> {
        BigIntCodec::read(self.view(), &offset.into(), true, Little)
    }

    /// Write a 64-bit unsigned BigInt; a number value is a TypeError
    pub fn write_big_uint64_be(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        BigIntCodec::write(self.view(), &value.into(), &offset.into(), false, Big)
    }

    pub fn write_big_uint64_le(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        BigIntCodec::write(self.view(), &value.into(), &offset.into(), false, Little)
    }

    pub fn write_big_int64_be(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        BigIntCodec::write(self.view(), &value.into(), &offset.into(), true, Big)
    }

    pub fn write_big_int64_le(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        BigIntCodec::write(self.view(), &value.into(), &offset.into(), true, Little)
    }

    pub fn read_float_be(&self, offset: impl Into<Value>) -> BufferResult<f64> {
        FloatCodec::read_f32(self.view(), &offset.into(), Big)
    }

    pub fn read_float_le(&self, offset: impl Into<Value>) -> BufferResult<f64> {
        FloatCodec::read_f32(self.view(), &offset.into(), Little)
    }

    pub fn read_double_be(&self, offset: impl Into<Value>) -> BufferResult<f64> {
        FloatCodec::read_f64(self.view(), &offset.into(), Big)
    }

    pub fn read_double_le(&self, offset: impl Into<Value>) -> BufferResult<f64> {
        FloatCodec::read_f64(self.view(), &offset.into(), Little)
    }

    /// Write `value` rounded to binary32
    pub fn write_float_be(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        FloatCodec::write_f32(self.view(), &value.into(), &offset.into(), Big)
    }

    pub fn write_float_le(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        FloatCodec::write_f32(self.view(), &value.into(), &offset.into(), Little)
    }

    pub fn write_double_be(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        FloatCodec::write_f64(self.view(), &value.into(), &offset.into(), Big)
    }

    pub fn write_double_le(&self, value: impl Into<Value>, offset: impl Into<Value>) -> BufferResult<usize> {
        FloatCodec::write_f64(self.view(), &value.into(), &offset.into(), Little)
    }
}
