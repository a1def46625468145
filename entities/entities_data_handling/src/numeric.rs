//! Numeric Width Module
//!
//! Describes the fixed-width integer layouts the codec engine reads and
//! writes: a byte width between 1 and 8, signedness and byte order.

/// Byte order of a multi-byte field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

/// Layout of one integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericWidth {
    width_bytes: usize,
    signed: bool,
    endianness: Endianness,
}

impl NumericWidth {
    /// Create a width descriptor; `width_bytes` must be in `1..=8`
    pub fn new(width_bytes: usize, signed: bool, endianness: Endianness) -> Option<Self> {
        if !(1..=8).contains(&width_bytes) {
            return None;
        }
        Some(Self {
            width_bytes,
            signed,
            endianness,
        })
    }

    /// The 64-bit layout read and written through BigInts
    pub fn int64(signed: bool, endianness: Endianness) -> Self {
        Self {
            width_bytes: 8,
            signed,
            endianness,
        }
    }

    pub fn width_bytes(&self) -> usize {
        self.width_bytes
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn bits(&self) -> u32 {
        (self.width_bytes * 8) as u32
    }

    /// Smallest representable value
    pub fn min(&self) -> i128 {
        if self.signed {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    /// Largest representable value
    pub fn max(&self) -> i128 {
        if self.signed {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    /// Range text used in out-of-range messages for number values
    ///
    /// Up to 4 bytes the bounds are spelled out; wider fields use powers of
    /// two.
    ///
    /// ```rust
    /// use entities_data_handling::numeric::{Endianness, NumericWidth};
    ///
    /// let int8 = NumericWidth::new(1, true, Endianness::Big).unwrap();
    /// assert_eq!(int8.range_description(), ">= -128 and <= 127");
    /// let uint48 = NumericWidth::new(6, false, Endianness::Little).unwrap();
    /// assert_eq!(uint48.range_description(), ">= 0 and < 2 ** 48");
    /// ```
    pub fn range_description(&self) -> String {
        if self.width_bytes <= 4 {
            return format!(">= {} and <= {}", self.min(), self.max());
        }
        let bits = self.bits();
        if self.signed {
            format!(">= -(2 ** {}) and < 2 ** {}", bits - 1, bits - 1)
        } else {
            format!(">= 0 and < 2 ** {}", bits)
        }
    }

    /// Range text used in out-of-range messages for BigInt values
    pub fn bigint_range_description(&self) -> String {
        let bits = self.bits();
        if self.signed {
            format!(">= -(2n ** {}n) and < 2 ** {}n", bits - 1, bits - 1)
        } else {
            format!(">= 0n and < 2n ** {}n", bits)
        }
    }
}
