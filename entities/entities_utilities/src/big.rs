//! Big Number Operations
//!
//! Provides the arbitrary precision integer used by the 64-bit BigInt codecs.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! Values are unbounded; the 64-bit codecs decide whether a value fits the
//! signed or unsigned two's complement range before writing it.

use malachite::Integer;
use std::cmp::Ordering;
use std::fmt;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a big number equal to `2^exponent`
    pub fn power_of_two(exponent: u64) -> Self {
        Self {
            value: Integer::from(1u32) << exponent,
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value does not fit the signed 64-bit range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or does not fit 64 bits
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Returns true when `|self| > 2^bits`
    pub fn magnitude_exceeds(&self, bits: u64) -> bool {
        let bound = Self::power_of_two(bits).value;
        self.value > bound || self.value < -bound
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigNumber {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u32> for BigNumber {
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_number_creation() {
        assert_eq!(BigNumber::from_i64(12345).to_u64(), Some(12345));
        assert_eq!(BigNumber::from_i64(-12345).to_u64(), None);
        assert_eq!(BigNumber::from(7u32), BigNumber::from_i64(7));
    }

    #[test]
    fn test_conversion_limits() {
        assert_eq!(BigNumber::from_i64(i64::MIN).to_i64(), Some(i64::MIN));
        assert_eq!(BigNumber::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigNumber::from_u64(u64::MAX).to_i64(), None);
        assert_eq!(BigNumber::from_i64(-1).to_u64(), None);
    }

    #[test]
    fn test_power_of_two() {
        assert_eq!(BigNumber::power_of_two(64).to_u64(), None);
        assert_eq!(BigNumber::power_of_two(63).to_u64(), Some(1 << 63));
        assert_eq!(BigNumber::power_of_two(63).to_i64(), None);
        assert_eq!(BigNumber::power_of_two(0), BigNumber::from_i64(1));
    }

    #[test]
    fn test_magnitude_exceeds() {
        assert!(!BigNumber::from_u64(1 << 32).magnitude_exceeds(32));
        assert!(BigNumber::from_u64((1 << 32) + 1).magnitude_exceeds(32));
        assert!(BigNumber::from_i64(-(1 << 32) - 1).magnitude_exceeds(32));
    }

    #[test]
    fn test_comparison() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(50);
        assert!(b < a);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert!(BigNumber::from_i64(-1) < BigNumber::from_u64(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(BigNumber::from_i64(-255).to_string(), "-255");
        assert_eq!(
            BigNumber::from_u64(u64::MAX).to_string(),
            "18446744073709551615"
        );
    }
}
