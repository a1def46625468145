//! Integration tests for entities_utilities crate
//!
//! These tests verify the big number operations the 64-bit codecs rely on.

use entities_utilities::*;

#[test]
fn test_signed_64_bit_bounds() {
    assert_eq!(BigNumber::from_i64(i64::MIN).to_i64(), Some(i64::MIN));
    assert_eq!(BigNumber::from_i64(i64::MAX).to_i64(), Some(i64::MAX));
    assert_eq!(BigNumber::power_of_two(63).to_i64(), None);
    assert_eq!(BigNumber::from_u64(u64::MAX).to_i64(), None);
}

#[test]
fn test_unsigned_64_bit_bounds() {
    assert_eq!(BigNumber::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
    assert_eq!(BigNumber::power_of_two(64).to_u64(), None);
    assert_eq!(BigNumber::from_i64(0).to_u64(), Some(0));
    assert_eq!(BigNumber::from_i64(-1).to_u64(), None);
}

#[test]
fn test_magnitude_bound_is_inclusive() {
    assert!(!BigNumber::power_of_two(32).magnitude_exceeds(32));
    assert!(BigNumber::power_of_two(33).magnitude_exceeds(32));
    assert!(BigNumber::from_i64(-(1 << 40)).magnitude_exceeds(32));
}

#[test]
fn test_display_at_64_bit_boundaries() {
    assert_eq!(BigNumber::from_i64(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigNumber::power_of_two(64).to_string(), "18446744073709551616");
    assert_eq!(BigNumber::from_u64(1 << 32).to_string(), "4294967296");
}

#[test]
fn test_from_conversions() {
    assert_eq!(BigNumber::from(5i32), BigNumber::from_i64(5));
    assert_eq!(BigNumber::from(5u32), BigNumber::from_u64(5));
    assert_eq!(BigNumber::from(-5i64).to_i64(), Some(-5));
}
