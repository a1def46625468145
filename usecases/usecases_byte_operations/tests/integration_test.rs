//! Integration tests for usecases_byte_operations crate
//!
//! These tests check the laws between search, comparison, fill and swap on
//! arbitrary views, plus the concrete search scenario.

use entities_data_handling::{Value, View};
use proptest::prelude::*;
use usecases_byte_operations::*;

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..max)
}

proptest! {
    #[test]
    fn empty_needle_matches_at_clamped_offset(data in bytes(32), offset in -64i64..64) {
        let view = View::from_vec(data.clone());
        let len = data.len() as i64;
        let expected = if offset < 0 { (len + offset).max(0) } else { offset.min(len) };
        let found = index_of(&view, &Value::from(""), &Value::from(offset), &Value::Undefined, Direction::Forward).unwrap();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn found_needle_is_present(data in bytes(64), start in 0usize..64, width in 1usize..6) {
        prop_assume!(start + width <= data.len());
        let view = View::from_vec(data.clone());
        let needle = Value::Bytes(data[start..start + width].to_vec());
        let first = index_of(&view, &needle, &Value::Undefined, &Value::Undefined, Direction::Forward).unwrap();
        let last = index_of(&view, &needle, &Value::Undefined, &Value::Undefined, Direction::Backward).unwrap();
        prop_assert!(first >= 0 && first as usize <= start);
        prop_assert!(last as usize >= start);
        let (first, last) = (first as usize, last as usize);
        prop_assert_eq!(&data[first..first + width], &data[start..start + width]);
        prop_assert_eq!(&data[last..last + width], &data[start..start + width]);
    }

    #[test]
    fn equals_agrees_with_compare(a in bytes(8), b in bytes(8)) {
        let (x, y) = (View::from_vec(a.clone()), View::from_vec(b.clone()));
        prop_assert_eq!(equals(&x, &y), compare(&x, &y) == 0);
        prop_assert_eq!(compare(&x, &y), -compare(&y, &x));
        prop_assert_eq!(equals(&x, &y), a == b);
    }

    #[test]
    fn swap_twice_is_identity(data in bytes(64)) {
        let len = data.len() - data.len() % 8;
        let view = View::from_vec(data[..len].to_vec());
        swap16(&view).unwrap();
        swap16(&view).unwrap();
        swap32(&view).unwrap();
        swap32(&view).unwrap();
        swap64(&view).unwrap();
        swap64(&view).unwrap();
        prop_assert_eq!(view.to_vec(), data[..len].to_vec());
    }

    #[test]
    fn fill_touches_only_its_range(len in 0usize..32, start in 0usize..32, end in 0usize..32, byte in any::<u8>()) {
        prop_assume!(end <= len);
        let view = View::from_vec(vec![0; len]);
        fill(&view, &Value::from(byte), &Value::from(start), &Value::from(end), &Value::Undefined).unwrap();
        for (i, b) in view.to_vec().into_iter().enumerate() {
            let inside = i >= start && i < end;
            prop_assert_eq!(b, if inside { byte } else { 0 });
        }
    }
}

#[test]
fn test_index_of_negative_offset_scenario() {
    let view = View::from_vec(b"hello world".to_vec());
    let found = index_of(&view, &Value::from("world"), &Value::from(-5), &Value::Undefined, Direction::Forward).unwrap();
    assert_eq!(found, 6);
    assert!(includes(&view, &Value::from("hello"), &Value::Undefined, &Value::Undefined).unwrap());
}

#[test]
fn test_search_in_slice_is_relative() {
    let base = View::from_vec(b"xxabcabc".to_vec());
    let inner = base.slice_alias(2, 8);
    let needle = Value::from("abc");
    assert_eq!(index_of(&inner, &needle, &Value::Undefined, &Value::Undefined, Direction::Forward).unwrap(), 0);
    assert_eq!(index_of(&inner, &needle, &Value::Undefined, &Value::Undefined, Direction::Backward).unwrap(), 3);
}

#[test]
fn test_view_needle_over_same_arena() {
    let base = View::from_vec(b"abcabc".to_vec());
    let needle = Value::View(base.slice_alias(3, 5));
    let found = index_of(&base, &needle, &Value::from(1), &Value::Undefined, Direction::Forward).unwrap();
    assert_eq!(found, 3);
}

#[test]
fn test_fill_through_slice_is_visible_in_parent() {
    let base = View::from_vec(vec![0; 6]);
    let inner = base.slice_alias(2, 4);
    fill(&inner, &Value::from("z"), &Value::Undefined, &Value::Undefined, &Value::Undefined).unwrap();
    assert_eq!(base.to_vec(), b"\0\0zz\0\0");
}

#[test]
fn test_compare_range_on_shared_arena() {
    let base = View::from_vec(b"abab".to_vec());
    let left = base.slice_alias(0, 2);
    let right = base.slice_alias(2, 4);
    assert!(equals(&left, &right));
    let n = |v: usize| Value::from(v);
    assert_eq!(compare_range(&base, &base, &n(2), &n(4), &n(0), &n(2)).unwrap(), 0);
}
