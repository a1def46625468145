//! Compare Module
//!
//! Lexicographic byte ordering between views. Results are always -1, 0 or 1.

use entities_data_handling::constants::K_MAX_LENGTH;
use entities_data_handling::validation::validate_offset_or;
use entities_data_handling::{BufferError, BufferResult, Value, View};
use std::cmp::Ordering;

fn sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Compare two whole views
///
/// ```rust
/// use entities_data_handling::View;
/// use usecases_byte_operations::compare::compare;
///
/// let a = View::from_vec(vec![1, 2]);
/// let b = View::from_vec(vec![1, 2, 0]);
/// assert_eq!(compare(&a, &b), -1);
/// assert_eq!(compare(&b, &a), 1);
/// assert_eq!(compare(&a, &a), 0);
/// ```
pub fn compare(a: &View, b: &View) -> i32 {
    if a.same_view(b) {
        return 0;
    }
    a.with_pair(b, |x, y| sign(x.cmp(y)))
}

/// True if both views hold the same bytes
pub fn equals(a: &View, b: &View) -> bool {
    if a.same_view(b) {
        return true;
    }
    a.len() == b.len() && compare(a, b) == 0
}

/// Compare `source[source_start..source_end]` with `target[target_start..target_end]`
///
/// Undefined bounds default to the whole of each view. Start positions may
/// not exceed `K_MAX_LENGTH` and end positions may not exceed their view's
/// length. An empty source range orders before any non-empty target range.
///
/// # Errors
/// RangeError for a bound outside its domain, or for a start beyond its
/// view when both ranges are non-empty.
pub fn compare_range(
    source: &View,
    target: &View,
    target_start: &Value,
    target_end: &Value,
    source_start: &Value,
    source_end: &Value,
) -> BufferResult<i32> {
    let target_start = validate_offset_or(target_start, "targetStart", K_MAX_LENGTH, 0)?;
    let target_end = validate_offset_or(target_end, "targetEnd", target.len(), target.len())?;
    let source_start = validate_offset_or(source_start, "sourceStart", K_MAX_LENGTH, 0)?;
    let source_end = validate_offset_or(source_end, "sourceEnd", source.len(), source.len())?;

    if source_start >= source_end {
        return Ok(if target_start >= target_end { 0 } else { -1 });
    }
    if target_start >= target_end {
        return Ok(1);
    }
    if source_start > source.len() {
        return Err(BufferError::out_of_range_bare("sourceStart"));
    }
    if target_start > target.len() {
        return Err(BufferError::out_of_range_bare("targetStart"));
    }

    let source_length = source_end - source_start;
    let target_length = target_end - target_start;
    let to_compare = source_length.min(target_length).min(source.len() - source_start);

    Ok(source.with_pair(target, |src, tgt| {
        let ordering = src[source_start..source_start + to_compare]
            .cmp(&tgt[target_start..target_start + to_compare])
            .then(source_length.cmp(&target_length));
        sign(ordering)
    }))
}
