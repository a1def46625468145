//! Swap Module
//!
//! In-place byte order reversal of every 2, 4 or 8 byte group of a view.

use entities_data_handling::{BufferError, BufferResult, View};

fn swap_groups(view: &View, group: usize, unit: &str) -> BufferResult<()> {
    if view.len() % group != 0 {
        return Err(BufferError::invalid_buffer_size(unit));
    }
    view.with_bytes_mut(|bytes| {
        for chunk in bytes.chunks_exact_mut(group) {
            chunk.reverse();
        }
    });
    Ok(())
}

/// Reverse every 2-byte group
///
/// ```rust
/// use entities_data_handling::View;
/// use usecases_byte_operations::swap::swap16;
///
/// let view = View::from_vec(vec![1, 2, 3, 4]);
/// swap16(&view).unwrap();
/// assert_eq!(view.to_vec(), vec![2, 1, 4, 3]);
/// ```
pub fn swap16(view: &View) -> BufferResult<()> {
    swap_groups(view, 2, "16-bits")
}

/// Reverse every 4-byte group
pub fn swap32(view: &View) -> BufferResult<()> {
    swap_groups(view, 4, "32-bits")
}

/// Reverse every 8-byte group
pub fn swap64(view: &View) -> BufferResult<()> {
    swap_groups(view, 8, "64-bits")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap32_and_64() {
        let view = View::from_vec((1..=8).collect());
        swap32(&view).unwrap();
        assert_eq!(view.to_vec(), vec![4, 3, 2, 1, 8, 7, 6, 5]);
        swap64(&view).unwrap();
        assert_eq!(view.to_vec(), vec![5, 6, 7, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn test_swap_rejects_ragged_length() {
        let view = View::from_vec(vec![1, 2, 3]);
        let err = swap16(&view).unwrap_err();
        assert!(err.is_range_error());
        assert_eq!(err.message(), "Buffer size must be a multiple of 16-bits");
        assert_eq!(view.to_vec(), vec![1, 2, 3]);
        assert!(swap64(&View::from_vec(vec![0; 4])).is_err());
    }

    #[test]
    fn test_swap_empty_and_slice() {
        swap16(&View::empty()).unwrap();
        let view = View::from_vec(vec![1, 2, 3, 4, 5]);
        let inner = view.slice_alias(1, 5);
        swap16(&inner).unwrap();
        assert_eq!(view.to_vec(), vec![1, 3, 2, 5, 4]);
    }
}
