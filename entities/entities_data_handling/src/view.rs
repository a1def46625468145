//! View Module
//!
//! A [`View`] is a window `{arena, offset, length}` onto an [`Arena`]. Views
//! are cheap to clone and never own their bytes: slicing a view yields
//! another window onto the same storage, so a write through one view is
//! visible through every view that overlaps it.
//!
//! Invariant: `offset + length <= arena.capacity()`.

use crate::arena::Arena;
use crate::error::{BufferError, BufferResult};
use std::fmt;

/// Offset and length window onto an arena
#[derive(Clone)]
pub struct View {
    arena: Arena,
    offset: usize,
    length: usize,
}

impl View {
    /// Create a view, checking it fits inside the arena
    ///
    /// # Errors
    /// `"offset" is outside of buffer bounds` when the offset is past the
    /// arena, `"length" is outside of buffer bounds` when the window would
    /// extend past it.
    pub fn new(arena: Arena, offset: usize, length: usize) -> BufferResult<Self> {
        let capacity = arena.capacity();
        if offset > capacity {
            return Err(BufferError::buffer_out_of_bounds(Some("offset")));
        }
        if length > capacity - offset {
            return Err(BufferError::buffer_out_of_bounds(Some("length")));
        }
        Ok(Self {
            arena,
            offset,
            length,
        })
    }

    /// A view over the whole arena
    pub fn whole(arena: Arena) -> Self {
        let length = arena.capacity();
        Self {
            arena,
            offset: 0,
            length,
        }
    }

    /// A view over freshly adopted bytes
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::whole(Arena::wrap(bytes))
    }

    /// A zero-length view over an empty arena
    pub fn empty() -> Self {
        Self::whole(Arena::empty())
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Position of the view inside its arena
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Read the byte at `index`
    pub fn byte_at(&self, index: usize) -> BufferResult<u8> {
        if index >= self.length {
            return Err(self.index_error(index));
        }
        self.arena.read_byte(self.offset + index)
    }

    /// Write the byte at `index`
    pub fn set_byte(&self, index: usize, value: u8) -> BufferResult<()> {
        if index >= self.length {
            return Err(self.index_error(index));
        }
        self.arena.write_byte(self.offset + index, value)
    }

    fn index_error(&self, index: usize) -> BufferError {
        if self.length == 0 {
            return BufferError::buffer_out_of_bounds(None);
        }
        BufferError::out_of_range_number(
            "index",
            &format!(">= 0 and <= {}", self.length - 1),
            index as f64,
        )
    }

    /// Derive an aliasing view over `[start, end)`
    ///
    /// Negative positions count back from the end, both positions clamp to
    /// `[0, len]`, and `start > end` produces an empty view. Never fails.
    ///
    /// ```rust
    /// use entities_data_handling::View;
    ///
    /// let view = View::from_vec(b"buffer".to_vec());
    /// assert_eq!(view.slice_alias(-3, 100).to_vec(), b"fer");
    /// assert!(view.slice_alias(4, 2).is_empty());
    /// ```
    pub fn slice_alias(&self, start: i64, end: i64) -> View {
        let start = clamp_index(start, self.length);
        let end = clamp_index(end, self.length).max(start);
        Self {
            arena: self.arena.clone(),
            offset: self.offset + start,
            length: end - start,
        }
    }

    /// Copy `self[src_start..src_end]` into `dst` at `dst_start`
    ///
    /// The range is clamped to both views, so the copy shrinks rather than
    /// failing. Overlapping ranges in one arena behave like `memmove`.
    /// Returns the number of bytes copied.
    pub fn copy_into(&self, dst: &View, dst_start: usize, src_start: usize, src_end: usize) -> usize {
        let src_end = src_end.min(self.length);
        if src_start >= src_end || dst_start >= dst.length {
            return 0;
        }
        let count = (src_end - src_start).min(dst.length - dst_start);
        let from = self.offset + src_start;
        let to = dst.offset + dst_start;
        if self.arena.ptr_eq(&dst.arena) {
            self.arena
                .with_bytes_mut(|bytes| bytes.copy_within(from..from + count, to));
        } else {
            let chunk = self.arena.with_bytes(|bytes| bytes[from..from + count].to_vec());
            dst.arena
                .with_bytes_mut(|bytes| bytes[to..to + count].copy_from_slice(&chunk));
        }
        count
    }

    /// Run `f` with the bytes of this view
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let (start, end) = (self.offset, self.offset + self.length);
        self.arena.with_bytes(|bytes| f(&bytes[start..end]))
    }

    /// Run `f` with mutable access to the bytes of this view
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let (start, end) = (self.offset, self.offset + self.length);
        self.arena.with_bytes_mut(|bytes| f(&mut bytes[start..end]))
    }

    /// Run `f` with the bytes of two views at once
    ///
    /// Only shared locks are taken, so views over the same arena work too.
    /// Two arenas are always locked in address order, whichever view the
    /// call starts from.
    pub fn with_pair<R>(&self, other: &View, f: impl FnOnce(&[u8], &[u8]) -> R) -> R {
        if self.arena.ptr_eq(&other.arena) {
            let (a, b) = (self.range(), other.range());
            return self.arena.with_bytes(|bytes| f(&bytes[a], &bytes[b]));
        }
        if self.arena.address() < other.arena.address() {
            self.with_bytes(|mine| other.with_bytes(|theirs| f(mine, theirs)))
        } else {
            other.with_bytes(|theirs| self.with_bytes(|mine| f(mine, theirs)))
        }
    }

    fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }

    /// Copy the bytes out
    pub fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(|bytes| bytes.to_vec())
    }

    /// True if both views are the same window onto the same arena
    pub fn same_view(&self, other: &View) -> bool {
        self.arena.ptr_eq(&other.arena)
            && self.offset == other.offset
            && self.length == other.length
    }

    /// True if both views are backed by the same arena
    pub fn shares_arena(&self, other: &View) -> bool {
        self.arena.ptr_eq(&other.arena)
    }
}

fn clamp_index(index: i64, length: usize) -> usize {
    let len = length as i64;
    if index < 0 {
        (len + index).max(0) as usize
    } else {
        index.min(len) as usize
    }
}

impl Default for View {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("capacity", &self.arena.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        let arena = Arena::wrap(vec![0; 8]);
        assert!(View::new(arena.clone(), 8, 0).is_ok());
        let err = View::new(arena.clone(), 9, 0).unwrap_err();
        assert_eq!(err.message(), "\"offset\" is outside of buffer bounds");
        let err = View::new(arena, 4, 5).unwrap_err();
        assert_eq!(err.message(), "\"length\" is outside of buffer bounds");
    }

    #[test]
    fn test_byte_access() {
        let view = View::new(Arena::wrap(vec![1, 2, 3, 4]), 1, 2).unwrap();
        assert_eq!(view.byte_at(0).unwrap(), 2);
        assert_eq!(view.byte_at(1).unwrap(), 3);
        let err = view.byte_at(2).unwrap_err();
        assert_eq!(
            err.message(),
            "The value of \"index\" is out of range. It must be >= 0 and <= 1. Received 2"
        );
        view.set_byte(1, 9).unwrap();
        assert_eq!(view.arena().read_byte(2).unwrap(), 9);
        assert!(view.set_byte(5, 0).is_err());
    }

    #[test]
    fn test_slice_alias_shares_storage() {
        let parent = View::from_vec(vec![0; 10]);
        let child = parent.slice_alias(2, 6);
        assert_eq!(child.len(), 4);
        child.set_byte(0, 0xEE).unwrap();
        assert_eq!(parent.byte_at(2).unwrap(), 0xEE);
        assert!(child.shares_arena(&parent));
        assert!(!child.same_view(&parent));
    }

    #[test]
    fn test_slice_alias_clamps() {
        let view = View::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(view.slice_alias(-2, 5).to_vec(), vec![4, 5]);
        assert_eq!(view.slice_alias(-100, 2).to_vec(), vec![1, 2]);
        assert_eq!(view.slice_alias(3, 1).len(), 0);
        assert_eq!(view.slice_alias(10, 20).len(), 0);
    }

    #[test]
    fn test_copy_into_clamps() {
        let src = View::from_vec(vec![1, 2, 3, 4]);
        let dst = View::from_vec(vec![0; 3]);
        assert_eq!(src.copy_into(&dst, 1, 0, 100), 2);
        assert_eq!(dst.to_vec(), vec![0, 1, 2]);
        assert_eq!(src.copy_into(&dst, 3, 0, 4), 0);
        assert_eq!(src.copy_into(&dst, 0, 3, 2), 0);
    }

    #[test]
    fn test_copy_into_overlapping_same_arena() {
        let view = View::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(view.copy_into(&view, 1, 0, 4), 4);
        assert_eq!(view.to_vec(), vec![1, 1, 2, 3, 4]);

        let view = View::from_vec(vec![1, 2, 3, 4, 5]);
        let tail = view.slice_alias(2, 5);
        assert_eq!(tail.copy_into(&view, 0, 0, 3), 3);
        assert_eq!(view.to_vec(), vec![3, 4, 5, 4, 5]);
    }

    #[test]
    fn test_with_pair_same_arena() {
        let view = View::from_vec(vec![1, 2, 3, 4]);
        let left = view.slice_alias(0, 2);
        let right = view.slice_alias(2, 4);
        let sum = left.with_pair(&right, |a, b| a.iter().chain(b).map(|&x| x as u32).sum::<u32>());
        assert_eq!(sum, 10);
    }

    #[test]
    fn test_with_pair_keeps_argument_order() {
        let a = View::from_vec(vec![1]);
        let b = View::from_vec(vec![2]);
        assert_eq!(a.with_pair(&b, |x, y| (x[0], y[0])), (1, 2));
        assert_eq!(b.with_pair(&a, |x, y| (x[0], y[0])), (2, 1));
    }
}
