//! Storage Arena Module
//!
//! An [`Arena`] owns a fixed-capacity block of bytes. Cloning an arena clones
//! the handle, not the bytes: every clone and every [`View`](crate::View)
//! derived from it observes the same storage, and the storage is released
//! when the last handle is dropped.
//!
//! Access goes through bounds-checked byte accessors or through closures that
//! receive the whole block. A closure never runs while another lock on the
//! same arena is held by this module.

use crate::constants::K_MAX_LENGTH;
use crate::error::{BufferError, BufferResult};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared, fixed-capacity byte storage
#[derive(Clone)]
pub struct Arena {
    bytes: Arc<RwLock<Box<[u8]>>>,
    capacity: usize,
}

impl Arena {
    /// Allocate `size` bytes, all 0
    ///
    /// Arenas behind `allocUnsafe` come from here as well, so their contents
    /// are zero too, though callers of those must not rely on it.
    ///
    /// # Errors
    /// RangeError when `size` exceeds [`K_MAX_LENGTH`].
    pub fn allocate(size: usize) -> BufferResult<Self> {
        if size > K_MAX_LENGTH {
            return Err(BufferError::out_of_range_number(
                "size",
                &format!(">= 0 && <= {}", K_MAX_LENGTH),
                size as f64,
            ));
        }
        Ok(Self::wrap(vec![0u8; size]))
    }

    /// Adopt existing bytes without copying
    pub fn wrap(bytes: Vec<u8>) -> Self {
        let capacity = bytes.len();
        Self {
            bytes: Arc::new(RwLock::new(bytes.into_boxed_slice())),
            capacity,
        }
    }

    /// A zero-capacity arena
    pub fn empty() -> Self {
        Self::wrap(Vec::new())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Address of the shared storage, used to order lock acquisition
    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.bytes) as *const () as usize
    }

    /// True if both handles refer to the same storage
    pub fn ptr_eq(&self, other: &Arena) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }

    /// Number of live handles to the storage
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.bytes)
    }

    /// Read the byte at `index`
    pub fn read_byte(&self, index: usize) -> BufferResult<u8> {
        self.with_bytes(|bytes| bytes.get(index).copied())
            .ok_or_else(|| self.index_error(index))
    }

    /// Write the byte at `index`
    pub fn write_byte(&self, index: usize, value: u8) -> BufferResult<()> {
        self.with_bytes_mut(|bytes| match bytes.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        })
        .then_some(())
        .ok_or_else(|| self.index_error(index))
    }

    /// Run `f` with shared access to the whole block
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let guard = self.bytes.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access to the whole block
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let mut guard = self.bytes.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn index_error(&self, index: usize) -> BufferError {
        if self.capacity == 0 {
            return BufferError::buffer_out_of_bounds(None);
        }
        BufferError::out_of_range_number(
            "index",
            &format!(">= 0 and <= {}", self.capacity - 1),
            index as f64,
        )
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("handles", &self.handle_count())
            .finish()
    }
}
