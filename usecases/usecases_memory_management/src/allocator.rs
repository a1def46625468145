//! Allocator Trait and Types
//!
//! Defines the allocation interface of the buffer engine. Every buffer is a
//! view onto an arena; an allocator decides whether that arena is a fresh
//! block sized for the request or a region of a shared slab.
//!
//! ## Allocation Strategies
//!
//! - **Direct**: one arena per request, never shared
//! - **Pooled**: small requests are carved from a rotating slab, larger ones
//!   fall back to direct allocation
//!
//! ## Examples
//!
//! ```rust
//! use usecases_memory_management::{ArenaAllocator, DirectAllocator};
//!
//! let view = DirectAllocator.allocate(1024).unwrap();
//! assert_eq!(view.len(), 1024);
//! assert_eq!(view.offset(), 0);
//! ```
//!
//! ## See Also
//!
//! - [`pool`](super::pool/index.html): Pooled allocator implementation

use entities_data_handling::{Arena, BufferResult, View};

/// Allocation strategy types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocatorType {
    /// One arena per request
    Direct,
    /// Small requests share slabs
    Pooled,
}

/// Allocator trait for the allocation strategies
///
/// Implementations hand out views whose bytes are valid but not necessarily
/// cleared; callers that need zeroed memory fill it themselves.
pub trait ArenaAllocator: Send + Sync {
    /// Allocate a view of exactly `size` bytes
    ///
    /// # Errors
    /// RangeError when `size` exceeds the maximum buffer length.
    fn allocate(&self, size: usize) -> BufferResult<View>;

    /// Strategy implemented by this allocator
    fn allocator_type(&self) -> AllocatorType;
}

/// Allocator that never pools
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAllocator;

impl ArenaAllocator for DirectAllocator {
    fn allocate(&self, size: usize) -> BufferResult<View> {
        let arena = Arena::allocate(size)?;
        Ok(View::whole(arena))
    }

    fn allocator_type(&self) -> AllocatorType {
        AllocatorType::Direct
    }
}
