//! Pooled Allocator
//!
//! Small allocations are packed into a shared slab instead of getting an
//! arena each. A request of `size` bytes with `0 < size < pool_size / 2` is
//! served from the current slab; when the slab has fewer than `size` bytes
//! left a fresh slab replaces it. A claim never spans two slabs, and the bump
//! pointer is realigned to 8 bytes after every claim. Larger requests are
//! allocated directly.
//!
//! Retired slabs live as long as any view carved from them.
//!
//! The slab state is the only contended resource of the engine and sits
//! behind a `Mutex`; claims are short and never call back into user code.

use crate::allocator::{AllocatorType, ArenaAllocator};
use crate::config::{ConfigError, PoolConfig};
use entities_data_handling::{Arena, BufferResult, View};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, trace};

struct Slab {
    arena: Arena,
    offset: usize,
}

impl Slab {
    fn remaining(&self) -> usize {
        self.arena.capacity() - self.offset
    }

    fn align(&mut self) {
        if self.offset & 0x7 != 0 {
            self.offset = (self.offset | 0x7) + 1;
        }
    }
}

/// Allocator context with a rotating slab
///
/// Pools are independent: each one owns its slab, so tests and subsystems
/// can use isolated pools.
pub struct BufferPool {
    config: PoolConfig,
    slab: Mutex<Option<Slab>>,
    slabs_created: AtomicUsize,
}

impl BufferPool {
    /// Create a pool with the given configuration
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            slab: Mutex::new(None),
            slabs_created: AtomicUsize::new(0),
        })
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Claim `size` bytes, returning the backing arena and the offset of the
    /// claimed region inside it
    ///
    /// Pooled claims share their arena with other claims from the same slab.
    /// A zero-sized request yields an empty arena.
    pub fn allocate_pooled(&self, size: usize) -> BufferResult<(Arena, usize)> {
        if size == 0 {
            return Ok((Arena::empty(), 0));
        }
        if size >= self.config.pooling_threshold() {
            debug!(size, "allocating unpooled arena");
            return Ok((Arena::allocate(size)?, 0));
        }

        let mut guard = self.slab.lock().unwrap_or_else(PoisonError::into_inner);
        let mut slab = match guard.take() {
            Some(slab) if size <= slab.remaining() => slab,
            _ => self.create_slab()?,
        };
        let offset = slab.offset;
        slab.offset += size;
        slab.align();
        trace!(size, offset, next = slab.offset, "claimed pooled region");
        let arena = slab.arena.clone();
        *guard = Some(slab);
        Ok((arena, offset))
    }

    fn create_slab(&self) -> BufferResult<Slab> {
        let arena = Arena::allocate(self.config.pool_size)?;
        let created = self.slabs_created.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(pool_size = self.config.pool_size, created, "created pool slab");
        Ok(Slab { arena, offset: 0 })
    }

    /// Number of slabs created so far
    pub fn slab_count(&self) -> usize {
        self.slabs_created.load(Ordering::Relaxed)
    }

    /// Current bump pointer inside the active slab
    pub fn pool_offset(&self) -> usize {
        self.slab
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, |slab| slab.offset)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self {
            config: PoolConfig::default(),
            slab: Mutex::new(None),
            slabs_created: AtomicUsize::new(0),
        }
    }
}

impl ArenaAllocator for BufferPool {
    fn allocate(&self, size: usize) -> BufferResult<View> {
        let (arena, offset) = self.allocate_pooled(size)?;
        View::new(arena, offset, size)
    }

    fn allocator_type(&self) -> AllocatorType {
        AllocatorType::Pooled
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("config", &self.config)
            .field("slabs_created", &self.slab_count())
            .field("pool_offset", &self.pool_offset())
            .finish()
    }
}
