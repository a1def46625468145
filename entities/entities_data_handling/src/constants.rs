//! Buffer Constants
//!
//! Limits shared by every layer of the buffer engine.

/// Largest byte length any arena or view may have (2^31 - 1)
pub const K_MAX_LENGTH: usize = 2_147_483_647;

/// Default size of one pooled allocation slab
pub const DEFAULT_POOL_SIZE: usize = 8192;

/// Number of bytes rendered by `inspect` before the remainder is summarised
pub const INSPECT_MAX_BYTES: usize = 50;

/// Largest and smallest offsets accepted by the search entry points
pub const SEARCH_OFFSET_MAX: f64 = 2_147_483_647.0;
pub const SEARCH_OFFSET_MIN: f64 = -2_147_483_648.0;

/// Range used when reporting oversized integer arguments with digit separators
pub const SEPARATOR_THRESHOLD: f64 = 4_294_967_296.0;

/// Largest integer a double represents exactly (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
