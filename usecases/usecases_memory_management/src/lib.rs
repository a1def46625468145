//! Use Cases Layer: Memory Management
//!
//! Provides the allocation strategies behind buffer construction. Every
//! buffer is a view onto an arena; this crate decides where that arena comes
//! from.
//!
//! ## Overview
//!
//! The `usecases_memory_management` crate is part of the use cases layer. It
//! turns allocation requests into views, either with a dedicated arena per
//! request or by packing small requests into shared slabs.
//!
//! ## Modules
//!
//! - **[`allocator`](allocator/index.html)**: The `ArenaAllocator` interface
//!   and the direct strategy
//!
//! - **[`pool`](pool/index.html)**: `BufferPool`, an explicit allocator context
//!   that sub-allocates small requests from a rotating slab
//!
//! - **[`config`](config/index.html)**: Pool settings, loadable from JSON and
//!   the environment
//!
//! ## Architecture
//!
//! There is no process-wide pool. Callers create a `BufferPool` and pass it
//! to the constructors that want pooled memory, so independent pools never
//! observe each other.
//!
//! ## See Also
//!
//! - [`entities_data_handling`](../../entities/entities_data_handling/index.html): Arenas and views

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod allocator;
pub mod config;
pub mod pool;

pub use allocator::{AllocatorType, ArenaAllocator, DirectAllocator};
pub use config::{ConfigError, PoolConfig};
pub use pool::BufferPool;
