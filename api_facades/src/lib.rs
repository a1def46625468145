//! API Facades Layer
//!
//! Provides the public [`Buffer`] type, a Node.js-compatible byte buffer
//! assembled from the inner layers.
//!
//! ## Overview
//!
//! A `Buffer` is a view onto a shared arena. Construction either allocates
//! (directly or from an explicit [`BufferPool`]) or wraps existing memory;
//! every other method delegates to the inner layers:
//!
//! - numeric fields go to `infrastructure_numeric_encoding`
//! - text conversion goes to `infrastructure_data_handling`
//! - search, comparison, fill and byte swapping go to
//!   `usecases_byte_operations`
//!
//! ## Modules
//!
//! - **[`buffer`](buffer/index.html)**: Construction, statics, text, search,
//!   copy and slicing
//!
//! - **[`numeric`](numeric/index.html)**: The `read*` / `write*` family
//!
//! - **[`json`](json/index.html)**: The `{"type":"Buffer","data":[...]}`
//!   projection
//!
//! ## Example
//!
//! ```rust
//! use api_facades::Buffer;
//!
//! let a = Buffer::alloc(5, (), ()).unwrap();
//! a.fill(0xAA, (), (), ()).unwrap();
//! assert!(a.equals(&Buffer::alloc(5, 0xAA, ()).unwrap()));
//! ```

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

pub mod buffer;
pub mod json;
pub mod numeric;

pub use buffer::Buffer;
pub use json::JsonError;

// Re-export the argument and error types callers need
pub use entities_data_handling::{Arena, BufferError, BufferResult, Encoding, ErrorCode, ErrorKind, Value, View};
pub use entities_utilities::BigNumber;
pub use usecases_memory_management::{BufferPool, PoolConfig};
