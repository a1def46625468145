//! Use Cases Layer: Byte Operations
//!
//! Whole-view operations that read or rewrite the bytes of a view without
//! changing its extent.
//!
//! ## Overview
//!
//! The `usecases_byte_operations` crate is part of the use cases layer. It
//! holds the loosely-typed argument handling of searching, ordering, filling
//! and byte swapping, on top of the views and text transcoding of the lower
//! layers.
//!
//! ## Modules
//!
//! - **[`search`](search/index.html)**: `indexOf`, `lastIndexOf` and `includes`
//!   with offset normalisation and utf16le alignment
//!
//! - **[`compare`](compare/index.html)**: Lexicographic ordering, equality and
//!   ranged comparison
//!
//! - **[`fill`](fill/index.html)**: Pattern fill with argument shifting for
//!   string values
//!
//! - **[`swap`](swap/index.html)**: 16, 32 and 64-bit byte order reversal
//!
//! ## See Also
//!
//! - [`infrastructure_data_handling`](../../infrastructure/infrastructure_data_handling/index.html): Text transcoding used for string needles and patterns

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

pub mod compare;
pub mod fill;
pub mod search;
pub mod swap;

pub use compare::{compare, compare_range, equals};
pub use fill::fill;
pub use search::{includes, index_of, Direction};
pub use swap::{swap16, swap32, swap64};
