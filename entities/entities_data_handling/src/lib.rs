//! Entities Layer: Data Handling
//!
//! This crate provides the core data model of the buffer engine: the shared
//! byte storage, the windows applications manipulate, and the error policy
//! every other layer reports through.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is part of the entities layer of the
//! workspace. As an innermost layer it depends only on `entities_utilities`,
//! making it the foundation for the codec, transcoder, byte-operation and
//! facade crates.
//!
//! ## Modules
//!
//! - **[`arena`](arena/index.html)**: Reference-counted, fixed-capacity byte
//!   storage with bounds-checked accessors.
//!
//! - **[`view`](view/index.html)**: `{arena, offset, length}` windows. Slicing
//!   aliases the arena; `copy_into` is the explicit copy with `memmove`
//!   semantics.
//!
//! - **[`value`](value/index.html)**: The loosely-typed argument
//!   representation and its coercions (to number, to byte) plus the rendering
//!   of values inside error messages.
//!
//! - **[`error`](error/index.html)**: `BufferError` with its two kinds
//!   (RangeError and TypeError), error codes and message templates.
//!
//! - **[`validation`](validation/index.html)**: Offset, size and integer
//!   validators shared by all entry points.
//!
//! - **[`encoding`](encoding/index.html)**: The closed set of text encodings
//!   and their name normalisation.
//!
//! - **[`numeric`](numeric/index.html)**: Integer field layouts (width,
//!   signedness, endianness) and their value ranges.
//!
//! - **[`constants`](constants/index.html)**: Engine-wide limits.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{Arena, View};
//!
//! let arena = Arena::allocate(8).unwrap();
//! let view = View::whole(arena);
//! let tail = view.slice_alias(4, 8);
//! tail.set_byte(0, 0x7f).unwrap();
//! assert_eq!(view.byte_at(4).unwrap(), 0x7f);
//! ```
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): Arbitrary
//!   precision integers used by the 64-bit codecs

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

pub mod arena;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod numeric;
pub mod validation;
pub mod value;
pub mod view;

// Re-export main types for convenience
pub use arena::Arena;
pub use encoding::Encoding;
pub use error::{BufferError, BufferResult, ErrorCode, ErrorKind};
pub use numeric::{Endianness, NumericWidth};
pub use value::Value;
pub use view::View;
