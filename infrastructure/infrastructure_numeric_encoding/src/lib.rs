//! Infrastructure Layer: Numeric Encoding
//!
//! Provides the codec engine: reading and writing numeric fields inside a
//! view at a byte offset.
//!
//! ## Overview
//!
//! The `infrastructure_numeric_encoding` crate is part of the infrastructure
//! layer. Every codec validates its offset (and, for writes, its value)
//! before touching the view, and every write returns the offset immediately
//! following the field so writes can be chained.
//!
//! ## Codecs
//!
//! - **[`int_codec`](int_codec/index.html)**: 8 to 48-bit signed and unsigned
//!   integers, fixed or call-time width, big or little endian.
//!
//! - **[`float_codec`](float_codec/index.html)**: IEEE-754 binary32 and
//!   binary64.
//!
//! - **[`bigint_codec`](bigint_codec/index.html)**: 64-bit signed and unsigned
//!   integers carried as `BigNumber`.
//!
//! ## Examples
//!
//! ```rust
//! use entities_data_handling::{Endianness, NumericWidth, Value, View};
//! use infrastructure_numeric_encoding::IntCodec;
//!
//! let view = View::from_vec(vec![0; 2]);
//! let be = NumericWidth::new(2, false, Endianness::Big).unwrap();
//! let le = NumericWidth::new(2, false, Endianness::Little).unwrap();
//! IntCodec::write(&view, &Value::from(0xABCD), &Value::from(0), be).unwrap();
//! assert_eq!(IntCodec::read(&view, &Value::from(0), le).unwrap(), 0xCDAB);
//! ```
//!
//! ## See Also
//!
//! - [`entities_utilities`](../../entities/entities_utilities/index.html): BigNumber type
//! - [`entities_data_handling`](../../entities/entities_data_handling/index.html): Views and validation

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

mod byte_order;

pub mod bigint_codec;
pub mod float_codec;
pub mod int_codec;

pub use bigint_codec::BigIntCodec;
pub use float_codec::FloatCodec;
pub use int_codec::{IntCodec, MAX_INT_WIDTH};
