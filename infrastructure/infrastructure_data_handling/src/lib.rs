//! Infrastructure Layer: Data Handling
//!
//! Provides the text transcoder: conversion between strings and bytes in
//! every supported encoding.
//!
//! ## Overview
//!
//! The `infrastructure_data_handling` crate is part of the infrastructure
//! layer. Callers normally go through [`transcoder`], which dispatches on
//! `Encoding`; the per-encoding modules are public for direct use.
//!
//! ## Modules
//!
//! - **[`transcoder`](transcoder/index.html)**: `encode`, `decode`,
//!   `byte_length`, `write_into` and the `is_utf8` / `is_ascii` predicates
//! - **[`utf8`](utf8/index.html)**: Lossy decoding, boundary-aware truncation
//! - **[`utf16`](utf16/index.html)**: UTF-16 little endian
//! - **[`single_byte`](single_byte/index.html)**: latin1 and ascii
//! - **[`hex_codec`](hex_codec/index.html)**: Hex digits with prefix decoding
//! - **[`base64_codec`](base64_codec/index.html)**: base64, base64url, `atob`
//!   and `btoa`
//!
//! ## See Also
//!
//! - [`entities_data_handling`](../../entities/entities_data_handling/index.html): `Encoding` and error types

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

pub mod base64_codec;
pub mod hex_codec;
pub mod single_byte;
pub mod transcoder;
pub mod utf16;
pub mod utf8;

pub use base64_codec::{atob, btoa, Base64Variant};
pub use transcoder::{byte_length, decode, encode, is_ascii, is_utf8, write_into};
