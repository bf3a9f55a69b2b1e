/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of Base32H.
 *
 * Base32H is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Base32H is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Base32H. If not, see <https://www.gnu.org/licenses/>.
 */

//! Base32H: a Base32 variant meant to be read, typed, and spoken by humans.
//!
//! Every digit has one canonical symbol, which is what the encoders emit,
//! and possibly several aliases, which the decoders accept: `O`/`o` read as
//! `0`, `I`/`i` as `1`, `S`/`s` as `5`, `U`/`u` as `V`, and lowercase letters
//! as their uppercase forms. Decoders of whole strings skip anything that
//! isn't a digit, so `"WELL-H0WD-YPAR-DNER"` decodes the same as
//! `"WELLH0WDYPARDNER"`.
//!
//! Numbers are written in plain positional base 32. Binary data is split into
//! 5-byte chunks, each of which becomes exactly 8 digits (32<sup>8</sup> =
//! 2<sup>40</sup>); input that isn't a multiple of 5 bytes is padded with
//! leading zero bytes.
//!
//! ```
//! assert_eq!(base32h::encode(1234), "16J");
//! assert_eq!(base32h::decode_as::<u32>("16j"), Some(1234));
//! assert_eq!(base32h::encode_bin(b"Hello"), "91JNQV3F");
//! assert_eq!(base32h::decode_bin("91jn-qv3f"), b"Hello");
//! ```
//!
//! The iterator-based functions ([`encode_to_chars`], [`encode_bin_to_chars`],
//! [`decode_bin_str`], etc.) don't allocate and are available without the
//! `alloc` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[macro_use]
mod digit;
pub mod decode;
pub mod encode;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub mod ext;
mod iter;
pub mod number;

#[cfg(feature = "alloc")]
extern crate alloc;

const BASE: u8 = 32;
const BYTES_PER_CHUNK: usize = 5;
const DIGITS_PER_CHUNK: usize = 8;

use digit::Digit;

pub use digit::{decode_digit, digits, encode_digit, DIGITS};
pub use number::{DecodableNumber, Number};

pub use decode::decode_as;
pub use decode::decode_bin_bytes;
pub use decode::decode_bin_chars;
pub use decode::decode_bin_str;
pub use decode::decode_chars_as;
#[cfg(feature = "alloc")]
pub use decode::{decode, decode_bin};

pub use encode::encode_bin_to_bytes;
pub use encode::encode_bin_to_chars;
pub use encode::encode_to_chars;
#[cfg(feature = "alloc")]
pub use encode::{encode, encode_bin};

#[cfg(feature = "alloc")]
pub use ext::ToBase32h;
