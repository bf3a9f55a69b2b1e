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

//! The [`ToBase32h`] extension trait.

use super::encode::{encode, encode_bin};

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::{BigInt, BigUint};

/// Adds a `to_base32h` method to numbers and binary data.
///
/// Integers are encoded as numbers (like [`encode`]); byte slices and
/// strings are encoded as binary data (like [`encode_bin`]).
///
/// ```
/// use base32h::ToBase32h;
///
/// assert_eq!(1234_u32.to_base32h(), "16J");
/// assert_eq!("Hello".to_base32h(), "91JNQV3F");
/// ```
pub trait ToBase32h {
    fn to_base32h(&self) -> String;
}

macro_rules! impl_for_numbers {
    ($($ty:ty),*) => {$(
        impl ToBase32h for $ty {
            fn to_base32h(&self) -> String {
                encode(*self)
            }
        }
    )*};
}

impl_for_numbers!(u8, u16, u32, u64, u128, usize);
impl_for_numbers!(i8, i16, i32, i64, i128, isize);

impl ToBase32h for BigUint {
    fn to_base32h(&self) -> String {
        encode(self)
    }
}

impl ToBase32h for BigInt {
    fn to_base32h(&self) -> String {
        encode(self)
    }
}

impl ToBase32h for [u8] {
    fn to_base32h(&self) -> String {
        encode_bin(self)
    }
}

impl<const N: usize> ToBase32h for [u8; N] {
    fn to_base32h(&self) -> String {
        encode_bin(self)
    }
}

impl ToBase32h for Vec<u8> {
    fn to_base32h(&self) -> String {
        encode_bin(self)
    }
}

impl ToBase32h for str {
    fn to_base32h(&self) -> String {
        encode_bin(self)
    }
}

impl ToBase32h for String {
    fn to_base32h(&self) -> String {
        encode_bin(self)
    }
}
