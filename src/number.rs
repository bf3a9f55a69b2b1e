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

//! Integer types that can be encoded as, and decoded from, Base32H numbers.

use super::Digit;
use core::iter::FusedIterator;

#[cfg(feature = "alloc")]
use alloc::vec::{self, Vec};
#[cfg(feature = "alloc")]
use num_bigint::{BigInt, BigUint};

mod sealed {
    pub trait Sealed {}
}

use sealed::Sealed;

/// An integer type usable with the Base32H number functions.
///
/// Implemented for every primitive integer type, and, with the `alloc`
/// feature, for [`BigUint`] and [`BigInt`]. Signed values are encoded by
/// their magnitude, so `-1234` and `1234` have the same encoding.
///
/// References to [`BigUint`] and [`BigInt`] can be encoded too, but only
/// owned types implement [`DecodableNumber`].
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Number: Sized + Sealed {
    #[doc(hidden)]
    type Digits: Iterator<Item = Digit> + FusedIterator;

    /// Digits of the magnitude, most significant first. Zero is one digit.
    #[doc(hidden)]
    fn __into_digits(self) -> Self::Digits;
}

/// A [`Number`] that Base32H text can be decoded into.
///
/// Implemented for every primitive integer type, and, with the `alloc`
/// feature, for [`BigUint`] and [`BigInt`]. A reference has nothing to
/// point to after decoding, so this doesn't compile:
///
/// ```compile_fail
/// let n = base32h::decode_as::<&num_bigint::BigUint>("10");
/// ```
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait DecodableNumber: Number {
    #[doc(hidden)]
    fn __zero() -> Self;

    /// Computes `self * 32 + digit`, or [`None`] on overflow.
    #[doc(hidden)]
    fn __push_digit(self, digit: Digit) -> Option<Self>;
}

/// Digits of a primitive integer's magnitude.
#[derive(Clone, Debug)]
pub struct MagnitudeDigits {
    value: u128,
    len: u32,
}

impl MagnitudeDigits {
    fn new(value: u128) -> Self {
        let bits = u128::BITS - value.leading_zeros();
        Self {
            value,
            // Zero still needs one digit.
            len: ((bits + 4) / 5).max(1),
        }
    }
}

impl Iterator for MagnitudeDigits {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        self.len = self.len.checked_sub(1)?;
        let shifted = self.value >> (5 * self.len);
        Some(Digit::from_low_bits((shifted % 32) as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for MagnitudeDigits {}

impl FusedIterator for MagnitudeDigits {}

macro_rules! impl_number {
    ($($ty:ty),* => |$n:ident| $magnitude:expr) => {$(
        impl Sealed for $ty {}

        impl Number for $ty {
            type Digits = MagnitudeDigits;

            fn __into_digits(self) -> Self::Digits {
                let $n = self;
                MagnitudeDigits::new($magnitude as u128)
            }
        }

        impl DecodableNumber for $ty {
            fn __zero() -> Self {
                0
            }

            fn __push_digit(self, digit: Digit) -> Option<Self> {
                self.checked_mul(32)?.checked_add(u8::from(digit) as $ty)
            }
        }
    )*};
}

impl_number!(u8, u16, u32, u64, u128, usize => |n| n);
impl_number!(i8, i16, i32, i64, i128, isize => |n| n.unsigned_abs());

#[cfg(feature = "alloc")]
fn big_digits(n: &BigUint) -> BigDigits {
    // `to_radix_be` is base 32 here, so every value fits in a digit.
    let digits: Vec<Digit> = n
        .to_radix_be(32)
        .into_iter()
        .map(Digit::from_low_bits)
        .collect();
    if digits.is_empty() {
        BigDigits(alloc::vec![const_digit!(0)].into_iter())
    } else {
        BigDigits(digits.into_iter())
    }
}

/// Digits of a [`BigUint`] or [`BigInt`]'s magnitude.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[derive(Clone, Debug)]
pub struct BigDigits(vec::IntoIter<Digit>);

#[cfg(feature = "alloc")]
impl Iterator for BigDigits {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

#[cfg(feature = "alloc")]
impl ExactSizeIterator for BigDigits {}

#[cfg(feature = "alloc")]
impl FusedIterator for BigDigits {}

#[cfg(feature = "alloc")]
mod big {
    use super::{big_digits, BigDigits, BigInt, BigUint, Digit};
    use super::{DecodableNumber, Number, Sealed};

    impl Sealed for BigUint {}

    impl Number for BigUint {
        type Digits = BigDigits;

        fn __into_digits(self) -> Self::Digits {
            big_digits(&self)
        }
    }

    impl DecodableNumber for BigUint {
        fn __zero() -> Self {
            Self::default()
        }

        fn __push_digit(self, digit: Digit) -> Option<Self> {
            Some(self * 32_u32 + u32::from(u8::from(digit)))
        }
    }

    impl Sealed for BigInt {}

    impl Number for BigInt {
        type Digits = BigDigits;

        fn __into_digits(self) -> Self::Digits {
            big_digits(self.magnitude())
        }
    }

    impl DecodableNumber for BigInt {
        fn __zero() -> Self {
            Self::default()
        }

        fn __push_digit(self, digit: Digit) -> Option<Self> {
            Some(self * 32_u32 + u32::from(u8::from(digit)))
        }
    }

    impl Sealed for &BigUint {}

    impl Number for &BigUint {
        type Digits = BigDigits;

        fn __into_digits(self) -> Self::Digits {
            big_digits(self)
        }
    }

    impl Sealed for &BigInt {}

    impl Number for &BigInt {
        type Digits = BigDigits;

        fn __into_digits(self) -> Self::Digits {
            big_digits(self.magnitude())
        }
    }
}
