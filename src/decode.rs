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

//! Functions and types for decoding Base32H numbers and binary data.
//!
//! Decoding never fails on bad input. Characters that aren't Base32H digits
//! (including aliases) are skipped, so separators like `-` or spaces can be
//! used freely, at the cost of silently accepting garbled input.

use super::iter::{chunk_count, Flatten};
use super::number::DecodableNumber;
use super::Digit;
use super::{BYTES_PER_CHUNK, DIGITS_PER_CHUNK};

use core::array;
use core::iter::{Fuse, FusedIterator};
use core::str::Chars;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use num_bigint::BigUint;

/// Decodes a sequence of Base32H chars as a number of type `N`.
///
/// Chars that aren't digits are skipped and don't count as digit positions.
/// Input with no digits at all decodes to zero. Returns [`None`] only if the
/// value doesn't fit in `N`.
pub fn decode_chars_as<N, I>(chars: I) -> Option<N>
where
    N: DecodableNumber,
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .filter_map(Digit::from_char)
        .try_fold(N::__zero(), N::__push_digit)
}

/// Decodes a Base32H `str` as a number of type `N`.
///
/// This function is like [`decode_chars_as`], but takes a `str`.
///
/// ```
/// assert_eq!(base32h::decode_as::<u8>("7z"), Some(255));
/// assert_eq!(base32h::decode_as::<u8>("80"), None);
/// assert_eq!(base32h::decode_as::<u32>("1-2-3"), Some(1091));
/// ```
pub fn decode_as<N: DecodableNumber>(text: &str) -> Option<N> {
    decode_chars_as(text.chars())
}

/// Decodes a Base32H `str` as an arbitrarily large number.
///
/// ```
/// use num_bigint::BigUint;
///
/// assert_eq!(base32h::decode("10"), BigUint::from(32_u8));
/// assert_eq!(base32h::decode(""), BigUint::from(0_u8));
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode(text: &str) -> BigUint {
    let digits: Vec<u8> = text
        .chars()
        .filter_map(Digit::from_char)
        .map(u8::from)
        .collect();
    // Never `None`: every digit is below 32.
    BigUint::from_radix_be(&digits, 32).unwrap_or_default()
}

/// Yields only the chars that are digits.
#[derive(Clone)]
struct CharsToDigits<I>(I);

impl<I> Iterator for CharsToDigits<I>
where
    I: Iterator<Item = char>,
{
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.by_ref().find_map(Digit::from_char)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.0.size_hint().1)
    }
}

impl<I: FusedIterator<Item = char>> FusedIterator for CharsToDigits<I> {}

type ChunkBytes = array::IntoIter<u8, BYTES_PER_CHUNK>;

/// Reads each group of 8 digits as a 40-bit number and splits it into 5
/// big-endian bytes. The first group is preceded by `pad` zero digits.
struct DigitsToUnflatBytes<I> {
    iter: I,
    pad: usize,
}

impl<I> DigitsToUnflatBytes<I> {
    pub fn new(iter: I, pad: usize) -> Self {
        debug_assert!(pad < DIGITS_PER_CHUNK);
        Self {
            iter,
            pad,
        }
    }
}

impl<I> Iterator for DigitsToUnflatBytes<I>
where
    I: FusedIterator<Item = Digit>,
{
    type Item = ChunkBytes;

    fn next(&mut self) -> Option<Self::Item> {
        let mut num_digits = 0;
        let mut sum = 0_u64;
        self.iter.by_ref().take(DIGITS_PER_CHUNK - self.pad).for_each(|d| {
            num_digits += 1;
            sum = sum * 32 + u64::from(u8::from(d));
        });

        if num_digits == 0 {
            return None;
        }
        self.pad = 0;

        let [_, _, _, a, b, c, d, e] = sum.to_be_bytes();
        Some([a, b, c, d, e].into_iter())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.iter.size_hint().1;
        (0, upper.and_then(|n| chunk_count(n, self.pad, DIGITS_PER_CHUNK)))
    }
}

impl<I: FusedIterator<Item = Digit>> FusedIterator for DigitsToUnflatBytes<I> {}

/// Iterator returned by [`decode_bin_chars`].
pub struct BinCharDecoder<I>(
    Flatten<DigitsToUnflatBytes<CharsToDigits<Fuse<I>>>, ChunkBytes>,
);

impl<I> BinCharDecoder<I>
where
    I: Iterator<Item = char> + Clone,
{
    pub(crate) fn new(iter: I) -> Self {
        let count = CharsToDigits(iter.clone()).count();
        let pad = (DIGITS_PER_CHUNK - count % DIGITS_PER_CHUNK)
            % DIGITS_PER_CHUNK;
        Self(Flatten::new(DigitsToUnflatBytes::new(
            CharsToDigits(iter.fuse()),
            pad,
        )))
    }
}

impl<I> Iterator for BinCharDecoder<I>
where
    I: Iterator<Item = char>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.uniform_size_hint(BYTES_PER_CHUNK)
    }
}

impl<I: Iterator<Item = char>> FusedIterator for BinCharDecoder<I> {}

/// Iterator returned by [`decode_bin_str`].
pub struct BinStrDecoder<'a>(BinCharDecoder<Chars<'a>>);

impl<'a> Iterator for BinStrDecoder<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> FusedIterator for BinStrDecoder<'a> {}

/// Treats each byte as the char with the same code point. Non-ASCII bytes
/// become chars that are never digits, which is also true of every char
/// that needs more than one byte in UTF-8.
#[derive(Clone)]
struct BytesAsChars<I>(I);

impl<I: Iterator<Item = u8>> Iterator for BytesAsChars<I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(char::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Iterator returned by [`decode_bin_bytes`].
pub struct BinBytesDecoder<I>(BinCharDecoder<BytesAsChars<I>>);

impl<I> Iterator for BinBytesDecoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for BinBytesDecoder<I> {}

/// Decodes a sequence of Base32H chars as binary data.
///
/// Chars that aren't digits are removed first. If the number of remaining
/// digits isn't a multiple of 8, zero digits are added to the start to make
/// it one. Each group of 8 digits then becomes 5 bytes.
///
/// The iterator is cloned once to count the digits up front.
pub fn decode_bin_chars<I>(chars: I) -> BinCharDecoder<I::IntoIter>
where
    I: IntoIterator<Item = char>,
    I::IntoIter: Clone,
{
    BinCharDecoder::new(chars.into_iter())
}

/// Decodes ASCII or UTF-8 Base32H data as binary data.
///
/// This function is like [`decode_bin_chars`], but takes bytes. Invalid
/// UTF-8 isn't an error; like any other non-digit, it's skipped.
pub fn decode_bin_bytes<I>(bytes: I) -> BinBytesDecoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
    I::IntoIter: Clone,
{
    BinBytesDecoder(BinCharDecoder::new(BytesAsChars(bytes.into_iter())))
}

/// Decodes a Base32H `str` as binary data.
///
/// This function is like [`decode_bin_chars`], but takes a `str`.
pub fn decode_bin_str(text: &str) -> BinStrDecoder<'_> {
    BinStrDecoder(BinCharDecoder::new(text.chars()))
}

/// Decodes a Base32H `str` as binary data, stored in a [`Vec`].
///
/// The output is always a multiple of 5 bytes long.
///
/// ```
/// assert_eq!(base32h::decode_bin("91JNQV3F"), b"Hello");
/// assert_eq!(base32h::decode_bin("7z"), [0_u8, 0, 0, 0, 255]);
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_bin(text: &str) -> Vec<u8> {
    decode_bin_str(text).collect()
}
