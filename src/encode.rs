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

//! Functions and types for encoding numbers and binary data as Base32H.

use super::iter::{chunk_count, Flatten};
use super::number::Number;
use super::Digit;
use super::{BYTES_PER_CHUNK, DIGITS_PER_CHUNK};

use core::array;
use core::iter::{Fuse, FusedIterator};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Iterator returned by [`encode_to_chars`].
#[derive(Clone, Debug)]
pub struct NumberEncoder<D>(D);

impl<D> Iterator for NumberEncoder<D>
where
    D: Iterator<Item = Digit>,
{
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Digit::to_char)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<D: ExactSizeIterator<Item = Digit>> ExactSizeIterator
    for NumberEncoder<D>
{
}

impl<D: FusedIterator<Item = Digit>> FusedIterator for NumberEncoder<D> {}

/// Encodes a number as a sequence of canonical Base32H chars, most
/// significant digit first.
///
/// Negative numbers are encoded by their magnitude. Zero is `"0"`; any other
/// value has no leading zeros.
pub fn encode_to_chars<N: Number>(n: N) -> NumberEncoder<N::Digits> {
    NumberEncoder(n.__into_digits())
}

/// Encodes a number as a Base32H [`String`].
///
/// ```
/// assert_eq!(base32h::encode(31), "Z");
/// assert_eq!(base32h::encode(32), "10");
/// assert_eq!(base32h::encode(-1234), base32h::encode(1234));
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode<N: Number>(n: N) -> String {
    encode_to_chars(n).collect()
}

type ChunkDigits = array::IntoIter<Digit, DIGITS_PER_CHUNK>;

/// Packs each group of 5 bytes into a 40-bit big-endian number and splits
/// it into 8 digits. The first group is preceded by `pad` zero bytes.
struct BytesToUnflatDigits<I> {
    iter: I,
    pad: usize,
}

impl<I> BytesToUnflatDigits<I> {
    pub fn new(iter: I, pad: usize) -> Self {
        debug_assert!(pad < BYTES_PER_CHUNK);
        Self {
            iter,
            pad,
        }
    }
}

impl<I> Iterator for BytesToUnflatDigits<I>
where
    I: FusedIterator<Item = u8>,
{
    type Item = ChunkDigits;

    fn next(&mut self) -> Option<Self::Item> {
        let mut num_bytes = 0;
        let mut sum = 0_u64;
        self.iter.by_ref().take(BYTES_PER_CHUNK - self.pad).for_each(|b| {
            num_bytes += 1;
            sum = (sum << 8) | u64::from(b);
        });

        if num_bytes == 0 {
            return None;
        }
        self.pad = 0;

        let mut digits = [const_digit!(0); DIGITS_PER_CHUNK];
        digits.iter_mut().rev().for_each(|d| {
            *d = Digit::from_low_bits((sum % 32) as u8);
            sum /= 32;
        });
        Some(digits.into_iter())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            chunk_count(lower, self.pad, BYTES_PER_CHUNK).unwrap_or(usize::MAX),
            upper.and_then(|n| chunk_count(n, self.pad, BYTES_PER_CHUNK)),
        )
    }
}

impl<I: FusedIterator<Item = u8>> FusedIterator for BytesToUnflatDigits<I> {}

struct BinDigits<I>(Flatten<BytesToUnflatDigits<Fuse<I>>, ChunkDigits>);

impl<I: ExactSizeIterator<Item = u8>> BinDigits<I> {
    fn new(iter: I) -> Self {
        let pad = (BYTES_PER_CHUNK - iter.len() % BYTES_PER_CHUNK)
            % BYTES_PER_CHUNK;
        Self(Flatten::new(BytesToUnflatDigits::new(iter.fuse(), pad)))
    }
}

impl<I: Iterator<Item = u8>> BinDigits<I> {
    fn next(&mut self) -> Option<Digit> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Digit) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.uniform_size_hint(DIGITS_PER_CHUNK)
    }
}

/// Iterator returned by [`encode_bin_to_chars`].
pub struct BinCharEncoder<I>(BinDigits<I>);

impl<I: Iterator<Item = u8>> Iterator for BinCharEncoder<I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Digit::to_char)
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, |b, d| f(b, d.to_char()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = u8>> ExactSizeIterator for BinCharEncoder<I> {}

impl<I: Iterator<Item = u8>> FusedIterator for BinCharEncoder<I> {}

/// Iterator returned by [`encode_bin_to_bytes`].
pub struct BinBytesEncoder<I>(BinDigits<I>);

impl<I: Iterator<Item = u8>> Iterator for BinBytesEncoder<I> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Digit::to_ascii)
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, |b, d| f(b, d.to_ascii()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = u8>> ExactSizeIterator for BinBytesEncoder<I> {}

impl<I: Iterator<Item = u8>> FusedIterator for BinBytesEncoder<I> {}

/// Encodes binary data as a sequence of Base32H chars.
///
/// Every 5 bytes become 8 chars. If the length of `bytes` isn't a multiple
/// of 5, zero bytes are added to the *start* of the data to make it one, so
/// decoding the output yields those zero bytes too.
///
/// The length reported by the [`ExactSizeIterator`] determines the padding,
/// so it must be accurate.
pub fn encode_bin_to_chars<I>(bytes: I) -> BinCharEncoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
    I::IntoIter: ExactSizeIterator,
{
    BinCharEncoder(BinDigits::new(bytes.into_iter()))
}

/// Encodes binary data as ASCII Base32H bytes.
///
/// This function is like [`encode_bin_to_chars`], but yields each char as a
/// byte. Base32H digits are all ASCII, so the output is also valid UTF-8.
pub fn encode_bin_to_bytes<I>(bytes: I) -> BinBytesEncoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
    I::IntoIter: ExactSizeIterator,
{
    BinBytesEncoder(BinDigits::new(bytes.into_iter()))
}

/// Encodes binary data as a Base32H [`String`].
///
/// See [`encode_bin_to_chars`] for how lengths that aren't a multiple of 5
/// are handled.
///
/// ```
/// assert_eq!(base32h::encode_bin(b"Hello"), "91JNQV3F");
/// assert_eq!(base32h::encode_bin([255_u8]), "0000007Z");
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_bin<B: AsRef<[u8]>>(bytes: B) -> String {
    encode_bin_to_chars(bytes.as_ref().iter().copied()).collect()
}
