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

//! The Base32H digit table and single-digit conversions.

use super::BASE;

/// Every Base32H digit, indexed by value.
///
/// The first character of each entry is the canonical symbol, which encoders
/// must emit for that value. Any further characters are aliases, which
/// decoders must accept as that value. For example, `DIGITS[27]` is
/// `"VvUu"`: `V` is canonical, and `v`, `U`, and `u` all decode to 27.
pub const DIGITS: [&str; 32] = [
    "0Oo", "1Ii", "2", "3", "4", "5Ss", "6", "7", "8", "9", "Aa", "Bb", "Cc",
    "Dd", "Ee", "Ff", "Gg", "Hh", "Jj", "Kk", "Ll", "Mm", "Nn", "Pp", "Qq",
    "Rr", "Tt", "VvUu", "Ww", "Xx", "Yy", "Zz",
];

/// Marks bytes in [`REVERSE`] that aren't digits.
const NOT_A_DIGIT: u8 = u8::MAX;

/// Maps every ASCII byte to its digit value, or [`NOT_A_DIGIT`].
static REVERSE: [u8; 128] = build_reverse();

const fn build_reverse() -> [u8; 128] {
    let mut table = [NOT_A_DIGIT; 128];
    let mut value = 0;
    while value < DIGITS.len() {
        let symbols = DIGITS[value].as_bytes();
        let mut i = 0;
        while i < symbols.len() {
            let b = symbols[i] as usize;
            // Fails const evaluation if two entries share a symbol.
            assert!(table[b] == NOT_A_DIGIT);
            table[b] = value as u8;
            i += 1;
        }
        value += 1;
    }
    table
}

/// Canonical symbols as ASCII, indexed by value.
static CANONICAL: [u8; 32] = build_canonical();

const fn build_canonical() -> [u8; 32] {
    let mut table = [0; 32];
    let mut value = 0;
    while value < DIGITS.len() {
        table[value] = DIGITS[value].as_bytes()[0];
        value += 1;
    }
    table
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

macro_rules! const_digit {
    ($n:expr) => {{
        use crate::digit::Digit;
        const DIGIT: Digit = Digit::__const($n);
        DIGIT
    }};
}

impl Digit {
    pub fn new(x: u8) -> Option<Self> {
        (x < BASE).then(|| Self(x))
    }

    /// Keeps only the lowest five bits of `x`.
    pub fn from_low_bits(x: u8) -> Self {
        Self(x % BASE)
    }

    pub fn from_char(c: char) -> Option<Self> {
        let b: u8 = u32::from(c).try_into().ok()?;
        match REVERSE.get(usize::from(b)) {
            Some(&NOT_A_DIGIT) | None => None,
            Some(&d) => Some(Self(d)),
        }
    }

    pub fn to_ascii(self) -> u8 {
        CANONICAL[usize::from(self.0)]
    }

    pub fn to_char(self) -> char {
        char::from(self.to_ascii())
    }

    #[doc(hidden)]
    pub const fn __const(n: u8) -> Self {
        const BOUNDS_CHECK: [u8; 1] = [0];
        Self(n + BOUNDS_CHECK[(n >= BASE) as usize])
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

/// Returns the full digit table. See [`DIGITS`].
pub fn digits() -> &'static [&'static str; 32] {
    &DIGITS
}

/// Returns the canonical symbol for a value from 0 to 31 (inclusive).
///
/// Any other value, including negative ones, yields [`None`].
///
/// ```
/// assert_eq!(base32h::encode_digit(27), Some('V'));
/// assert_eq!(base32h::encode_digit(32), None);
/// assert_eq!(base32h::encode_digit(-1), None);
/// ```
pub fn encode_digit<T: TryInto<u8>>(value: T) -> Option<char> {
    value.try_into().ok().and_then(Digit::new).map(Digit::to_char)
}

/// Returns the value of a canonical symbol or alias, or [`None`] if `c`
/// isn't a Base32H digit.
///
/// ```
/// assert_eq!(base32h::decode_digit('V'), Some(27));
/// assert_eq!(base32h::decode_digit('u'), Some(27));
/// assert_eq!(base32h::decode_digit('-'), None);
/// ```
pub fn decode_digit(c: char) -> Option<u8> {
    Digit::from_char(c).map(u8::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_symbols_round_trip() {
        for value in 0..32_u8 {
            let c = encode_digit(value).unwrap();
            assert_eq!(DIGITS[usize::from(value)].chars().next(), Some(c));
            assert_eq!(decode_digit(c), Some(value));
        }
    }

    #[test]
    fn every_alias_decodes_to_its_index() {
        for (value, symbols) in DIGITS.iter().enumerate() {
            for c in symbols.chars() {
                assert_eq!(decode_digit(c), Some(value as u8), "{:?}", c);
            }
        }
    }

    #[test]
    fn u_and_v_collapse() {
        for c in ['V', 'v', 'U', 'u'] {
            assert_eq!(decode_digit(c), Some(27));
        }
        assert_eq!(encode_digit(27), Some('V'));
    }

    #[test]
    fn lookalikes() {
        assert_eq!(decode_digit('O'), Some(0));
        assert_eq!(decode_digit('o'), Some(0));
        assert_eq!(decode_digit('I'), Some(1));
        assert_eq!(decode_digit('i'), Some(1));
        assert_eq!(decode_digit('S'), Some(5));
        assert_eq!(decode_digit('s'), Some(5));
        assert_eq!(encode_digit(0), Some('0'));
        assert_eq!(encode_digit(1), Some('1'));
        assert_eq!(encode_digit(5), Some('5'));
    }

    #[test]
    fn out_of_range_values() {
        assert_eq!(encode_digit(32), None);
        assert_eq!(encode_digit(-1), None);
        assert_eq!(encode_digit(255_u8), None);
        assert_eq!(encode_digit(u64::MAX), None);
        assert_eq!(encode_digit(31_i64), Some('Z'));
    }

    #[test]
    fn non_digits() {
        for c in ['-', ' ', '\n', '=', '\u{1f1}', '\u{d6}', '\u{ff10}'] {
            assert_eq!(decode_digit(c), None, "{:?}", c);
        }
    }

    #[test]
    fn accepted_symbol_count() {
        let accepted = (0..128_u8)
            .map(char::from)
            .filter(|&c| decode_digit(c).is_some())
            .count();
        assert_eq!(accepted, DIGITS.iter().map(|s| s.len()).sum::<usize>());
    }
}
