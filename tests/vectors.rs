use base32h::{
    decode, decode_as, decode_bin, decode_digit, digits, encode, encode_bin,
    encode_digit,
};
use num_bigint::{BigInt, BigUint};

const NUMBERS: &[(u128, &str)] = &[
    (0, "0"),
    (1, "1"),
    (31, "Z"),
    (32, "10"),
    (33, "11"),
    (123, "3V"),
    (255, "7Z"),
    (1023, "ZZ"),
    (1024, "100"),
    (1234, "16J"),
    (65535, "1ZZZ"),
    (4294967295, "3ZZZZZZ"),
    (18446744073709551615, "FZZZZZZZZZZZZ"),
    (
        340282366920938463463374607431768211455,
        "7ZZZZZZZZZZZZZZZZZZZZZZZZZ",
    ),
];

const BINARY: &[(&[u8], &str)] = &[
    (&[], ""),
    (&[72, 101, 108, 108, 111], "91JNQV3F"),
    (&[0, 0, 0, 0, 0], "00000000"),
    (&[255, 255, 255, 255, 255], "ZZZZZZZZ"),
    (
        &[227, 169, 72, 131, 141, 245, 213, 150, 217, 217],
        "WELLH0WDYPARDNER",
    ),
];

#[test]
fn digit_table() {
    let table = digits();
    assert_eq!(table.len(), 32);
    assert_eq!(table[0], "0Oo");
    assert_eq!(table[27], "VvUu");
    assert_eq!(table[31], "Zz");
    for (value, symbols) in table.iter().enumerate() {
        assert_eq!(encode_digit(value), symbols.chars().next());
    }
}

#[test]
fn digits_encode_and_decode() {
    assert_eq!(encode_digit(27), Some('V'));
    assert_eq!(encode_digit(32), None);
    assert_eq!(encode_digit(-1), None);
    for c in ['V', 'v', 'U', 'u'] {
        assert_eq!(decode_digit(c), Some(27));
    }
}

#[test]
fn numbers_encode() {
    for &(n, text) in NUMBERS {
        assert_eq!(encode(n), text, "{}", n);
        assert_eq!(encode(BigUint::from(n)), text, "{}", n);
    }
}

#[test]
fn numbers_decode() {
    for &(n, text) in NUMBERS {
        assert_eq!(decode_as::<u128>(text), Some(n), "{}", text);
        assert_eq!(decode(text), BigUint::from(n), "{}", text);
        let lower = text.to_lowercase();
        assert_eq!(decode_as::<u128>(&lower), Some(n), "{}", lower);
    }
}

#[test]
fn numbers_beyond_u128() {
    let n = BigUint::from(1_u8) << 200_u32;
    let text = encode(&n);
    assert_eq!(text, format!("1{}", "0".repeat(40)));
    assert_eq!(decode(&text), n);
    assert_eq!(decode_as::<u128>(&text), None);
}

#[test]
fn negative_numbers_use_magnitude() {
    assert_eq!(encode(-1234), "16J");
    assert_eq!(encode(i64::MIN), "8000000000000");
    assert_eq!(encode(BigInt::from(-1024)), "100");
}

#[test]
fn empty_and_junk() {
    assert_eq!(decode(""), BigUint::from(0_u8));
    assert_eq!(decode("0"), BigUint::from(0_u8));
    assert_eq!(decode("---"), BigUint::from(0_u8));
    assert_eq!(decode("1-2-3"), decode("123"));
    assert_eq!(decode(" 1 0 "), BigUint::from(32_u8));
}

#[test]
fn binary_encode() {
    for &(bytes, text) in BINARY {
        assert_eq!(encode_bin(bytes), text, "{:?}", bytes);
    }
}

#[test]
fn binary_decode() {
    for &(bytes, text) in BINARY {
        assert_eq!(decode_bin(text), bytes, "{}", text);
        assert_eq!(decode_bin(&text.to_lowercase()), bytes, "{}", text);
    }
}

#[test]
fn binary_decode_with_separators() {
    assert_eq!(
        decode_bin("WELL-H0WD-YPAR-DNER"),
        [227, 169, 72, 131, 141, 245, 213, 150, 217, 217],
    );
    assert_eq!(decode_bin("well h0wd\nypar dner"), decode_bin("WELLH0WDYPARDNER"));
    assert_eq!(decode_bin("we11 hOwd yqar dner").len(), 10);
}

#[test]
fn binary_short_input_gains_leading_zeros() {
    assert_eq!(encode_bin([1_u8]), "00000001");
    assert_eq!(decode_bin("00000001"), [0, 0, 0, 0, 1]);
    assert_eq!(encode_bin([1_u8, 2, 3, 4, 5, 6]), "00000001081G8186");
    assert_eq!(
        decode_bin("00000001081G8186"),
        [0, 0, 0, 0, 1, 2, 3, 4, 5, 6],
    );
}

#[test]
fn binary_short_text_gains_leading_zero_digits() {
    assert_eq!(decode_bin("1"), [0, 0, 0, 0, 1]);
    assert_eq!(decode_bin("7z"), [0, 0, 0, 0, 255]);
    assert_eq!(
        decode_bin("zzzzzzzzz"),
        [0, 0, 0, 0, 31, 255, 255, 255, 255, 255],
    );
}
