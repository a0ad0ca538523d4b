// Copyright (c) 2025 Lexicode Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the Huffman codec.


use super::*;
use test_case::test_case;

const REFERENCE_TEXT: &str = "abbdhabdbbbad";

#[test]
fn test_reference_round_trip() {
    let mut codec = HuffmanCodec::new();
    let bits = codec.encode(REFERENCE_TEXT);

    assert!(bits.chars().all(|b| b == '0' || b == '1'));
    assert!(codec.code_table().is_prefix_free());
    assert_eq!(codec.decode(&bits).unwrap(), REFERENCE_TEXT);
}

#[test]
fn test_reference_bits() {
    let mut codec = HuffmanCodec::new();
    // b=1 d=01 a=000 h=001 with creation-order tie-breaking
    assert_eq!(codec.encode(REFERENCE_TEXT), "000110100100010111100001");
}

#[test_case("" ; "empty")]
#[test_case("a" ; "single character")]
#[test_case("aaaaaaa" ; "single repeated character")]
#[test_case("ab" ; "two characters")]
#[test_case("mississippi" ; "classic")]
#[test_case("héllo wörld ✓" ; "non ascii")]
#[test_case("0101 1010" ; "bit characters in plaintext")]
fn test_round_trip(text: &str) {
    let mut codec = HuffmanCodec::new();
    let bits = codec.encode(text);
    assert_eq!(codec.decode(&bits).unwrap(), text);
}

#[test]
fn test_single_symbol_policy() {
    let mut codec = HuffmanCodec::new();
    assert_eq!(codec.encode("aaa"), "000");
    assert_eq!(codec.code_for('a'), Some("0"));
    assert_eq!(codec.decode("000").unwrap(), "aaa");
}

#[test]
fn test_empty_input() {
    let mut codec = HuffmanCodec::new();
    assert_eq!(codec.encode(""), "");
    assert!(codec.code_table().is_empty());
    assert_eq!(codec.decode("").unwrap(), "");
}

#[test]
fn test_encode_rebuilds_table() {
    let mut codec = HuffmanCodec::new();
    codec.encode("abc");
    assert!(codec.code_for('a').is_some());

    let bits = codec.encode("xxy");
    assert_eq!(codec.code_for('a'), None);
    assert_eq!(codec.code_table().len(), 2);
    assert_eq!(codec.decode(&bits).unwrap(), "xxy");
}

#[test]
fn test_invalid_bit() {
    let mut codec = HuffmanCodec::new();
    codec.encode(REFERENCE_TEXT);
    assert_eq!(
        codec.decode("01x1"),
        Err(HuffmanError::InvalidBit { bit: 'x', position: 2 })
    );
}

#[test]
fn test_dangling_code_strict() {
    let mut codec = HuffmanCodec::new();
    codec.encode(REFERENCE_TEXT);
    // "1" is 'b'; "00" is the start of 'a' or 'h'
    assert_eq!(
        codec.decode("100"),
        Err(HuffmanError::DanglingCode { bits: "00".to_string() })
    );
}

#[test]
fn test_dangling_code_lenient() {
    let config = HuffmanConfig::new().with_strict_decode(false);
    let mut codec = HuffmanCodec::with_config(config);
    codec.encode(REFERENCE_TEXT);
    assert_eq!(codec.decode("100").unwrap(), "b");
}

#[test]
fn test_single_symbol_never_resolves_one() {
    let mut codec = HuffmanCodec::new();
    codec.encode("zz");
    assert_eq!(
        codec.decode("01"),
        Err(HuffmanError::UnknownCode {
            bits: "1".to_string(),
            position: 1,
        })
    );
}

#[test]
fn test_unresolvable_bit_reported_where_it_starts() {
    let mut codec = HuffmanCodec::new();
    codec.encode("zzz");

    // The valid zeros after the bad bit are not swallowed into it
    let expected = Err(HuffmanError::UnknownCode {
        bits: "1".to_string(),
        position: 0,
    });
    assert_eq!(codec.decode("1000"), expected);

    let config = HuffmanConfig::new().with_strict_decode(false);
    let mut lenient = HuffmanCodec::with_config(config);
    lenient.encode("zzz");
    assert_eq!(lenient.decode("1000"), expected);
    assert_eq!(
        lenient.decode("0001"),
        Err(HuffmanError::UnknownCode {
            bits: "1".to_string(),
            position: 3,
        })
    );
}

#[test]
fn test_decode_before_encode() {
    let codec = HuffmanCodec::new();
    assert_eq!(codec.decode("").unwrap(), "");
    assert_eq!(
        codec.decode("0"),
        Err(HuffmanError::UnknownCode {
            bits: "0".to_string(),
            position: 0,
        })
    );
}

#[test]
fn test_encode_with_table() {
    let mut codec = HuffmanCodec::new();
    codec.encode(REFERENCE_TEXT);

    let bits = codec.encode_with_table("bad").unwrap();
    assert_eq!(bits, "100001");
    assert_eq!(codec.decode(&bits).unwrap(), "bad");

    assert_eq!(
        codec.encode_with_table("bag"),
        Err(HuffmanError::UnknownSymbol('g'))
    );
}

#[test]
fn test_higher_frequency_gets_shorter_code() {
    let mut codec = HuffmanCodec::new();
    codec.encode("eeeeeeeetttta");

    let len = |c| codec.code_for(c).map(str::len).unwrap();
    assert!(len('e') <= len('t'));
    assert!(len('t') <= len('a'));
}
