//! Reference vector tests.
//!
//! Fixed encode/decode vectors checked field by field, plus the padding
//! boundary where decoding stops being lossless.

use dnacodec::{
    bits_to_symbols, bytes_to_text, decode, encode, from_bits, symbols_to_bits, text_to_bytes,
    to_bits, BitString, DecodeResult, EncodeResult, INVALID_TEXT,
};

/// Encode vector: input text and every expected stage.
struct EncodeVector {
    name: &'static str,
    text: &'static str,
    binary: &'static str,
    dna_positive: &'static str,
    dna_negative: &'static str,
    binary_negative: &'static str,
}

/// Decode vector: raw input and every expected stage.
struct DecodeVector {
    name: &'static str,
    raw: &'static str,
    cleaned_sequence: &'static str,
    binary: &'static str,
    text: &'static str,
    complement: &'static str,
    complement_binary: &'static str,
}

const ENCODE_VECTORS: &[EncodeVector] = &[
    EncodeVector {
        name: "empty",
        text: "",
        binary: "",
        dna_positive: "",
        dna_negative: "",
        binary_negative: "",
    },
    EncodeVector {
        name: "single-char",
        text: "A",
        binary: "01000001",
        dna_positive: "TAAT",
        dna_negative: "ATTA",
        binary_negative: "00010100",
    },
    EncodeVector {
        name: "two-chars",
        text: "Hi",
        binary: "01001000 01101001",
        dna_positive: "TAGATGGT",
        dna_negative: "ATCTACCA",
        binary_negative: "00011101 00111100",
    },
    EncodeVector {
        name: "multibyte",
        text: "é",
        binary: "11000011 10101001",
        dna_positive: "CAACGGGT",
        dna_negative: "GTTGCCCA",
        binary_negative: "10010110 11111100",
    },
];

const DECODE_VECTORS: &[DecodeVector] = &[
    DecodeVector {
        name: "empty",
        raw: "",
        cleaned_sequence: "",
        binary: "",
        text: "",
        complement: "",
        complement_binary: "",
    },
    DecodeVector {
        name: "positive-strand",
        raw: "TAAT",
        cleaned_sequence: "TAAT",
        binary: "01000001",
        text: "A",
        complement: "ATTA",
        complement_binary: "00010100",
    },
    DecodeVector {
        name: "negative-strand",
        raw: "ATTA",
        cleaned_sequence: "ATTA",
        binary: "00010100",
        text: "\u{14}",
        complement: "TAAT",
        complement_binary: "01000001",
    },
    DecodeVector {
        name: "noise",
        raw: "xyzATGC123",
        cleaned_sequence: "ATGC",
        binary: "00011011",
        text: "\u{1b}",
        complement: "TACG",
        complement_binary: "01001110",
    },
    DecodeVector {
        name: "lowercase",
        raw: "taga tggt\n",
        cleaned_sequence: "TAGATGGT",
        binary: "01001000 01101001",
        text: "Hi",
        complement: "ATCTACCA",
        complement_binary: "00011101 00111100",
    },
    DecodeVector {
        name: "invalid-utf8",
        raw: "CCCC",
        cleaned_sequence: "CCCC",
        binary: "11111111",
        text: INVALID_TEXT,
        complement: "GGGG",
        complement_binary: "10101010",
    },
    DecodeVector {
        name: "truncated",
        raw: "TAATT",
        cleaned_sequence: "TAATT",
        binary: "01000001 01",
        text: "A@",
        complement: "ATTAA",
        complement_binary: "00010100 00",
    },
];

fn check_encode(vector: &EncodeVector) {
    let result: EncodeResult = encode(vector.text);
    assert_eq!(result.binary, vector.binary, "{}: binary", vector.name);
    assert_eq!(result.dna_positive, vector.dna_positive, "{}: positive", vector.name);
    assert_eq!(result.dna_negative, vector.dna_negative, "{}: negative", vector.name);
    assert_eq!(
        result.binary_negative, vector.binary_negative,
        "{}: negative binary",
        vector.name
    );
}

fn check_decode(vector: &DecodeVector) {
    let result: DecodeResult = decode(vector.raw);
    assert_eq!(
        result.cleaned_sequence, vector.cleaned_sequence,
        "{}: cleaned sequence",
        vector.name
    );
    assert_eq!(result.binary, vector.binary, "{}: binary", vector.name);
    assert_eq!(result.text, vector.text, "{}: text", vector.name);
    assert_eq!(result.complement, vector.complement, "{}: complement", vector.name);
    assert_eq!(
        result.complement_binary, vector.complement_binary,
        "{}: complement binary",
        vector.name
    );
}

#[test]
fn test_encode_vectors() {
    for vector in ENCODE_VECTORS {
        check_encode(vector);
    }
}

#[test]
fn test_decode_vectors() {
    for vector in DECODE_VECTORS {
        check_decode(vector);
    }
}

#[test]
fn test_encode_vectors_decode_back() {
    for vector in ENCODE_VECTORS {
        let decoded = decode(vector.dna_positive);
        assert_eq!(decoded.text, vector.text, "{}: round trip", vector.name);
        assert_eq!(decoded.complement, vector.dna_negative, "{}", vector.name);
    }
}

#[test]
fn test_stage_chain_round_trip() {
    for text in ["", "A", "Hello, world!", "héllo ✓ 🧬"] {
        let bits = to_bits(&text_to_bytes(text));
        let strand = bits_to_symbols(&bits);
        let back = bytes_to_text(&from_bits(&symbols_to_bits(&strand)));
        assert_eq!(back, text);
    }
}

#[test]
fn test_truncated_decode_is_lossy() {
    // 5 symbols carry 10 bits; the last byte is completed with zeros, so
    // re-encoding the decoded text does not reproduce the input strand.
    let decoded = decode("TAATT");
    assert_eq!(decoded.text, "A@");
    assert_eq!(encode(&decoded.text).dna_positive, "TAATTAAA");

    // 3 symbols: 010000 -> 01000000 = '@'
    assert_eq!(decode("TAA").text, "@");
}

#[test]
fn test_truncated_multibyte() {
    // The first 6 of the 8 symbols for 'é' leave C3 A0, which is valid UTF-8
    // for a different character; 5 symbols leave C3 80 ('À').
    assert_eq!(decode("CAACGG").text, "à");
    assert_eq!(decode("CAACG").text, "À");
    // Cutting inside the first byte leaves a lone lead byte.
    assert_eq!(decode("CAA").text, INVALID_TEXT);
}

#[test]
fn test_odd_bit_padding() {
    let bits: BitString = "0100000".parse().expect("valid bits");
    // 7 bits: the final lone '0' is padded to "00".
    assert_eq!(bits_to_symbols(&bits).to_string(), "TAAA");

    let bits: BitString = "0100001".parse().expect("valid bits");
    // A trailing '1' becomes "10", so the symbol is G rather than T.
    assert_eq!(bits_to_symbols(&bits).to_string(), "TAAG");
    assert_eq!(symbols_to_bits(&bits_to_symbols(&bits)).to_string(), "01000010");
}

#[test]
fn test_noise_only_decode_is_empty() {
    assert_eq!(decode("xyz 123 !?"), DecodeResult::default());
    assert_eq!(decode("NNNN UUUU"), DecodeResult::default());
}
