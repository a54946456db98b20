//! Encode and decode pipelines.
//!
//! ```text
//! encode: text -> bytes -> bits -> positive strand -> complement -> bits
//! decode: raw  -> sanitized strand -> bits -> bytes -> text
//!                              \-> complement -> bits -> bytes -> text
//! ```
//!
//! Both pipelines are total: every field of the result is always filled in,
//! and empty input gives empty fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bitstring::{bits_to_symbols, from_bits, symbols_to_bits, to_bits};
use crate::error::Result;
use crate::policy::DecodePolicy;
use crate::strand::{complement, sanitize};
use crate::text::{bytes_to_text, text_to_bytes};

/// Every stage of encoding a piece of text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResult {
    /// UTF-8 bytes of the input, 8-bit groups separated by spaces.
    pub binary: String,
    /// Direct encoding of `binary`.
    pub dna_positive: String,
    /// Complement of `dna_positive`.
    pub dna_negative: String,
    /// Bits of `dna_negative`.
    pub binary_negative: String,
    /// `binary_negative` read back as text (usually the invalid-text placeholder).
    pub negative_text: String,
}

/// Every stage of decoding a raw symbol sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// Input after case-folding and dropping non-alphabet characters.
    pub cleaned_sequence: String,
    /// Bits of `cleaned_sequence`.
    pub binary: String,
    /// `binary` read back as text.
    pub text: String,
    /// Complement of `cleaned_sequence`.
    pub complement: String,
    /// Bits of `complement`.
    pub complement_binary: String,
    /// `complement_binary` read back as text.
    pub complement_text: String,
}

/// Encode text into a positive strand and its complement.
pub fn encode(text: &str) -> EncodeResult {
    let bits = to_bits(&text_to_bytes(text));
    let positive = bits_to_symbols(&bits);
    let negative = complement(&positive);
    let negative_bits = symbols_to_bits(&negative);

    trace!(bytes = text.len(), symbols = positive.len(), "encoded text");

    EncodeResult {
        binary: bits.to_string(),
        dna_positive: positive.to_string(),
        dna_negative: negative.to_string(),
        negative_text: bytes_to_text(&from_bits(&negative_bits)),
        binary_negative: negative_bits.to_string(),
    }
}

/// Decode a raw symbol sequence, discarding anything outside the alphabet.
pub fn decode(raw: &str) -> DecodeResult {
    let cleaned = sanitize(raw);
    let bits = symbols_to_bits(&cleaned);
    let paired = complement(&cleaned);
    let paired_bits = symbols_to_bits(&paired);

    trace!(symbols = cleaned.len(), bits = bits.len(), "decoded strand");

    DecodeResult {
        cleaned_sequence: cleaned.to_string(),
        text: bytes_to_text(&from_bits(&bits)),
        binary: bits.to_string(),
        complement: paired.to_string(),
        complement_text: bytes_to_text(&from_bits(&paired_bits)),
        complement_binary: paired_bits.to_string(),
    }
}

/// Transcoding direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Text to strands.
    Encode,
    /// Strand to text.
    Decode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

/// Result of [`transcode`], tagged with the mode that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Transcoded {
    Encode(EncodeResult),
    Decode(DecodeResult),
}

impl Transcoded {
    /// The mode that produced this result.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Encode(_) => Mode::Encode,
            Self::Decode(_) => Mode::Decode,
        }
    }
}

/// Run one pipeline, applying `policy` to decode input first.
///
/// Encoding never fails. Decoding fails only when `policy` rejects the input.
pub fn transcode(mode: Mode, payload: &str, policy: &DecodePolicy) -> Result<Transcoded> {
    match mode {
        Mode::Encode => Ok(Transcoded::Encode(encode(payload))),
        Mode::Decode => {
            policy.check(payload)?;
            Ok(Transcoded::Decode(decode(payload)))
        }
    }
}
