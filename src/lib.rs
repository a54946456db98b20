//! # dnacodec
//!
//! Bidirectional codec between text and a four-symbol nucleotide alphabet,
//! plus the paired ("negative") strand.
//!
//! Every byte of UTF-8 text is split into four 2-bit groups, and each group
//! becomes one symbol:
//!
//! | Bits | Symbol | Pairs with |
//! |------|--------|------------|
//! | `00` | `A`    | `T`        |
//! | `01` | `T`    | `A`        |
//! | `10` | `G`    | `C`        |
//! | `11` | `C`    | `G`        |
//!
//! So `"A"` (`0x41` = `01 00 00 01`) encodes to `TAAT`, whose complement is
//! `ATTA`.
//!
//! ## Design
//!
//! - **Total** - [`encode()`] and [`decode()`] return a result for any input
//! - **Noise tolerant** - decode drops everything outside `ACGT` (any case)
//! - **No panics on bad text** - invalid UTF-8 becomes [`INVALID_TEXT`]
//! - **Safe Rust** - `#![forbid(unsafe_code)]`
//!
//! ## API Overview
//!
//! ### High-Level Functions
//!
//! - [`encode()`] - Text to bits, positive strand, negative strand
//! - [`decode()`] - Raw symbols to cleaned strand, bits, text and complement
//! - [`transcode()`] - Either of the above behind a [`DecodePolicy`]
//!
//! ### Stages
//!
//! - [`to_bits`] / [`from_bits`] - Bytes <-> bits (8-bit chunks, zero-padded)
//! - [`bits_to_symbols`] / [`symbols_to_bits`] - Bits <-> symbols (2-bit chunks)
//! - [`sanitize`] - Case-fold and strip non-alphabet characters
//! - [`complement`] - Pair every symbol with its partner
//! - [`text_to_bytes`] / [`bytes_to_text`] - UTF-8 boundary
//! - [`escape_control`] - Make decoded text safe to print
//!
//! ### Low-Level Components
//!
//! - [`BitBuffer`] - MSB-first bit accumulator
//! - [`BitReader`] - Sequential MSB-first bit reader
//!
//! ## Usage
//!
//! ```rust
//! use dnacodec::{decode, encode, INVALID_TEXT};
//!
//! let encoded = encode("A");
//! assert_eq!(encoded.binary, "01000001");
//! assert_eq!(encoded.dna_positive, "TAAT");
//! assert_eq!(encoded.dna_negative, "ATTA");
//!
//! let decoded = decode("xyz taat 123");
//! assert_eq!(decoded.cleaned_sequence, "TAAT");
//! assert_eq!(decoded.text, "A");
//!
//! assert_eq!(decode("CCCC").text, INVALID_TEXT);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod bitbuffer;
mod bitreader;
mod bitstring;
mod config;
mod error;
mod policy;
mod strand;
mod symbol;
mod text;
mod transcode;

pub use bitbuffer::BitBuffer;
pub use bitreader::BitReader;
pub use bitstring::{bits_to_symbols, from_bits, symbols_to_bits, to_bits, BitString};
pub use config::{Config, OutputFormat};
pub use error::{CodecError, Result};
pub use policy::DecodePolicy;
pub use strand::{complement, sanitize, Strand};
pub use symbol::Symbol;
pub use text::{bytes_to_text, escape_control, text_to_bytes, INVALID_TEXT};
pub use transcode::{decode, encode, transcode, DecodeResult, EncodeResult, Mode, Transcoded};
