//! Bit strings and the byte/bit/symbol transforms built on them.
//!
//! A [`BitString`] is an exact-length sequence of bits. It is displayed as
//! `'0'`/`'1'` characters in 8-bit groups separated by a space; when the
//! length is not a multiple of 8 the last group is shorter and printed as-is.
//!
//! ## Padding
//!
//! Two transforms consume bits in fixed-width chunks and zero-pad a short
//! final chunk on the right:
//! - [`from_bits`] reads 8-bit chunks (a trailing `01` becomes `01000000`)
//! - [`bits_to_symbols`] reads 2-bit chunks (a trailing `1` becomes `10`)
//!
//! Both are lossy on truncated input: the padded byte or symbol need not
//! match whatever originally followed the cut.

#![allow(clippy::cast_possible_truncation)]

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::bitbuffer::BitBuffer;
use crate::bitreader::BitReader;
use crate::error::CodecError;
use crate::strand::Strand;
use crate::symbol::Symbol;

/// Bits per display group.
const GROUP_BITS: usize = 8;

/// Exact-length bit sequence, stored packed MSB-first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    /// Packed bits; the unused tail of the last byte is always zero.
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitString {
    fn from_buffer(buffer: &BitBuffer) -> Self {
        Self {
            bytes: buffer.to_bytes(),
            len: buffer.len(),
        }
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the bit string holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the length is a whole number of bytes.
    #[inline]
    pub fn is_byte_aligned(&self) -> bool {
        self.len % 8 == 0
    }

    /// Sequential reader over the bits.
    pub fn reader(&self) -> BitReader<'_> {
        BitReader::new(&self.bytes, self.len)
    }

    /// Iterate over the bits as `0`/`1` values.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let mut reader = self.reader();
        std::iter::from_fn(move || reader.read_bit())
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bit) in self.iter().enumerate() {
            if i > 0 && i % GROUP_BITS == 0 {
                f.write_str(" ")?;
            }
            f.write_str(if bit == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = CodecError;

    /// Parse delimited bit text such as `"01000001 01"`.
    ///
    /// Whitespace anywhere is ignored; any other character besides `0` and
    /// `1` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buffer = BitBuffer::with_capacity(s.len());
        for (index, ch) in s.chars().enumerate() {
            match ch {
                '0' => buffer.append_bit(0),
                '1' => buffer.append_bit(1),
                c if c.is_whitespace() => {}
                c => return Err(CodecError::InvalidBit { ch: c, index }),
            }
        }
        Ok(Self::from_buffer(&buffer))
    }
}

/// Flatten bytes into bits, most significant bit first.
pub fn to_bits(bytes: &[u8]) -> BitString {
    let mut buffer = BitBuffer::with_capacity(bytes.len() * 8);
    buffer.append_bytes(bytes);
    BitString::from_buffer(&buffer)
}

/// Regroup bits into bytes, zero-padding a short final chunk.
///
/// # Arguments
/// * `bits` - Source bits, any length
///
/// # Returns
/// One byte per started 8-bit chunk. Lossy when `bits` is not byte-aligned.
pub fn from_bits(bits: &BitString) -> Vec<u8> {
    let mut reader = bits.reader();
    let mut bytes = Vec::with_capacity((bits.len() + 7) / 8);

    while let Some((chunk, real_bits)) = reader.read_padded(8) {
        if real_bits < 8 {
            debug!(real_bits, "padding final byte with zero bits");
        }
        bytes.push(chunk as u8);
    }

    bytes
}

/// Map bits to symbols two at a time, zero-padding a trailing odd bit.
///
/// # Arguments
/// * `bits` - Source bits, any length
///
/// # Returns
/// A strand of `(bits.len() + 1) / 2` symbols.
pub fn bits_to_symbols(bits: &BitString) -> Strand {
    let mut reader = bits.reader();
    let mut symbols = Vec::with_capacity((bits.len() + 1) / 2);

    while let Some((pair, real_bits)) = reader.read_padded(2) {
        if real_bits < 2 {
            debug!("padding trailing bit with a zero bit");
        }
        symbols.push(Symbol::from_bits(pair as u8));
    }

    Strand::from(symbols)
}

/// Map each symbol to its 2-bit value.
///
/// The result keeps every produced bit; nothing is padded or dropped.
pub fn symbols_to_bits(symbols: &Strand) -> BitString {
    let mut buffer = BitBuffer::with_capacity(symbols.len() * 2);
    for symbol in symbols {
        let _ = buffer.append_value(u32::from(symbol.bits()), 2);
    }
    BitString::from_buffer(&buffer)
}
