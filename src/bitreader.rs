//! Sequential bit reader over packed MSB-first bytes.
//!
//! ## Bit Ordering
//! - Bit position 0 in a byte is bit 7 (MSB)
//! - Bit position 7 in a byte is bit 0 (LSB)

#![allow(clippy::cast_possible_truncation)]

/// Sequential bit reader.
///
/// Only the first `num_bits` bits of `data` are visible; any padding in
/// the last byte is never read.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    /// Source data.
    data: &'a [u8],
    /// Total number of bits available.
    num_bits: usize,
    /// Current bit position.
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader.
    ///
    /// # Arguments
    /// * `data` - Source byte slice
    /// * `num_bits` - Total number of valid bits in the data (clamped to
    ///   `data.len() * 8`)
    pub fn new(data: &'a [u8], num_bits: usize) -> Self {
        Self {
            data,
            num_bits: num_bits.min(data.len() * 8),
            bit_pos: 0,
        }
    }

    /// Get current bit position.
    #[inline]
    pub fn position(&self) -> usize {
        self.bit_pos
    }

    /// Get number of remaining bits.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.num_bits.saturating_sub(self.bit_pos)
    }

    /// Check if there are more bits to read.
    #[inline]
    pub fn has_bits(&self) -> bool {
        self.bit_pos < self.num_bits
    }

    /// Read a single bit.
    ///
    /// # Returns
    /// The bit value (0 or 1), or `None` once the stream is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Option<u8> {
        if self.bit_pos >= self.num_bits {
            return None;
        }

        let byte_index = self.bit_pos >> 3;
        let bit_index = self.bit_pos & 7;
        let bit = (self.data[byte_index] >> (7 - bit_index)) & 1;

        self.bit_pos += 1;

        Some(bit)
    }

    /// Read a chunk of up to `width` bits, right-padding with zeros.
    ///
    /// A short final chunk is shifted left so that its bits occupy the most
    /// significant positions of the chunk.
    ///
    /// # Arguments
    /// * `width` - Chunk width in bits (1-32)
    ///
    /// # Returns
    /// The chunk value (right-justified) and the number of real bits in it,
    /// or `None` if the stream is exhausted or `width` is out of range.
    pub fn read_padded(&mut self, width: usize) -> Option<(u32, usize)> {
        if width == 0 || width > 32 || !self.has_bits() {
            return None;
        }

        let available = self.remaining().min(width);
        let mut value = 0u32;
        for _ in 0..available {
            let bit = self.read_bit()?;
            value = (value << 1) | u32::from(bit);
        }

        Some((value << (width - available), available))
    }
}
