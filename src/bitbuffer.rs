//! Variable-length bit buffer for building bit streams.
//!
//! Bits are appended sequentially MSB-first:
//! - First bit appended goes to bit position 7 of the first byte
//! - Second bit goes to position 6, etc.
//!
//! When the stream ends mid-byte, [`BitBuffer::to_bytes`] left-aligns the
//! pending bits and fills the rest of the byte with zeros.

#![allow(clippy::cast_possible_truncation)]

/// Variable-length bit buffer.
///
/// Uses a 64-bit accumulator and flushes whole bytes into `data`.
#[derive(Clone, Debug, Default)]
pub struct BitBuffer {
    /// Byte storage for flushed bits.
    data: Vec<u8>,
    /// Total number of bits in the buffer.
    num_bits: usize,
    /// Accumulator for pending bits.
    acc: u64,
    /// Number of bits in the accumulator.
    acc_len: usize,
}

impl BitBuffer {
    /// Create a new empty bit buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `num_bits` bits.
    pub fn with_capacity(num_bits: usize) -> Self {
        Self {
            data: Vec::with_capacity((num_bits + 7) / 8),
            ..Self::default()
        }
    }

    /// Get the total number of bits in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// Flush complete bytes from accumulator to data buffer.
    fn flush_acc(&mut self) {
        while self.acc_len >= 8 {
            self.acc_len -= 8;
            let byte = (self.acc >> self.acc_len) as u8;
            self.data.push(byte);
            self.acc &= (1u64 << self.acc_len) - 1;
        }
    }

    /// Append a single bit.
    ///
    /// # Arguments
    /// * `bit` - Bit value (0 or non-zero for 1)
    pub fn append_bit(&mut self, bit: u8) {
        let bit_val = u64::from(bit != 0);
        self.acc = (self.acc << 1) | bit_val;
        self.acc_len += 1;
        self.num_bits += 1;

        if self.acc_len >= 8 {
            self.flush_acc();
        }
    }

    /// Append multiple bits from a value, most significant first.
    ///
    /// # Arguments
    /// * `value` - Value containing bits (right-justified)
    /// * `num_bits` - Number of bits to append (1-32)
    ///
    /// # Returns
    /// `true` on success, `false` if `num_bits` is out of range (nothing is
    /// appended).
    pub fn append_value(&mut self, value: u32, num_bits: usize) -> bool {
        if num_bits == 0 || num_bits > 32 {
            return false;
        }

        let mask = (1u64 << num_bits) - 1;
        self.acc = (self.acc << num_bits) | (u64::from(value) & mask);
        self.acc_len += num_bits;
        self.num_bits += num_bits;

        self.flush_acc();

        true
    }

    /// Append whole bytes, MSB-first.
    ///
    /// # Arguments
    /// * `bytes` - Source byte slice
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        if self.acc_len == 0 {
            // Byte-aligned: copy straight through.
            self.data.extend_from_slice(bytes);
            self.num_bits += bytes.len() * 8;
            return;
        }

        for &byte in bytes {
            let _ = self.append_value(u32::from(byte), 8);
        }
    }

    /// Convert buffer to bytes, zero-padding the final partial byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity((self.num_bits + 7) / 8);
        result.extend_from_slice(&self.data);

        if self.acc_len > 0 {
            let last_byte = (self.acc << (8 - self.acc_len)) as u8;
            result.push(last_byte);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let bb = BitBuffer::new();
        assert_eq!(bb.len(), 0);
        assert!(bb.is_empty());
        assert!(bb.to_bytes().is_empty());
    }

    #[test]
    fn test_append_bit() {
        let mut bb = BitBuffer::new();

        // 10110010 = 0xB2
        for bit in [1, 0, 1, 1, 0, 0, 1, 0] {
            bb.append_bit(bit);
        }

        assert_eq!(bb.len(), 8);
        assert_eq!(bb.to_bytes(), vec![0xB2]);
    }

    #[test]
    fn test_append_bit_nonzero_is_one() {
        let mut bb = BitBuffer::new();
        bb.append_bit(7);
        assert_eq!(bb.to_bytes(), vec![0x80]);
    }

    #[test]
    fn test_append_value() {
        let mut bb = BitBuffer::new();

        // 01 00 00 01 -> 0x41 ('A')
        bb.append_value(0b01, 2);
        bb.append_value(0b00, 2);
        bb.append_value(0b00, 2);
        bb.append_value(0b01, 2);

        assert_eq!(bb.len(), 8);
        assert_eq!(bb.to_bytes(), vec![0x41]);
    }

    #[test]
    fn test_append_value_rejects_bad_width() {
        let mut bb = BitBuffer::new();
        assert!(!bb.append_value(1, 0));
        assert!(!bb.append_value(1, 33));
        assert!(bb.is_empty());

        assert!(bb.append_value(u32::MAX, 32));
        assert_eq!(bb.to_bytes(), vec![0xFF; 4]);
    }

    #[test]
    fn test_append_bytes_aligned_and_unaligned() {
        let mut bb = BitBuffer::new();
        bb.append_bytes(&[0xDE, 0xAD]);
        assert_eq!(bb.len(), 16);
        assert_eq!(bb.to_bytes(), vec![0xDE, 0xAD]);

        let mut bb = BitBuffer::new();
        bb.append_bit(1);
        bb.append_bytes(&[0x00]);
        assert_eq!(bb.len(), 9);
        assert_eq!(bb.to_bytes(), vec![0x80, 0x00]);
    }

    #[test]
    fn test_partial_byte_is_zero_padded() {
        let mut bb = BitBuffer::new();

        // 10110 left-aligned = 10110000 = 0xB0
        for bit in [1, 0, 1, 1, 0] {
            bb.append_bit(bit);
        }

        assert_eq!(bb.len(), 5);
        assert_eq!(bb.to_bytes(), vec![0xB0]);
    }

    #[test]
    fn test_with_capacity() {
        let mut bb = BitBuffer::with_capacity(24);
        bb.append_value(0xDE, 8);
        bb.append_value(0xAD, 8);
        bb.append_value(0xBE, 8);
        assert_eq!(bb.to_bytes(), vec![0xDE, 0xAD, 0xBE]);
    }
}
