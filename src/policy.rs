//! Optional strict validation for decode input.
//!
//! The codec itself never rejects decode input. A caller that wants to
//! refuse empty or noisy sequences applies a [`DecodePolicy`] first.

use crate::error::{CodecError, Result};
use crate::symbol::Symbol;

/// Caller-side rules applied before decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodePolicy {
    /// Refuse input that is empty after trimming.
    pub reject_empty: bool,
    /// Refuse input containing anything besides `ACGT` (any case) after trimming.
    pub reject_invalid: bool,
}

impl DecodePolicy {
    /// Accept everything; noise is filtered by the codec.
    pub const fn lenient() -> Self {
        Self {
            reject_empty: false,
            reject_invalid: false,
        }
    }

    /// Refuse empty input and any non-alphabet character.
    pub const fn strict() -> Self {
        Self {
            reject_empty: true,
            reject_invalid: true,
        }
    }

    /// Check raw decode input against the policy.
    ///
    /// Leading and trailing whitespace is ignored. Reported positions are
    /// character offsets into the trimmed input.
    pub fn check(&self, raw: &str) -> Result<()> {
        let trimmed = raw.trim();

        if self.reject_empty && trimmed.is_empty() {
            return Err(CodecError::EmptySequence);
        }

        if self.reject_invalid {
            if let Some((index, ch)) = trimmed
                .chars()
                .enumerate()
                .find(|&(_, ch)| Symbol::from_char(ch).is_none())
            {
                return Err(CodecError::InvalidSymbol { ch, index });
            }
        }

        Ok(())
    }
}
