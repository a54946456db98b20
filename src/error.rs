//! Error types for strict parsing, decode policies and configuration.
//!
//! The encode/decode pipelines themselves are total and never produce
//! these; they only surface at the caller boundary.

use thiserror::Error;

/// Errors raised by strict parsing, decode policies and the CLI.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Character outside the `A`/`C`/`G`/`T` alphabet
    #[error("invalid symbol {ch:?} at position {index} (allowed: A C G T)")]
    InvalidSymbol { ch: char, index: usize },

    /// Single character that is not a symbol
    #[error("invalid symbol {0:?} (allowed: A C G T)")]
    NotASymbol(char),

    /// Character other than `0`/`1` in a bit string
    #[error("invalid bit {ch:?} at position {index} (allowed: 0 1)")]
    InvalidBit { ch: char, index: usize },

    /// Sequence was empty after trimming
    #[error("empty DNA sequence")]
    EmptySequence,

    /// I/O error (reading input or configuration)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("invalid configuration: {0}")]
    Config(String),

    /// JSON serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::InvalidSymbol { ch: 'x', index: 3 };
        assert!(err.to_string().contains("invalid symbol 'x'"));
        assert!(err.to_string().contains("position 3"));

        let err = CodecError::NotASymbol('N');
        assert_eq!(err.to_string(), "invalid symbol 'N' (allowed: A C G T)");

        let err = CodecError::InvalidBit { ch: '2', index: 0 };
        assert!(err.to_string().contains("invalid bit '2'"));

        let err = CodecError::EmptySequence;
        assert!(err.to_string().contains("empty DNA sequence"));

        let err = CodecError::Config("missing brace".to_string());
        assert!(err.to_string().contains("invalid configuration"));

        let err = CodecError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        assert!(err.to_string().contains("I/O error"));
    }
}
