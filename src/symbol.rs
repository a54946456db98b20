//! The four-symbol nucleotide alphabet.
//!
//! Each symbol stands for exactly one 2-bit value:
//!
//! | Bits | Symbol | Complement |
//! |------|--------|------------|
//! | `00` | `A`    | `T`        |
//! | `01` | `T`    | `A`        |
//! | `10` | `G`    | `C`        |
//! | `11` | `C`    | `G`        |
//!
//! The bases carry no biological meaning here; they are just a convenient
//! printable alphabet for 2-bit groups.

use std::fmt;

use crate::error::CodecError;

/// One symbol of the encoding alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    A,
    T,
    G,
    C,
}

/// Symbols indexed by their 2-bit value.
const FROM_BITS: [Symbol; 4] = [Symbol::A, Symbol::T, Symbol::G, Symbol::C];

impl Symbol {
    /// All symbols, in 2-bit value order.
    pub const ALL: [Symbol; 4] = FROM_BITS;

    /// Map the low two bits of `bits` to a symbol.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        FROM_BITS[(bits & 0b11) as usize]
    }

    /// The 2-bit value of this symbol (right-justified).
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            Self::A => 0b00,
            Self::T => 0b01,
            Self::G => 0b10,
            Self::C => 0b11,
        }
    }

    /// Pairing partner: `A`<->`T`, `G`<->`C`.
    #[inline]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::G => Self::C,
            Self::C => Self::G,
        }
    }

    /// Parse a single character, ignoring case.
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'T' => Some(Self::T),
            'G' => Some(Self::G),
            'C' => Some(Self::C),
            _ => None,
        }
    }

    /// Uppercase character for this symbol.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::G => 'G',
            Self::C => 'C',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = CodecError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(CodecError::NotASymbol(ch))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
