//! Symbol sequences (strands), input sanitization and the complement transform.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::CodecError;
use crate::symbol::Symbol;

/// An ordered sequence of alphabet symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Strand {
    symbols: Vec<Symbol>,
}

impl Strand {
    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the strand holds no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Iterate over the symbols in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// The paired strand; see [`complement`].
    pub fn complement(&self) -> Strand {
        complement(self)
    }
}

impl From<Vec<Symbol>> for Strand {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl FromIterator<Symbol> for Strand {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Strand {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromStr for Strand {
    type Err = CodecError;

    /// Strict parse: whitespace is skipped, every other character must be
    /// one of `ACGT` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .filter(|(_, ch)| !ch.is_whitespace())
            .map(|(index, ch)| {
                Symbol::from_char(ch).ok_or(CodecError::InvalidSymbol { ch, index })
            })
            .collect()
    }
}

/// Clean raw symbol input.
///
/// Case-folds to uppercase and drops every character outside `ACGT`.
/// Never fails: empty or all-noise input gives an empty strand.
pub fn sanitize(raw: &str) -> Strand {
    let strand: Strand = raw.chars().filter_map(Symbol::from_char).collect();

    let total = raw.chars().count();
    if strand.len() != total {
        debug!(
            kept = strand.len(),
            discarded = total - strand.len(),
            "discarded non-alphabet characters"
        );
    }

    strand
}

/// Pair every symbol with its partner (`A`<->`T`, `G`<->`C`).
///
/// Length and order are preserved; applying it twice gives back the input.
pub fn complement(strand: &Strand) -> Strand {
    strand.iter().map(|s| s.complement()).collect()
}
