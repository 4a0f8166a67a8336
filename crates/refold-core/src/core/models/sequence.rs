use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Placeholder symbol meaning "any nucleotide" at a free position.
pub const WILDCARD: char = 'n';

/// The concrete RNA alphabet, in the order random fills draw from.
pub const RNA_BASES: [char; 4] = ['a', 'c', 'g', 'u'];

const ALPHABET: [char; 6] = ['a', 'c', 'g', 'u', 't', WILDCARD];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("sequence is empty")]
    Empty,

    #[error("invalid nucleotide '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("sequence lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// A fixed-length nucleotide string in canonical (lowercase) form.
///
/// The alphabet is `a c g u`, with `t` accepted as a DNA-alphabet synonym for `u`,
/// plus the [`WILDCARD`] symbol `n`. Canonicalization happens once at construction,
/// so two sequences differing only in case compare equal and a folding backend is
/// never handed a position it could "correct" merely by changing case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NucleotideSequence {
    symbols: String,
}

impl NucleotideSequence {
    pub fn parse(input: &str) -> Result<Self, SequenceError> {
        if input.is_empty() {
            return Err(SequenceError::Empty);
        }
        let mut symbols = String::with_capacity(input.len());
        for (position, raw) in input.chars().enumerate() {
            let symbol = raw.to_ascii_lowercase();
            if !ALPHABET.contains(&symbol) {
                return Err(SequenceError::InvalidSymbol {
                    symbol: raw,
                    position,
                });
            }
            symbols.push(symbol);
        }
        Ok(Self { symbols })
    }

    pub(crate) fn from_symbols(symbols: Vec<char>) -> Self {
        debug_assert!(symbols.iter().all(|s| ALPHABET.contains(s)));
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.chars()
    }

    pub fn wildcard_positions(&self) -> Vec<usize> {
        self.symbols
            .chars()
            .enumerate()
            .filter_map(|(i, s)| (s == WILDCARD).then_some(i))
            .collect()
    }

    /// Copy of this sequence with the wildcard symbol written at each given index.
    ///
    /// This is the "free position" mask applied by the search driver before every
    /// backend call. Indices must lie within the sequence.
    pub fn masked(&self, positions: &[usize]) -> Self {
        let mut symbols: Vec<char> = self.symbols.chars().collect();
        for &position in positions {
            debug_assert!(position < symbols.len());
            symbols[position] = WILDCARD;
        }
        Self::from_symbols(symbols)
    }

    /// Count of positions at which the two sequences differ.
    pub fn hamming_distance(&self, other: &Self) -> Result<usize, SequenceError> {
        if self.len() != other.len() {
            return Err(SequenceError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self
            .symbols
            .chars()
            .zip(other.symbols.chars())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Fraction of `g`/`c` symbols, a standard designability metric.
    pub fn gc_fraction(&self) -> f64 {
        if self.symbols.is_empty() {
            return 0.0;
        }
        let gc = self
            .symbols
            .chars()
            .filter(|&s| s == 'g' || s == 'c')
            .count();
        gc as f64 / self.len() as f64
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl Serialize for NucleotideSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.symbols)
    }
}

impl<'de> Deserialize<'de> for NucleotideSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
