use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StructureError {
    #[error("structure is empty")]
    Empty,

    #[error("invalid structure symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("unmatched '(' at position {position}")]
    UnmatchedOpen { position: usize },

    #[error("unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },

    #[error("structure lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// A secondary structure in dot-bracket notation, stored with its pair table.
///
/// `(` and `)` denote paired positions, `.` unpaired ones. Pairs are non-crossing
/// by construction of the notation. The search engine itself only ever reads the
/// structure's length; the pair table and distance operations serve the folding
/// backends and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStructure {
    notation: String,
    pairs: Vec<Option<usize>>,
}

impl TargetStructure {
    pub fn parse(input: &str) -> Result<Self, StructureError> {
        if input.is_empty() {
            return Err(StructureError::Empty);
        }
        let mut pairs = vec![None; input.len()];
        let mut stack = Vec::new();
        for (position, symbol) in input.chars().enumerate() {
            match symbol {
                '(' => stack.push(position),
                ')' => {
                    let open = stack
                        .pop()
                        .ok_or(StructureError::UnmatchedClose { position })?;
                    pairs[open] = Some(position);
                    pairs[position] = Some(open);
                }
                '.' => {}
                _ => return Err(StructureError::InvalidSymbol { symbol, position }),
            }
        }
        if let Some(&position) = stack.last() {
            return Err(StructureError::UnmatchedOpen { position });
        }
        Ok(Self {
            notation: input.to_string(),
            pairs,
        })
    }

    /// Builds a structure from a pair table, e.g. one produced by a folding run.
    pub(crate) fn from_pair_table(pairs: Vec<Option<usize>>) -> Self {
        let mut notation = vec!['.'; pairs.len()];
        for (i, partner) in pairs.iter().enumerate() {
            if let Some(j) = partner {
                if i < *j {
                    notation[i] = '(';
                    notation[*j] = ')';
                }
            }
        }
        Self {
            notation: notation.into_iter().collect(),
            pairs,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.notation
    }

    pub fn partner(&self, position: usize) -> Option<usize> {
        self.pairs.get(position).copied().flatten()
    }

    pub fn is_paired(&self, position: usize) -> bool {
        self.partner(position).is_some()
    }

    /// Sorted list of base pairs `(i, j)` with `i < j`.
    pub fn base_pairs(&self) -> Vec<(usize, usize)> {
        self.pairs
            .iter()
            .enumerate()
            .filter_map(|(i, partner)| partner.map(|j| (i, j)))
            .filter(|(i, j)| i < j)
            .collect()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_some()).count() / 2
    }

    /// Size of the symmetric difference of the two base-pair sets.
    pub fn base_pair_distance(&self, other: &Self) -> Result<usize, StructureError> {
        if self.len() != other.len() {
            return Err(StructureError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let own: HashSet<(usize, usize)> = self.base_pairs().into_iter().collect();
        let theirs: HashSet<(usize, usize)> = other.base_pairs().into_iter().collect();
        Ok(own.symmetric_difference(&theirs).count())
    }
}

impl fmt::Display for TargetStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

impl Serialize for TargetStructure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.notation)
    }
}

impl<'de> Deserialize<'de> for TargetStructure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
