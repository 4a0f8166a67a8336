use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::folding::nussinov_fold;
use crate::core::models::sequence::{NucleotideSequence, RNA_BASES, WILDCARD};
use crate::core::models::structure::TargetStructure;
use crate::engine::backend::{BackendError, FoldOutcome, FoldingBackend};

/// Fills wildcards uniformly at random and folds once.
///
/// Useful as a search baseline and as a cheap test double; it makes no attempt
/// to approach the target beyond what chance provides.
pub struct RandomFillBackend {
    target: TargetStructure,
    rng: StdRng,
}

impl RandomFillBackend {
    pub fn new(target: TargetStructure, seed: Option<u64>) -> Self {
        Self {
            target,
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
        }
    }
}

impl FoldingBackend for RandomFillBackend {
    fn execute(&mut self, start: &NucleotideSequence) -> Result<FoldOutcome, BackendError> {
        let symbols: Vec<char> = start
            .symbols()
            .map(|s| {
                if s == WILDCARD {
                    RNA_BASES[self.rng.gen_range(0..RNA_BASES.len())]
                } else {
                    s
                }
            })
            .collect();

        let candidate = NucleotideSequence::from_symbols(symbols);
        let predicted = nussinov_fold(&candidate);
        let structure_distance = predicted.base_pair_distance(&self.target)? as f64;
        let hamming_distance = start.hamming_distance(&candidate)?;
        Ok(FoldOutcome {
            candidate,
            hamming_distance,
            structure_distance,
        })
    }
}
