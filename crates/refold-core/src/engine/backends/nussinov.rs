use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::core::folding::{nussinov_fold, rna_partners};
use crate::core::models::sequence::{NucleotideSequence, RNA_BASES};
use crate::core::models::structure::TargetStructure;
use crate::engine::backend::{BackendError, FoldOutcome, FoldingBackend};

const CLIMB_PASSES: usize = 8;

/// Stochastic local search over the free positions, scored by Nussinov folding.
///
/// Free positions are first seeded pair-aware: when the target pairs a free
/// position with an already assigned one, a complementary base is proposed.
/// The assignment is then hill-climbed one position at a time until the
/// base-pair distance to the target stops improving; a plateau triggers a
/// single random kick. Deterministic under a fixed seed.
pub struct NussinovBackend {
    target: TargetStructure,
    rng: StdRng,
}

impl NussinovBackend {
    pub fn new(target: TargetStructure, seed: Option<u64>) -> Self {
        Self {
            target,
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
        }
    }

    fn random_base(&mut self) -> char {
        RNA_BASES[self.rng.gen_range(0..RNA_BASES.len())]
    }

    fn pick(&mut self, choices: &str) -> char {
        let symbols: Vec<char> = choices.chars().collect();
        symbols[self.rng.gen_range(0..symbols.len())]
    }

    fn distance_to_target(&self, symbols: &[char]) -> Result<usize, BackendError> {
        let candidate = NucleotideSequence::from_symbols(symbols.to_vec());
        let predicted = nussinov_fold(&candidate);
        Ok(predicted.base_pair_distance(&self.target)?)
    }
}

impl FoldingBackend for NussinovBackend {
    fn execute(&mut self, start: &NucleotideSequence) -> Result<FoldOutcome, BackendError> {
        let free = start.wildcard_positions();
        let mut symbols: Vec<char> = start.symbols().collect();

        for &i in &free {
            let partner_base = self.target.partner(i).map(|j| symbols[j]);
            symbols[i] = match partner_base.and_then(rna_partners) {
                Some(partners) => self.pick(partners),
                None => self.random_base(),
            };
        }

        let mut best_distance = self.distance_to_target(&symbols)?;
        for _ in 0..CLIMB_PASSES {
            if best_distance == 0 || free.is_empty() {
                break;
            }
            let mut improved = false;
            for &i in &free {
                let mut best_base = symbols[i];
                for &base in &RNA_BASES {
                    if base == best_base {
                        continue;
                    }
                    symbols[i] = base;
                    let distance = self.distance_to_target(&symbols)?;
                    if distance < best_distance {
                        best_distance = distance;
                        best_base = base;
                        improved = true;
                    }
                }
                symbols[i] = best_base;
                if best_distance == 0 {
                    break;
                }
            }
            if !improved {
                // Kick one free position to leave the plateau.
                let i = free[self.rng.gen_range(0..free.len())];
                symbols[i] = self.random_base();
                best_distance = self.distance_to_target(&symbols)?;
            }
        }

        let candidate = NucleotideSequence::from_symbols(symbols);
        let hamming_distance = start.hamming_distance(&candidate)?;
        trace!(
            candidate = %candidate,
            structure_distance = best_distance,
            "local search finished"
        );
        Ok(FoldOutcome {
            candidate,
            hamming_distance,
            structure_distance: best_distance as f64,
        })
    }
}
