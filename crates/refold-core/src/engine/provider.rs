use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::models::sequence::{NucleotideSequence, RNA_BASES, WILDCARD};
use super::error::EngineError;
use super::search::InverseFolder;

/// Which provider operation `query_start` dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRequest {
    Partial,
    Complete,
}

/// Supplies the initial sequence once, at setup.
///
/// Each operation must call [`InverseFolder::set_start`] synchronously exactly
/// once before returning; the driver then validates that the supplied sequence's
/// length equals the target structure's length.
pub trait StartProvider {
    /// Supplies a start derived from a partially specified sequence.
    fn get_partial_start(&mut self, engine: &mut InverseFolder) -> Result<(), EngineError>;

    /// Supplies a fully specified start.
    fn get_complete_start(&mut self, engine: &mut InverseFolder) -> Result<(), EngineError>;
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Draws a uniformly random start of the target structure's length.
pub struct RandomStartProvider {
    rng: StdRng,
}

impl RandomStartProvider {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl StartProvider for RandomStartProvider {
    fn get_partial_start(&mut self, engine: &mut InverseFolder) -> Result<(), EngineError> {
        // Nothing is constrained, so a partial start degenerates to a complete one.
        self.get_complete_start(engine)
    }

    fn get_complete_start(&mut self, engine: &mut InverseFolder) -> Result<(), EngineError> {
        let length = engine.config().target.len();
        let symbols: String = (0..length)
            .map(|_| RNA_BASES[self.rng.gen_range(0..RNA_BASES.len())])
            .collect();
        engine.set_start(&symbols)
    }
}

/// Supplies a caller-provided template, optionally filling its wildcards.
pub struct TemplateStartProvider {
    template: NucleotideSequence,
    rng: StdRng,
}

impl TemplateStartProvider {
    pub fn new(template: NucleotideSequence, seed: Option<u64>) -> Self {
        Self {
            template,
            rng: seeded_rng(seed),
        }
    }
}

impl StartProvider for TemplateStartProvider {
    fn get_partial_start(&mut self, engine: &mut InverseFolder) -> Result<(), EngineError> {
        let symbols: String = self
            .template
            .symbols()
            .map(|s| {
                if s == WILDCARD {
                    RNA_BASES[self.rng.gen_range(0..RNA_BASES.len())]
                } else {
                    s
                }
            })
            .collect();
        engine.set_start(&symbols)
    }

    fn get_complete_start(&mut self, engine: &mut InverseFolder) -> Result<(), EngineError> {
        engine.set_start(self.template.as_str())
    }
}
