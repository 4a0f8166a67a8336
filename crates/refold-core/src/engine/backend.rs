use crate::core::models::sequence::NucleotideSequence;

/// Opaque adapter failure. The engine propagates these without interpretation.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One backend proposal for a given start sequence.
#[derive(Debug, Clone)]
pub struct FoldOutcome {
    /// Proposed sequence, same length as the start it was derived from.
    pub candidate: NucleotideSequence,
    /// Positions changed relative to the start. Informational only; the search
    /// driver never uses it for acceptance.
    pub hamming_distance: usize,
    /// Backend-computed dissimilarity between the candidate's predicted structure
    /// and the target; compared with `<=` against the configured bound.
    pub structure_distance: f64,
}

/// A folding backend proposes candidate sequences for a start string whose free
/// positions carry the wildcard symbol.
///
/// Implementations may be stochastic and stateful, but must be synchronous and
/// must return a candidate of the same length as `start`. Any asynchrony (such
/// as driving an external program) stays internal to the implementation.
pub trait FoldingBackend {
    fn execute(&mut self, start: &NucleotideSequence) -> Result<FoldOutcome, BackendError>;
}
