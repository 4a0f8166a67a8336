use thiserror::Error;

use crate::core::combinatorics::combinations::CombinationError;
use crate::core::models::sequence::SequenceError;
use crate::engine::backend::BackendError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("sequence length {actual} does not meet the required length {required}")]
    LengthMismatch { actual: usize, required: usize },

    #[error(transparent)]
    Combination(#[from] CombinationError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("no start sequence has been set")]
    StartNotSet,

    #[error(transparent)]
    Backend(#[from] BackendError),
}
