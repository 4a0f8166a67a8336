use refold::core::models::sequence::SequenceError;
use refold::core::models::structure::StructureError;
use refold::engine::error::EngineError;
use refold::engine::registry::RegistryError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid target structure: {0}")]
    Structure(#[from] StructureError),

    #[error("Invalid start sequence: {0}")]
    Sequence(#[from] SequenceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
