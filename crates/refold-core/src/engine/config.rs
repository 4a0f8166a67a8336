use crate::core::models::structure::TargetStructure;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesignConfig {
    /// Target secondary structure; the engine itself only reads its length.
    pub target: TargetStructure,
    /// Inclusive upper bound a candidate's structure distance must satisfy.
    pub max_structure_distance: f64,
    /// How many positions may be free at once; the enumerator's subset size.
    pub max_sequence_distance: usize,
    /// Retry budget per active position combination.
    pub combination_attempts: usize,
}

#[derive(Default)]
pub struct DesignConfigBuilder {
    target: Option<TargetStructure>,
    max_structure_distance: Option<f64>,
    max_sequence_distance: Option<usize>,
    combination_attempts: Option<usize>,
}

impl DesignConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, structure: TargetStructure) -> Self {
        self.target = Some(structure);
        self
    }
    pub fn max_structure_distance(mut self, bound: f64) -> Self {
        self.max_structure_distance = Some(bound);
        self
    }
    pub fn max_sequence_distance(mut self, positions: usize) -> Self {
        self.max_sequence_distance = Some(positions);
        self
    }
    pub fn combination_attempts(mut self, attempts: usize) -> Self {
        self.combination_attempts = Some(attempts);
        self
    }

    pub fn build(self) -> Result<DesignConfig, ConfigError> {
        let combination_attempts = self
            .combination_attempts
            .ok_or(ConfigError::MissingParameter("combination_attempts"))?;
        if combination_attempts == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "combination_attempts",
                reason: "retry budget must be positive",
            });
        }
        Ok(DesignConfig {
            target: self.target.ok_or(ConfigError::MissingParameter("target"))?,
            max_structure_distance: self
                .max_structure_distance
                .ok_or(ConfigError::MissingParameter("max_structure_distance"))?,
            max_sequence_distance: self
                .max_sequence_distance
                .ok_or(ConfigError::MissingParameter("max_sequence_distance"))?,
            combination_attempts,
        })
    }
}
