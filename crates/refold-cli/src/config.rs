use crate::cli::DesignArgs;
use crate::error::{CliError, Result};
use refold::core::models::structure::TargetStructure;
use refold::engine::config::{DesignConfig, DesignConfigBuilder};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_BACKEND: &str = "nussinov";
const DEFAULT_COUNT: usize = 1;
const DEFAULT_MAX_STRUCTURE_DISTANCE: f64 = 0.0;
const DEFAULT_MAX_SEQUENCE_DISTANCE: usize = 2;
const DEFAULT_COMBINATION_ATTEMPTS: usize = 10;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub backend: BackendSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SearchSection {
    pub count: Option<usize>,
    pub max_structure_distance: Option<f64>,
    pub max_sequence_distance: Option<usize>,
    pub combination_attempts: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BackendSection {
    pub name: Option<String>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("failed to parse '{}': {e}", path.display()))
        })
    }
}

/// Fully merged design run parameters: CLI overrides beat the config file,
/// which beats the built-in defaults.
pub struct ResolvedDesign {
    pub config: DesignConfig,
    pub count: usize,
    pub backend: String,
    pub seed: Option<u64>,
}

pub fn resolve(args: &DesignArgs, file: FileConfig, target: TargetStructure) -> Result<ResolvedDesign> {
    let config = DesignConfigBuilder::new()
        .target(target)
        .max_structure_distance(
            args.max_structure_distance
                .or(file.search.max_structure_distance)
                .unwrap_or(DEFAULT_MAX_STRUCTURE_DISTANCE),
        )
        .max_sequence_distance(
            args.max_sequence_distance
                .or(file.search.max_sequence_distance)
                .unwrap_or(DEFAULT_MAX_SEQUENCE_DISTANCE),
        )
        .combination_attempts(
            args.attempts
                .or(file.search.combination_attempts)
                .unwrap_or(DEFAULT_COMBINATION_ATTEMPTS),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(ResolvedDesign {
        config,
        count: args.count.or(file.search.count).unwrap_or(DEFAULT_COUNT),
        backend: args
            .backend
            .clone()
            .or(file.backend.name)
            .unwrap_or_else(|| DEFAULT_BACKEND.to_string()),
        seed: args.seed.or(file.backend.seed),
    })
}
