use std::collections::HashMap;
use thiserror::Error;

use super::backend::{BackendError, FoldingBackend};
use super::config::DesignConfig;

/// Constructs a backend for a given search configuration.
pub type BackendConstructor =
    Box<dyn Fn(&DesignConfig) -> Result<Box<dyn FoldingBackend>, BackendError>>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unknown backend '{name}'; available: {}", available.join(", "))]
    UnknownBackend { name: String, available: Vec<String> },

    #[error("backend '{name}' failed to construct: {source}")]
    Construction {
        name: String,
        #[source]
        source: BackendError,
    },
}

/// Explicit name-to-constructor registry for folding backends.
///
/// Populated by explicit [`register`](Self::register) calls at startup, so the
/// set of available backends never depends on static-initialization order.
#[derive(Default)]
pub struct BackendRegistry {
    constructors: HashMap<String, BackendConstructor>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, constructor: BackendConstructor) {
        self.constructors.insert(name.to_string(), constructor);
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn create(
        &self,
        name: &str,
        config: &DesignConfig,
    ) -> Result<Box<dyn FoldingBackend>, RegistryError> {
        let constructor =
            self.constructors
                .get(name)
                .ok_or_else(|| RegistryError::UnknownBackend {
                    name: name.to_string(),
                    available: self.names(),
                })?;
        constructor(config).map_err(|source| RegistryError::Construction {
            name: name.to_string(),
            source,
        })
    }
}
