//! # Built-in Folding Backends
//!
//! Pure-Rust [`FoldingBackend`](crate::engine::backend::FoldingBackend)
//! implementations driven by the maximum-pairing predictor in
//! [`core::folding`](crate::core::folding). Both fill only the wildcard positions
//! of the start they are handed and score candidates by base-pair distance to the
//! target. Backends wrapping external folding programs implement the same trait
//! outside this crate and register themselves the same way.

mod nussinov;
mod random;

pub use nussinov::NussinovBackend;
pub use random::RandomFillBackend;

use super::registry::BackendRegistry;

/// Installs the built-in backends under their canonical names.
pub fn register_builtins(registry: &mut BackendRegistry, seed: Option<u64>) {
    registry.register(
        "nussinov",
        Box::new(move |config| Ok(Box::new(NussinovBackend::new(config.target.clone(), seed)))),
    );
    registry.register(
        "random-fill",
        Box::new(move |config| Ok(Box::new(RandomFillBackend::new(config.target.clone(), seed)))),
    );
}
