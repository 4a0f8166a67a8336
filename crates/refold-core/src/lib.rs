//! # refold Core Library
//!
//! A library for RNA inverse design: given a target secondary structure, search for
//! nucleotide sequences whose predicted structure falls within a configurable distance
//! of the target, guaranteeing that no sequence is ever proposed twice.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`NucleotideSequence`, `TargetStructure`), pure combinatorics (the cyclic
//!   k-subset enumerator), and structure-prediction math used by the built-in
//!   backends.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the search.
//!   It owns the search configuration, the `InverseFolder` driver with its
//!   found-set and backtracking loop, the `FoldingBackend` adapter interface, and
//!   the explicit backend registry.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to execute complete design
//!   runs, producing a batch of distinct sequences with per-design metrics.

pub mod core;
pub mod engine;
pub mod workflows;
