//! # Core Module
//!
//! This module provides the fundamental building blocks for RNA inverse design,
//! serving as the stateless computational core of the library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Data Models** ([`models`]) - Nucleotide sequences and dot-bracket secondary
//!   structures, with validation and comparison operations
//! - **Combinatorics** ([`combinatorics`]) - Cyclic enumeration of k-sized position
//!   subsets, driving the free-position backtracking of the search engine
//! - **Structure Prediction** ([`folding`]) - Maximum base-pairing prediction used
//!   by the built-in folding backends
//!
//! ## Key Capabilities
//!
//! - **Canonical sequence handling** over the `acgu` alphabet with the `n` wildcard
//! - **Dot-bracket parsing** with pair-table construction and base-pair distance
//! - **Deterministic subset enumeration** with exact-period cycling semantics

pub mod combinatorics;
pub mod folding;
pub mod models;
