//! # Combinatorics Module
//!
//! Deterministic enumeration of k-sized position subsets. The search engine uses
//! this to decide which sequence positions are left free for the backend to vary,
//! and relies on the enumerator's cyclic semantics to keep backtracking forever
//! instead of running out of subsets.

pub mod combinations;
