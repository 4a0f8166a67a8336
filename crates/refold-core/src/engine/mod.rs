//! # Engine Module
//!
//! This module implements the stateful search machinery for RNA inverse design.
//!
//! ## Overview
//!
//! The engine owns the start-sequence search: it keeps the set of sequences
//! already returned, the combination of positions currently left free, and the
//! retry/backtracking loop that keeps asking a folding backend for candidates
//! until a structurally acceptable, never-seen sequence appears.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Search parameters, built explicitly and
//!   passed into constructors; there is no process-wide configuration object
//! - **Error Handling** ([`error`]) - Engine-specific error types
//! - **Backend Adapter** ([`backend`]) - The interface a folding backend
//!   implements, plus the built-in implementations ([`backends`]) and their
//!   explicit name registry ([`registry`])
//! - **Start Providers** ([`provider`]) - Sources of the initial sequence
//! - **Search Driver** ([`search`]) - The `InverseFolder` backtracking loop
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//!
//! The engine is single-threaded by design: a driver instance exclusively owns
//! its found-set and combination state, and `fold_inverse` blocks until a new
//! distinct candidate exists.

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod progress;
pub mod provider;
pub mod registry;
pub mod search;
