//! # Workflows Module
//!
//! High-level entry points tying the engine and core together.
//!
//! - **Design Workflow** ([`design`]) - Runs a complete inverse-design batch:
//!   obtains a start sequence from a provider, then collects a requested number
//!   of distinct designs from the search driver, reporting progress per design
//!   and recording per-design metrics.

pub mod design;
