//! Arbitree: shrinkable random value generation.
//!
//! This is the main entry point for the arbitree library, re-exporting
//! the generation and shrinking engine from `arbitree-core`.

pub use arbitree_core::*;
