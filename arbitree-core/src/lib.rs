//! Core generation and shrinking engine for arbitree.
//!
//! This crate provides the building blocks a property-based test runner
//! consumes: seeded random sources, generators of values paired with lazy,
//! restartable shrink trees, and combinators for bounded and
//! uniqueness-constrained sequences.

pub mod data;
pub mod error;
pub mod fixture;
pub mod gen;
pub mod lazy;
pub mod tree;
pub mod unique;
pub mod vec;

// Re-export the main types
pub use data::*;
pub use error::*;
pub use gen::*;
pub use lazy::*;
pub use tree::*;
pub use unique::*;
