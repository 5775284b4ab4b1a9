//! Error types for the arbitree generation engine.

use thiserror::Error;

/// Main error type for value generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArbitreeError {
    /// Invalid generator configuration, rejected at construction time.
    #[error("Invalid constraints: {message}")]
    InvalidConstraints { message: String },

    /// A filtered generator ran out of retry budget.
    #[error("Generator exhausted after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// A single-use generator was drawn from more than once.
    #[error("Single-use generator invoked more than once")]
    AlreadyConsumed,
}

/// Result type for arbitree operations.
pub type Result<T> = std::result::Result<T, ArbitreeError>;
