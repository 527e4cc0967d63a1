//! Error types for meta-analysis
//!
//! Provides a unified error type for all meta-sensitivity crates.

use thiserror::Error;

/// Core error type for meta-analytic operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} studies, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A study carries a sampling variance that cannot be used as a weight
    #[error("Invalid variance: study {index} has variance {variance}, expected a finite value > 0")]
    InvalidVariance { index: usize, variance: f64 },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values produced by a computation
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for NaN/Inf values supplied by the caller
    pub fn non_finite_input(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error was raised by input validation rather than by a computation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_)
                | Self::InvalidInput(_)
                | Self::InsufficientData { .. }
                | Self::InvalidVariance { .. }
        )
    }
}
