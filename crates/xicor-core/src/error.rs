//! Error types for xi correlation analysis
//!
//! Provides a unified error type for all xicor crates.

use thiserror::Error;

/// Core error type for xi correlation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The two input sequences have different lengths
    #[error("Size mismatch: x has {x_len} values, y has {y_len}")]
    SizeMismatch { x_len: usize, y_len: usize },

    /// Unrecognized significance method name
    #[error("Invalid method: '{0}', expected 'asymptotic' or 'permutation'")]
    InvalidMethod(String),

    /// Significance requested from a configuration with `want_pvalue = false`
    #[error("P-value not requested: configuration has want_pvalue = false")]
    PvalueNotRequested,

    /// A variance denominator resolved to zero (or an unusable value)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Not enough usable pairs left after preprocessing
    #[error("Insufficient data: expected at least {expected} pairs, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// A permutation run was cancelled or ran past its deadline
    #[error("Cancelled: {completed} of {requested} trials completed")]
    Cancelled { completed: usize, requested: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for input sequences of unequal length
    pub fn size_mismatch(x_len: usize, y_len: usize) -> Self {
        Self::SizeMismatch { x_len, y_len }
    }

    /// Create an error for a zero-variance denominator
    pub fn degenerate(context: &str) -> Self {
        Self::DegenerateInput(format!("{context} is zero or not finite"))
    }

    /// Create an error for an unknown method name
    pub fn invalid_method(name: &str) -> Self {
        Self::InvalidMethod(name.to_string())
    }
}
