//! Error types for logdensity

use thiserror::Error;

/// logdensity error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Argument outside the mathematical domain of a special function
    #[error("Domain error: {0}")]
    Domain(String),

    /// Paired sequence arguments of different lengths
    #[error("Size mismatch: {0}")]
    SizeMismatch(String),

    /// Empty sequence where at least one element is required
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Argument rejected by the validation layer before computing a density
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
