//! Error types for the price_forecast crate

use thiserror::Error;

/// Custom error types for the price_forecast crate
#[derive(Debug, Error)]
pub enum EngineError {
    /// Series too short to estimate the configured model order
    #[error("Insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Numerical fitting failure: degenerate input, non-finite values, or a
    /// solver that did not converge
    #[error("Fit error: {0}")]
    Fit(String),

    /// Error from invalid arguments
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, EngineError>;
