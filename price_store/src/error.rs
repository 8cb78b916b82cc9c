//! Error types for the price_store crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the price_store crate
#[derive(Debug, Error)]
pub enum StoreError {
    /// Source table missing, unreadable, or malformed
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// Lookup for a commodity that is not in the store
    #[error("Unknown commodity: {0}")]
    UnknownCommodity(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    Polars(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<PolarsError> for StoreError {
    fn from(err: PolarsError) -> Self {
        StoreError::Polars(err.to_string())
    }
}
