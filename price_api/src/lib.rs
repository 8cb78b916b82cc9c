//! # Price API
//!
//! HTTP surface of the commodity price forecast service.
//!
//! Routes:
//! - `GET /` — service banner
//! - `GET /commodities` — commodity names in source row order
//! - `GET /forecast/{commodity}` — historical points, 60 months of
//!   forecasted points from the fixed 2025-01 origin, and the in-sample
//!   RMSE
//!
//! The series store is built once at startup and injected into handlers as
//! immutable shared state; a store that fails to load is a fatal startup
//! error, not a half-alive server. Each forecast request fits its model
//! fresh on the blocking pool under a configurable timeout.

pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::error::ApiError;
pub use crate::response::{ForecastPoint, ForecastResponse, HistoricalPoint};
pub use crate::routes::router;
pub use crate::state::AppState;
