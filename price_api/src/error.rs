//! Error-to-response mapping for the API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use price_forecast::EngineError;
use price_store::StoreError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::error;

/// Errors a request handler can surface
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error from the series store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Error from the forecast engine
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Model fit exceeded the configured bound
    #[error("Forecast timed out after {0:?}")]
    FitTimeout(Duration),

    /// The blocking fit task failed to run
    #[error("Forecast task failed: {0}")]
    Task(String),
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::UnknownCommodity(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
