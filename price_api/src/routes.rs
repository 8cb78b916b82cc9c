//! HTTP routes and request handlers

use crate::error::ApiError;
use crate::response::{self, ForecastResponse, FORECAST_HORIZON_MONTHS};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Body of the `GET /` banner
#[derive(Debug, Serialize, Deserialize)]
pub struct Banner {
    pub message: String,
}

/// Build the application router. CORS stays permissive: the browser
/// frontend is served from a different origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/commodities", get(list_commodities))
        .route("/forecast/:commodity", get(forecast_commodity))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Banner> {
    Json(Banner {
        message: "Welcome to the commodity price forecast API".to_string(),
    })
}

async fn list_commodities(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store.commodities().to_vec())
}

/// Fit the seasonal model to one commodity's history and return the
/// historical and forecasted segments together with the fit RMSE.
///
/// Fitting is CPU-bound, so it runs on the blocking pool, bounded by the
/// configured timeout. A timeout or any fitting failure fails the whole
/// request; partial responses are never returned.
async fn forecast_commodity(
    State(state): State<AppState>,
    Path(commodity): Path<String>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let series = state.store.series(&commodity)?;
    let values = series.values();

    let fit = tokio::task::spawn_blocking(move || {
        price_forecast::forecast_values(&values, FORECAST_HORIZON_MONTHS)
    });
    let outcome = tokio::time::timeout(state.fit_timeout, fit)
        .await
        .map_err(|_| ApiError::FitTimeout(state.fit_timeout))?
        .map_err(|e| ApiError::Task(e.to_string()))??;

    info!(
        commodity = %commodity,
        observations = series.len(),
        rmse = outcome.rmse,
        "forecast fitted"
    );

    Ok(Json(response::assemble(&series, &outcome)))
}
