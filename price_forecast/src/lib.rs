//! # Price Forecast
//!
//! Seasonal ARIMA forecasting for monthly commodity price series.
//!
//! The engine fits a fixed SARIMA(1,1,1)(1,1,0)[12] specification to one
//! series per request — estimation by conditional maximum likelihood with a
//! deterministic coordinate search — and produces point forecasts plus an
//! in-sample RMSE. Nothing is cached or shared between fits; every call
//! repeats the full estimation.
//!
//! Determinism: the same input series always yields the same coefficients
//! and forecasts. Small numeric drift against other implementations of the
//! same model class is expected and is not a defect.
//!
//! ## Quick Start
//!
//! ```
//! use price_forecast::forecast_values;
//!
//! # fn main() -> price_forecast::Result<()> {
//! let series: Vec<f64> = (0..48)
//!     .map(|i| 100.0 + i as f64 + 5.0 * (i as f64 * 0.7).sin())
//!     .collect();
//!
//! let outcome = forecast_values(&series, 60)?;
//! assert_eq!(outcome.forecast.len(), 60);
//! assert!(outcome.rmse >= 0.0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod metrics;
pub mod models;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{EngineError, Result};
pub use crate::models::seasonal_arima::{FittedSeasonalArima, SeasonalArima, MIN_OBSERVATIONS};
pub use crate::models::{FittedForecastModel, ForecastModel};

/// Everything a forecast request needs from one fit: the point forecasts,
/// the in-sample fitted values aligned with the input series, and the fit
/// RMSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastOutcome {
    /// Point forecasts, one per future month
    pub forecast: Vec<f64>,
    /// One-step in-sample fitted values, aligned one-to-one with the input
    pub fitted_values: Vec<Option<f64>>,
    /// RMSE between the input and the fitted values, where both exist
    pub rmse: f64,
}

/// Fit the fixed monthly model to `values` and forecast `horizon` months.
///
/// Fitting and forecasting happen fresh on every call; a failure at any
/// stage surfaces as an error with no partial result.
pub fn forecast_values(values: &[f64], horizon: usize) -> Result<ForecastOutcome> {
    let fitted = SeasonalArima::monthly().fit(values)?;
    let forecast = fitted.forecast(horizon)?;

    let rmse = metrics::fit_rmse(values, fitted.fitted_values());
    if !rmse.is_finite() {
        return Err(EngineError::Fit(
            "In-sample RMSE is not finite".to_string(),
        ));
    }

    Ok(ForecastOutcome {
        forecast,
        fitted_values: fitted.fitted_values().to_vec(),
        rmse,
    })
}
