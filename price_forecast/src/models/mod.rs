//! Forecasting models for commodity price series

use crate::error::Result;
use std::fmt::Debug;

pub mod seasonal_arima;

/// Forecast model that can be fitted to a value series
pub trait ForecastModel: Debug + Clone {
    /// The type of fitted model produced
    type Fitted: FittedForecastModel;

    /// Fit the model to the series
    fn fit(&self, values: &[f64]) -> Result<Self::Fitted>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Fitted forecast model
pub trait FittedForecastModel: Debug {
    /// Generate point forecasts for future periods
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>>;

    /// In-sample one-step fitted values, aligned one-to-one with the input
    /// series. Entries in the differencing warm-up prefix are `None`.
    fn fitted_values(&self) -> &[Option<f64>];

    /// Name of the model
    fn name(&self) -> &str;
}
