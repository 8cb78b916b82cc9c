//! Response records and assembly of historical + forecast segments

use chrono::NaiveDate;
use price_forecast::ForecastOutcome;
use price_store::{calendar, CommoditySeries};
use serde::{Deserialize, Serialize};

/// Number of months covered by every forecast (five years)
pub const FORECAST_HORIZON_MONTHS: usize = 60;

/// Fixed first forecast month: 2025-01. The forecast calendar does not
/// continue the historical tail; callers depend on this exact offset.
pub const FORECAST_ORIGIN_YEAR: i32 = 2025;
pub const FORECAST_ORIGIN_MONTH: u32 = 1;

/// One observed point of the historical segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One predicted point of the forecast segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub forecast: f64,
}

/// Externally visible forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub historical: Vec<HistoricalPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub rmse: f64,
}

/// Month-end dates of the fixed forecast calendar
pub fn forecast_dates(horizon: usize) -> Vec<NaiveDate> {
    calendar::month_ends(FORECAST_ORIGIN_YEAR, FORECAST_ORIGIN_MONTH, horizon)
}

/// Zip the historical series and the forecast outcome into the response
/// shape. Lengths match their sources exactly; values pass through as
/// computed, with no rounding or unit conversion.
pub fn assemble(series: &CommoditySeries, outcome: &ForecastOutcome) -> ForecastResponse {
    let historical = series
        .points()
        .iter()
        .map(|(date, value)| HistoricalPoint {
            date: *date,
            value: *value,
        })
        .collect();

    let forecast = forecast_dates(outcome.forecast.len())
        .into_iter()
        .zip(outcome.forecast.iter())
        .map(|(date, forecast)| ForecastPoint {
            date,
            forecast: *forecast,
        })
        .collect();

    ForecastResponse {
        historical,
        forecast,
        rmse: outcome.rmse,
    }
}
