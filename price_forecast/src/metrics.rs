//! Fit-quality metrics for forecasting models

/// Mean absolute error between actual and predicted values. Returns NaN on
/// empty or mismatched inputs.
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// Mean squared error between actual and predicted values. Returns NaN on
/// empty or mismatched inputs.
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    sum / actual.len() as f64
}

/// Root mean squared error between actual and predicted values. Returns NaN
/// on empty or mismatched inputs.
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    mean_squared_error(actual, predicted).sqrt()
}

/// RMSE between a series and its in-sample fitted values, over every index
/// where a fitted value exists. Indices in the model's warm-up prefix carry
/// no prediction and are skipped.
pub fn fit_rmse(actual: &[f64], fitted: &[Option<f64>]) -> f64 {
    let (observed, predicted): (Vec<f64>, Vec<f64>) = actual
        .iter()
        .zip(fitted.iter().copied())
        .filter_map(|(a, f)| f.map(|f| (*a, f)))
        .unzip();

    root_mean_squared_error(&observed, &predicted)
}
