//! Seasonal ARIMA model for monthly price series
//!
//! The model order is a fixed configuration constant: non-seasonal
//! (p=1, d=1, q=1), seasonal (P=1, D=1, Q=0) with a 12-month period. One
//! order for every commodity is a deliberate simplification; nothing here
//! adapts the order to the input series.

use crate::error::{EngineError, Result};
use crate::models::{FittedForecastModel, ForecastModel};

/// Months per seasonal cycle
pub const SEASONAL_PERIOD: usize = 12;

/// Minimum series length to estimate the fixed order:
/// p + d + q + period * (P + D + Q) + 1, a bit over two seasonal cycles.
pub const MIN_OBSERVATIONS: usize = 1 + 1 + 1 + SEASONAL_PERIOD * (1 + 1) + 1;

/// Observations consumed by differencing (d + period * D); one-step
/// predictions exist only after this prefix.
const WARMUP: usize = 1 + SEASONAL_PERIOD;

/// Stationarity/invertibility bound for the searched coefficients
const COEFF_BOUND: f64 = 0.98;

const MAX_SWEEPS: usize = 40;
const CONVERGENCE_TOL: f64 = 1e-10;

/// Seasonal ARIMA(1,1,1)(1,1,0)[12] specification.
#[derive(Debug, Clone)]
pub struct SeasonalArima {
    name: String,
}

impl SeasonalArima {
    /// The fixed monthly specification used for every commodity
    pub fn monthly() -> Self {
        Self {
            name: "SARIMA(1,1,1)(1,1,0)[12]".to_string(),
        }
    }
}

impl Default for SeasonalArima {
    fn default() -> Self {
        Self::monthly()
    }
}

/// Fitted seasonal ARIMA model for one series.
///
/// Holds the estimated coefficients together with the differenced history
/// and residuals needed to roll forecasts forward, and the in-sample
/// one-step fitted values on the original price scale.
#[derive(Debug, Clone)]
pub struct FittedSeasonalArima {
    name: String,
    /// Non-seasonal AR coefficient
    phi: f64,
    /// Non-seasonal MA coefficient
    theta: f64,
    /// Seasonal AR coefficient
    seasonal_phi: f64,
    /// Original series
    values: Vec<f64>,
    /// First-differenced series
    diffed: Vec<f64>,
    /// Seasonally differenced working series
    working: Vec<f64>,
    /// One-step residuals on the working series
    residuals: Vec<f64>,
    /// One-step predictions on the original scale, aligned with `values`
    fitted: Vec<Option<f64>>,
    residual_variance: f64,
    log_likelihood: f64,
}

impl ForecastModel for SeasonalArima {
    type Fitted = FittedSeasonalArima;

    fn fit(&self, values: &[f64]) -> Result<FittedSeasonalArima> {
        if values.len() < MIN_OBSERVATIONS {
            return Err(EngineError::InsufficientData {
                needed: MIN_OBSERVATIONS,
                got: values.len(),
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::Fit(
                "Series contains non-finite values".to_string(),
            ));
        }

        let first = values[0];
        if values.iter().all(|v| *v == first) {
            return Err(EngineError::Fit(
                "Degenerate all-constant series".to_string(),
            ));
        }

        let diffed = difference(values);
        let working = seasonal_difference(&diffed, SEASONAL_PERIOD);

        // Initialize from the Yule-Walker solution at lags 1 and 12, then
        // seed the MA coefficient with the lag-1 residual autocorrelation.
        let autocorr = autocorrelation(&working, SEASONAL_PERIOD);
        let phi = autocorr[1].clamp(-0.9, 0.9);
        let seasonal_phi = autocorr[SEASONAL_PERIOD].clamp(-0.9, 0.9);
        let (_, initial_residuals) = one_step(&working, phi, 0.0, seasonal_phi);
        let theta = autocorrelation(&initial_residuals, 1)[1].clamp(-0.9, 0.9);

        // Conditional maximum likelihood: minimize the conditional sum of
        // squares with a deterministic cyclic coordinate search.
        let mut params = [phi, theta, seasonal_phi];
        let mut best = conditional_sse(&working, params[0], params[1], params[2]);
        if !best.is_finite() {
            return Err(EngineError::Fit(
                "Sum of squares is not finite at the starting point".to_string(),
            ));
        }

        for _ in 0..MAX_SWEEPS {
            let before = best;
            for i in 0..params.len() {
                let objective = |x: f64| {
                    let mut candidate = params;
                    candidate[i] = x;
                    conditional_sse(&working, candidate[0], candidate[1], candidate[2])
                };
                let (x, sse) = golden_section_min(objective, -COEFF_BOUND, COEFF_BOUND);
                if sse < best {
                    params[i] = x;
                    best = sse;
                }
            }
            if before - best <= CONVERGENCE_TOL * (1.0 + best) {
                break;
            }
        }

        let [phi, theta, seasonal_phi] = params;
        let (predictions, residuals) = one_step(&working, phi, theta, seasonal_phi);

        let residual_variance = best / working.len() as f64;
        if !residual_variance.is_finite() {
            return Err(EngineError::Fit(
                "Fitting did not converge to a finite residual variance".to_string(),
            ));
        }
        let log_likelihood = gaussian_log_likelihood(residuals.len(), residual_variance, best);

        // Map one-step predictions back to the original scale by undoing the
        // seasonal and regular differences against observed history:
        // y_t = w_t + y_{t-1} + y_{t-12} - y_{t-13}.
        let mut fitted = vec![None; values.len()];
        for (t, prediction) in predictions.iter().enumerate() {
            let i = t + WARMUP;
            fitted[i] = Some(
                prediction + values[i - 1] + values[i - SEASONAL_PERIOD]
                    - values[i - SEASONAL_PERIOD - 1],
            );
        }

        Ok(FittedSeasonalArima {
            name: self.name.clone(),
            phi,
            theta,
            seasonal_phi,
            values: values.to_vec(),
            diffed,
            working,
            residuals,
            fitted,
            residual_variance,
            log_likelihood,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FittedForecastModel for FittedSeasonalArima {
    fn forecast(&self, horizon: usize) -> Result<Vec<f64>> {
        // Roll the working series forward with future innovations at zero
        let fitted_len = self.working.len();
        let mut working = self.working.clone();
        let mut residuals = self.residuals.clone();

        for _ in 0..horizon {
            let t = working.len();
            let mut step = self.phi * working[t - 1] + self.theta * residuals[t - 1];
            if t >= SEASONAL_PERIOD {
                step += self.seasonal_phi * working[t - SEASONAL_PERIOD];
            }
            if t >= SEASONAL_PERIOD + 1 {
                step -= self.phi * self.seasonal_phi * working[t - SEASONAL_PERIOD - 1];
            }
            working.push(step);
            residuals.push(0.0);
        }

        // Integrate back: first the seasonal difference onto the diffed
        // scale, then the regular difference onto the price scale.
        let mut diffed = self.diffed.clone();
        let mut prices = self.values.clone();
        for k in 0..horizon {
            let step = working[fitted_len + k] + diffed[diffed.len() - SEASONAL_PERIOD];
            diffed.push(step);
            prices.push(step + prices[prices.len() - 1]);
        }

        let forecast = prices[self.values.len()..].to_vec();
        if forecast.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::Fit(
                "Forecast produced non-finite values".to_string(),
            ));
        }

        Ok(forecast)
    }

    fn fitted_values(&self) -> &[Option<f64>] {
        &self.fitted
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FittedSeasonalArima {
    /// Estimated (phi, theta, seasonal phi)
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.phi, self.theta, self.seasonal_phi)
    }

    /// Variance of the one-step residuals on the differenced scale
    pub fn residual_variance(&self) -> f64 {
        self.residual_variance
    }

    /// Gaussian log-likelihood of the conditional fit
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }
}

/// First difference
fn difference(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Difference at the seasonal lag
fn seasonal_difference(values: &[f64], period: usize) -> Vec<f64> {
    values
        .iter()
        .skip(period)
        .zip(values.iter())
        .map(|(curr, prev)| curr - prev)
        .collect()
}

/// Sample autocorrelations for lags 0..=max_lag. A series with no variance
/// has no correlation structure to report; all lags come back zero.
fn autocorrelation(values: &[f64], max_lag: usize) -> Vec<f64> {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = values.iter().map(|v| v - mean).collect();

    let var = centered.iter().map(|v| v * v).sum::<f64>() / n as f64;
    if var.abs() < 1e-12 {
        return vec![0.0; max_lag + 1];
    }

    let mut autocorr = Vec::with_capacity(max_lag + 1);
    for lag in 0..=max_lag {
        if lag >= n {
            autocorr.push(0.0);
            continue;
        }
        let cov: f64 = centered
            .iter()
            .take(n - lag)
            .zip(centered.iter().skip(lag))
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / n as f64;
        autocorr.push(cov / var);
    }

    autocorr
}

/// One-step predictions and residuals of the multiplicative model
/// (1 - phi B)(1 - seasonal_phi B^12) w_t = (1 + theta B) e_t
/// on the working series, with unavailable lags treated as zero.
fn one_step(working: &[f64], phi: f64, theta: f64, seasonal_phi: f64) -> (Vec<f64>, Vec<f64>) {
    let mut predictions = Vec::with_capacity(working.len());
    let mut residuals: Vec<f64> = Vec::with_capacity(working.len());

    for t in 0..working.len() {
        let mut prediction = 0.0;
        if t >= 1 {
            prediction += phi * working[t - 1] + theta * residuals[t - 1];
        }
        if t >= SEASONAL_PERIOD {
            prediction += seasonal_phi * working[t - SEASONAL_PERIOD];
        }
        if t >= SEASONAL_PERIOD + 1 {
            prediction -= phi * seasonal_phi * working[t - SEASONAL_PERIOD - 1];
        }
        predictions.push(prediction);
        residuals.push(working[t] - prediction);
    }

    (predictions, residuals)
}

/// Conditional sum of squares of the model residuals
fn conditional_sse(working: &[f64], phi: f64, theta: f64, seasonal_phi: f64) -> f64 {
    let (_, residuals) = one_step(working, phi, theta, seasonal_phi);
    residuals.iter().map(|e| e * e).sum()
}

fn gaussian_log_likelihood(n: usize, variance: f64, sse: f64) -> f64 {
    if variance <= 0.0 {
        return f64::NEG_INFINITY;
    }
    let n = n as f64;
    -0.5 * n * (2.0 * std::f64::consts::PI).ln() - 0.5 * n * variance.ln() - sse / (2.0 * variance)
}

/// Golden-section minimization over [lo, hi]. A fixed iteration count keeps
/// the search fully deterministic.
fn golden_section_min<F: Fn(f64) -> f64>(objective: F, lo: f64, hi: f64) -> (f64, f64) {
    const INV_GOLDEN: f64 = 0.618_033_988_749_894_9;
    const ITERATIONS: usize = 64;

    let mut a = lo;
    let mut b = hi;
    let mut c = b - INV_GOLDEN * (b - a);
    let mut d = a + INV_GOLDEN * (b - a);
    let mut fc = objective(c);
    let mut fd = objective(d);

    for _ in 0..ITERATIONS {
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_GOLDEN * (b - a);
            fc = objective(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_GOLDEN * (b - a);
            fd = objective(d);
        }
    }

    let x = 0.5 * (a + b);
    (x, objective(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference() {
        let diff = difference(&[10.0, 12.0, 15.0, 14.0]);
        assert_eq!(diff, vec![2.0, 3.0, -1.0]);
    }

    #[test]
    fn test_seasonal_difference() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let diff = seasonal_difference(&values, 2);
        assert_eq!(diff, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_autocorrelation_lag_zero_is_one() {
        let values = vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0];
        let autocorr = autocorrelation(&values, 2);
        assert!((autocorr[0] - 1.0).abs() < 1e-12);
        assert!(autocorr[1].abs() <= 1.0);
    }

    #[test]
    fn test_golden_section_finds_parabola_minimum() {
        let (x, fx) = golden_section_min(|x| (x - 0.3).powi(2), -0.98, 0.98);
        assert!((x - 0.3).abs() < 1e-6);
        assert!(fx < 1e-10);
    }
}
