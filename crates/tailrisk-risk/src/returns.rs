//! Price-to-return transforms and rolling volatility.
//!
//! Every transform returns a new series keyed by the source dates. Simple
//! and log returns are dated at the end of their interval; forward returns
//! are dated at the start, so they line up with a VaR forecast made on that
//! day.

use tailrisk_core::{PriceSeries, ReturnSeries, TimeSeries, VolatilitySeries};
use tailrisk_math::distributions::normal_quantile;
use tailrisk_math::statistics::sample_std_dev;

use crate::error::{check_confidence, RiskError, RiskResult};

/// Simple daily returns `(p[t] - p[t-1]) / p[t-1]`.
///
/// The result is one element shorter than `prices`.
pub fn daily_returns(prices: &PriceSeries) -> RiskResult<ReturnSeries> {
    interval_returns(prices, |prev, next| (next - prev) / prev)
}

/// Daily log returns `ln(p[t] / p[t-1])`.
pub fn log_returns(prices: &PriceSeries) -> RiskResult<ReturnSeries> {
    interval_returns(prices, |prev, next| (next / prev).ln())
}

fn interval_returns(prices: &PriceSeries, f: impl Fn(f64, f64) -> f64) -> RiskResult<ReturnSeries> {
    if prices.is_empty() {
        return Err(RiskError::empty_input("price series"));
    }
    let values = prices.values().windows(2).map(|w| f(w[0], w[1])).collect();
    Ok(TimeSeries::new(prices.dates()[1..].to_vec(), values)?)
}

/// Forward log returns `ln(p[t+h] / p[t])`, dated at `t`.
///
/// The last `horizon_days` observations have no forward price and are
/// dropped, so a horizon at least as long as the series gives an empty
/// result.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::{Date, PriceSeries};
/// use tailrisk_risk::returns::forward_log_returns;
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let prices = PriceSeries::new(vec![d(2), d(3), d(4)], vec![100.0, 110.0, 121.0]).unwrap();
/// let fwd = forward_log_returns(&prices, 2).unwrap();
/// assert_eq!(fwd.dates(), &[d(2)]);
/// assert!((fwd.values()[0] - 1.21_f64.ln()).abs() < 1e-12);
/// ```
pub fn forward_log_returns(prices: &PriceSeries, horizon_days: usize) -> RiskResult<ReturnSeries> {
    if horizon_days == 0 {
        return Err(RiskError::invalid_input("forward horizon must be at least one day"));
    }
    if prices.is_empty() {
        return Err(RiskError::empty_input("price series"));
    }
    let p = prices.values();
    if horizon_days >= p.len() {
        return Ok(TimeSeries::empty());
    }
    let keep = p.len() - horizon_days;
    let values = (0..keep).map(|t| (p[t + horizon_days] / p[t]).ln()).collect();
    Ok(TimeSeries::new(prices.dates()[..keep].to_vec(), values)?)
}

/// Trailing sample standard deviation over `window` observations.
///
/// The output has the same dates as `returns`; the first `window - 1`
/// values are `None` because the window is not yet full.
pub fn rolling_volatility(returns: &ReturnSeries, window: usize) -> RiskResult<VolatilitySeries> {
    if window < 2 {
        return Err(RiskError::invalid_input(format!(
            "rolling window must be at least 2, got {window}"
        )));
    }
    let r = returns.values();
    let mut values = Vec::with_capacity(r.len());
    for end in 1..=r.len() {
        values.push(if end < window {
            None
        } else {
            Some(sample_std_dev(&r[end - window..end])?)
        });
    }
    Ok(TimeSeries::new(returns.dates().to_vec(), values)?)
}

/// Parametric VaR threshold series `z * sqrt(h) * sigma`.
///
/// Undefined volatilities stay undefined. With the usual negative lower-tail
/// `z` the thresholds are negative returns.
pub fn parametric_var_series(
    volatility: &VolatilitySeries,
    z_score: f64,
    horizon_days: usize,
) -> VolatilitySeries {
    let scale = z_score * (horizon_days as f64).sqrt();
    volatility.map(|sigma| sigma.map(|s| scale * s))
}

/// Lower-tail standard normal quantile at `1 - confidence`.
///
/// `z_score(0.95)` is approximately `-1.645`.
pub fn z_score(confidence: f64) -> RiskResult<f64> {
    check_confidence(confidence)?;
    Ok(normal_quantile(1.0 - confidence)?)
}
