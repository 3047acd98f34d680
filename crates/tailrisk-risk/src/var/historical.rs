//! Historical VaR calculation.

use tailrisk_math::statistics::percentile;

use super::{validate_inputs, VarEstimator, VarMethod};
use crate::error::RiskResult;

/// Calculate historical VaR from a series of returns.
///
/// # Arguments
///
/// * `returns` - Historical returns (as decimals, e.g., -0.01 for -1%)
/// * `confidence_level` - Confidence level (e.g., 0.95 for 95%)
///
/// # Returns
///
/// The absolute value of the linearly interpolated `(1 - c) * 100`-th
/// percentile of `returns`.
pub fn historical_var(returns: &[f64], confidence_level: f64) -> RiskResult<f64> {
    validate_inputs(returns, confidence_level)?;
    let quantile = percentile(returns, (1.0 - confidence_level) * 100.0)?;
    Ok(quantile.abs())
}

/// Historical simulation estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoricalVar;

impl VarEstimator for HistoricalVar {
    fn method(&self) -> VarMethod {
        VarMethod::Historical
    }

    fn estimate(&self, returns: &[f64], confidence: f64) -> RiskResult<f64> {
        historical_var(returns, confidence)
    }
}
