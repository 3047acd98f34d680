//! Parametric (variance-covariance) VaR.

use super::{location_scale, validate_inputs, VarEstimator, VarMethod};
use crate::error::RiskResult;
use crate::returns::z_score;

/// Calculate parametric VaR assuming normally distributed returns.
///
/// VaR = |mu + z * sigma|, where `z` is the standard normal quantile at
/// `1 - confidence_level` and `sigma` the sample standard deviation.
/// The quantile comes from the closed-form inverse CDF, so the result is
/// deterministic.
pub fn parametric_var(returns: &[f64], confidence_level: f64) -> RiskResult<f64> {
    validate_inputs(returns, confidence_level)?;
    let (mu, sigma) = location_scale(returns)?;
    let z = z_score(confidence_level)?;
    Ok((mu + z * sigma).abs())
}

/// Variance-covariance estimator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParametricVar;

impl VarEstimator for ParametricVar {
    fn method(&self) -> VarMethod {
        VarMethod::Parametric
    }

    fn estimate(&self, returns: &[f64], confidence: f64) -> RiskResult<f64> {
        parametric_var(returns, confidence)
    }
}
