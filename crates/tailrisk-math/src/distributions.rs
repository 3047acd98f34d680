//! Closed-form distribution functions.
//!
//! Thin wrappers over `statrs` that validate arguments and translate
//! construction failures into [`MathError`].

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

use crate::error::{MathError, MathResult};

/// Inverse CDF of the standard normal distribution.
///
/// `normal_quantile(0.05)` is approximately `-1.6449`.
pub fn normal_quantile(p: f64) -> MathResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(MathError::invalid_input(format!(
            "probability must be in (0, 1), got {p}"
        )));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| MathError::invalid_input(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

/// Upper-tail probability `P[X > x]` of a chi-squared variable with
/// `degrees_of_freedom` degrees of freedom.
///
/// NaN propagates: a NaN statistic yields a NaN p-value. Negative
/// statistics have probability one.
pub fn chi_squared_sf(x: f64, degrees_of_freedom: f64) -> MathResult<f64> {
    let dist = ChiSquared::new(degrees_of_freedom)
        .map_err(|e| MathError::invalid_input(e.to_string()))?;
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    if x <= 0.0 {
        return Ok(1.0);
    }
    Ok(1.0 - dist.cdf(x))
}
