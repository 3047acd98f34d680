//! Descriptive statistics over `f64` samples.
//!
//! Variance and standard deviation use the unbiased (n - 1) denominator.
//! Percentiles use linear interpolation between order statistics: for
//! `q` in `[0, 100]` the rank is `q / 100 * (n - 1)` and the result
//! interpolates between the two neighbouring sorted values.

use crate::error::{MathError, MathResult};

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased sample variance.
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    // A constant sample has exactly zero dispersion; summing would leave rounding noise.
    if values.iter().all(|&v| v == values[0]) {
        return Ok(0.0);
    }
    let mu = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - mu).powi(2)).sum();
    Ok(ss / (values.len() - 1) as f64)
}

/// Unbiased sample standard deviation.
pub fn sample_std_dev(values: &[f64]) -> MathResult<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Returns an ascending copy of `values`.
///
/// NaNs compare as equal to everything, so callers are expected to pass
/// finite samples.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// `q`-th percentile (`q` in `[0, 100]`) of an unsorted sample.
pub fn percentile(values: &[f64], q: f64) -> MathResult<f64> {
    percentile_of_sorted(&sorted(values), q)
}

/// `q`-th percentile (`q` in `[0, 100]`) of an ascending sample.
pub fn percentile_of_sorted(sorted: &[f64], q: f64) -> MathResult<f64> {
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=100.0).contains(&q) {
        return Err(MathError::invalid_input(format!(
            "percentile must be within [0, 100], got {q}"
        )));
    }

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * weight)
}
