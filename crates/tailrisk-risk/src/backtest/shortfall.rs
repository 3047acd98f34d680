//! Expected shortfall (conditional VaR).

use tailrisk_math::statistics::percentile;

use crate::error::{check_confidence, RiskError, RiskResult};

/// Average loss on the days at or beyond the VaR quantile.
///
/// The threshold is the signed `(1 - c) * 100`-th percentile of `returns`;
/// the result is the negated mean of every return at or below it, so a
/// loss-making tail gives a positive number. An empty tail gives 0.
pub fn expected_shortfall(returns: &[f64], confidence: f64) -> RiskResult<f64> {
    if returns.is_empty() {
        return Err(RiskError::empty_input("returns"));
    }
    check_confidence(confidence)?;

    let threshold = percentile(returns, (1.0 - confidence) * 100.0)?;
    let (sum, count) = returns
        .iter()
        .filter(|&&r| r <= threshold)
        .fold((0.0, 0usize), |(s, c), &r| (s + r, c + 1));

    if count == 0 {
        return Ok(0.0);
    }
    Ok(-(sum / count as f64))
}
