//! VaR backtesting.
//!
//! Statistical tests over a breach flag sequence:
//!
//! - **Kupiec POF**: is the breach frequency consistent with `1 - c`?
//! - **Christoffersen**: are breaches serially independent?
//! - **Conditional coverage**: both at once, `LR_cc = LR_pof + LR_ind`
//!
//! plus expected shortfall, the average loss beyond the VaR quantile.

mod christoffersen;
mod kupiec;
mod shortfall;

pub use christoffersen::*;
pub use kupiec::*;
pub use shortfall::*;

use serde::{Deserialize, Serialize};
use tailrisk_math::distributions::chi_squared_sf;

use crate::breach::{summarize_breaches, BreachSummary};
use crate::error::RiskResult;

/// Outcome of the joint coverage and independence test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionalCoverageResult {
    /// Kupiec statistic.
    pub lr_pof: f64,
    /// Christoffersen independence statistic.
    pub lr_ind: f64,
    /// Combined statistic, chi-squared with two degrees of freedom.
    pub lr: f64,
    /// Upper-tail probability of `lr`.
    pub p_value: f64,
}

/// Christoffersen conditional coverage test.
///
/// Undefined whenever the Kupiec statistic is (no breaches or all
/// breaches), in which case `lr` and `p_value` are NaN.
pub fn conditional_coverage_test(
    breaches: &[bool],
    confidence: f64,
) -> RiskResult<ConditionalCoverageResult> {
    let kupiec = kupiec_pof_test(breaches, confidence)?;
    let independence = christoffersen_independence_test(breaches)?;
    Ok(combine(&kupiec, &independence)?)
}

fn combine(
    kupiec: &KupiecResult,
    independence: &ChristoffersenResult,
) -> tailrisk_math::MathResult<ConditionalCoverageResult> {
    let lr = kupiec.lr + independence.lr;
    Ok(ConditionalCoverageResult {
        lr_pof: kupiec.lr,
        lr_ind: independence.lr,
        lr,
        p_value: chi_squared_sf(lr, 2.0)?,
    })
}

/// Every backtest statistic for one breach sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarBacktest {
    /// Confidence level the VaR forecasts were made at.
    pub confidence_level: f64,
    /// Breach count and rate.
    pub summary: BreachSummary,
    /// Unconditional coverage.
    pub kupiec: KupiecResult,
    /// Serial independence.
    pub christoffersen: ChristoffersenResult,
    /// Joint test.
    pub conditional_coverage: ConditionalCoverageResult,
}

impl VarBacktest {
    /// Returns true if no defined test rejects at `significance`.
    ///
    /// NaN p-values do not count as rejections.
    pub fn passes(&self, significance: f64) -> bool {
        [
            self.kupiec.p_value,
            self.christoffersen.p_value,
            self.conditional_coverage.p_value,
        ]
        .iter()
        .all(|p| p.is_nan() || *p >= significance)
    }
}

/// Runs the summary, Kupiec, Christoffersen and conditional coverage tests.
///
/// # Errors
///
/// `EmptyInput` for an empty sequence, `InsufficientData` for a single
/// observation, `InvalidInput` for a confidence outside (0, 1).
pub fn run_backtest(breaches: &[bool], confidence: f64) -> RiskResult<VarBacktest> {
    let summary = summarize_breaches(breaches)?;
    let kupiec = kupiec_pof_test(breaches, confidence)?;
    let christoffersen = christoffersen_independence_test(breaches)?;
    let conditional_coverage = combine(&kupiec, &christoffersen)?;
    log::debug!(
        "backtest over {} days: {} breaches, Kupiec p={:.4}, independence p={:.4}",
        breaches.len(),
        summary.count,
        kupiec.p_value,
        christoffersen.p_value
    );
    Ok(VarBacktest {
        confidence_level: confidence,
        summary,
        kupiec,
        christoffersen,
        conditional_coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiskError;
    use approx::assert_relative_eq;

    fn spread_breaches(n: usize, every: usize) -> Vec<bool> {
        (0..n).map(|i| i % every == every - 1).collect()
    }

    #[test]
    fn test_conditional_coverage_is_sum() {
        let breaches = spread_breaches(200, 20);
        let kupiec = kupiec_pof_test(&breaches, 0.95).unwrap();
        let ind = christoffersen_independence_test(&breaches).unwrap();
        let cc = conditional_coverage_test(&breaches, 0.95).unwrap();
        assert_relative_eq!(cc.lr, kupiec.lr + ind.lr, epsilon = 1e-12);
        assert!(cc.p_value > 0.0 && cc.p_value <= 1.0);
    }

    #[test]
    fn test_conditional_coverage_nan_without_breaches() {
        let cc = conditional_coverage_test(&[false; 50], 0.95).unwrap();
        assert!(cc.lr_pof.is_nan());
        assert!(cc.lr.is_nan());
        assert!(cc.p_value.is_nan());
    }

    #[test]
    fn test_run_backtest() {
        let breaches = spread_breaches(100, 20);
        let report = run_backtest(&breaches, 0.95).unwrap();
        assert_eq!(report.summary.count, 5);
        assert_eq!(report.summary.rate, 0.05);
        assert_eq!(report.kupiec.x, 5);
        assert_eq!(report.christoffersen.counts.n11, 0);
        assert!(report.passes(0.05));
    }

    #[test]
    fn test_run_backtest_errors() {
        assert!(matches!(
            run_backtest(&[], 0.95),
            Err(RiskError::EmptyInput { .. })
        ));
        assert!(matches!(
            run_backtest(&[true], 0.95),
            Err(RiskError::InsufficientData { .. })
        ));
    }
}
