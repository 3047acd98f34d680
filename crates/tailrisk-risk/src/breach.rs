//! VaR breach detection.
//!
//! A breach is a day on which the realised return fell below the VaR
//! threshold *and* was a loss. Thresholds are signed returns (negative for
//! the usual lower-tail VaR), as produced by
//! [`parametric_var_series`](crate::returns::parametric_var_series).

use serde::{Deserialize, Serialize};
use tailrisk_core::{BreachSeries, ReturnSeries, TimeSeries};

use crate::error::{RiskError, RiskResult};

/// Flags each date where `return < threshold` and `return < 0`.
///
/// Both series must carry the same dates. Mismatched indices are an error
/// rather than being silently truncated; align first with
/// [`TimeSeries::inner_join`].
pub fn detect_breaches(returns: &ReturnSeries, thresholds: &TimeSeries<f64>) -> RiskResult<BreachSeries> {
    if returns.len() != thresholds.len() {
        return Err(RiskError::Misaligned {
            reason: format!(
                "{} returns against {} thresholds",
                returns.len(),
                thresholds.len()
            ),
        });
    }
    if let Some((date, _)) = returns
        .dates()
        .iter()
        .zip(thresholds.dates())
        .find(|(a, b)| a != b)
    {
        return Err(RiskError::Misaligned {
            reason: format!("dates diverge at {date}"),
        });
    }

    let flags = returns
        .values()
        .iter()
        .zip(thresholds.values())
        .map(|(&r, &v)| r < v && r < 0.0)
        .collect();
    Ok(TimeSeries::new(returns.dates().to_vec(), flags)?)
}

/// Count and frequency of breaches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreachSummary {
    /// Number of breach days.
    pub count: usize,
    /// Breach frequency, rounded to three decimals.
    pub rate: f64,
}

/// Summarises a breach flag sequence.
pub fn summarize_breaches(flags: &[bool]) -> RiskResult<BreachSummary> {
    if flags.is_empty() {
        return Err(RiskError::empty_input("breach flags"));
    }
    let count = flags.iter().filter(|&&b| b).count();
    let rate = count as f64 / flags.len() as f64;
    Ok(BreachSummary {
        count,
        rate: (rate * 1_000.0).round() / 1_000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailrisk_core::Date;

    fn d(day: u32) -> Date {
        Date::from_ymd(2024, 3, day).unwrap()
    }

    #[test]
    fn test_detect_breaches() {
        let returns = TimeSeries::new(vec![d(1), d(4), d(5)], vec![0.05, -0.10, -0.02]).unwrap();
        let var = TimeSeries::new(vec![d(1), d(4), d(5)], vec![-0.01, -0.05, -0.05]).unwrap();
        let breaches = detect_breaches(&returns, &var).unwrap();
        assert_eq!(breaches.values(), &[false, true, false]);
        assert_eq!(breaches.dates(), returns.dates());

        let summary = summarize_breaches(breaches.values()).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.rate, 0.333);
    }

    #[test]
    fn test_positive_return_below_threshold_is_not_a_breach() {
        let returns = TimeSeries::new(vec![d(1)], vec![0.01]).unwrap();
        let var = TimeSeries::new(vec![d(1)], vec![0.02]).unwrap();
        assert_eq!(detect_breaches(&returns, &var).unwrap().values(), &[false]);
    }

    #[test]
    fn test_misaligned_lengths() {
        let returns = TimeSeries::new(vec![d(1), d(4)], vec![0.05, -0.10]).unwrap();
        let var = TimeSeries::new(vec![d(1)], vec![-0.01]).unwrap();
        assert!(matches!(
            detect_breaches(&returns, &var),
            Err(RiskError::Misaligned { .. })
        ));
    }

    #[test]
    fn test_misaligned_dates() {
        let returns = TimeSeries::new(vec![d(1), d(4)], vec![0.05, -0.10]).unwrap();
        let var = TimeSeries::new(vec![d(1), d(5)], vec![-0.01, -0.05]).unwrap();
        let err = detect_breaches(&returns, &var).unwrap_err();
        assert!(err.to_string().contains("2024-03-04"));

        let (r, v) = returns.inner_join(&var);
        assert_eq!(detect_breaches(&r, &v).unwrap().values(), &[false]);
    }

    #[test]
    fn test_summary_extremes() {
        assert_eq!(
            summarize_breaches(&[false; 4]).unwrap(),
            BreachSummary { count: 0, rate: 0.0 }
        );
        assert_eq!(
            summarize_breaches(&[true; 4]).unwrap(),
            BreachSummary { count: 4, rate: 1.0 }
        );
        assert!(matches!(
            summarize_breaches(&[]),
            Err(RiskError::EmptyInput { .. })
        ));
    }
}
