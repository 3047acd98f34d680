//! Annualisation and the Sharpe ratio.

use serde::{Deserialize, Serialize};
use tailrisk_math::statistics::{mean, sample_std_dev};

use crate::error::{RiskError, RiskResult};

/// Scales a daily volatility to an annual one, `sigma * sqrt(td)`.
pub fn annualize_volatility(daily_volatility: f64, trading_days: u32) -> f64 {
    daily_volatility * f64::from(trading_days).sqrt()
}

/// Scales a mean daily return to an annual one, `r * td`.
pub fn annualize_return(daily_return: f64, trading_days: u32) -> f64 {
    daily_return * f64::from(trading_days)
}

/// Annualised Sharpe ratio of daily returns.
///
/// Excess returns are `r - risk_free_rate / trading_days`; the ratio is the
/// annualised mean excess return over the annualised sample volatility of
/// the excess returns.
///
/// # Errors
///
/// - `EmptyInput` for no returns
/// - `InsufficientData` for a single return
/// - `ZeroVariance` when the excess returns do not vary
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64, trading_days: u32) -> RiskResult<f64> {
    if returns.is_empty() {
        return Err(RiskError::empty_input("returns"));
    }
    if returns.len() < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            actual: returns.len(),
        });
    }
    if trading_days == 0 {
        return Err(RiskError::invalid_input("trading days per year must be positive"));
    }

    let daily_rf = risk_free_rate / f64::from(trading_days);
    let excess: Vec<f64> = returns.iter().map(|r| r - daily_rf).collect();

    let annual_return = annualize_return(mean(&excess)?, trading_days);
    let annual_vol = annualize_volatility(sample_std_dev(&excess)?, trading_days);
    if annual_vol == 0.0 {
        return Err(RiskError::zero_variance("sharpe ratio"));
    }
    Ok(annual_return / annual_vol)
}

/// Annualised return, volatility and Sharpe ratio of a return sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Number of daily returns.
    pub observations: usize,
    /// Mean daily return times trading days.
    pub annualized_return: f64,
    /// Daily sample volatility times the square root of trading days.
    pub annualized_volatility: f64,
    /// Annualised Sharpe ratio against the configured risk-free rate.
    pub sharpe_ratio: f64,
}

/// Computes a [`PerformanceSummary`] with the same preconditions as
/// [`sharpe_ratio`].
pub fn performance_summary(
    returns: &[f64],
    risk_free_rate: f64,
    trading_days: u32,
) -> RiskResult<PerformanceSummary> {
    let sharpe = sharpe_ratio(returns, risk_free_rate, trading_days)?;
    Ok(PerformanceSummary {
        observations: returns.len(),
        annualized_return: annualize_return(mean(returns)?, trading_days),
        annualized_volatility: annualize_volatility(sample_std_dev(returns)?, trading_days),
        sharpe_ratio: sharpe,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annualize() {
        assert_relative_eq!(annualize_return(0.01, 252), 2.52, epsilon = 1e-12);
        assert_relative_eq!(
            annualize_volatility(0.02, 252),
            0.02 * 252.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sharpe_ratio() {
        let returns = [0.01, -0.005, 0.003, 0.007, -0.002];
        let rf = 0.02;
        let daily_rf = rf / 252.0;
        let excess: Vec<f64> = returns.iter().map(|r| r - daily_rf).collect();
        let mu = excess.iter().sum::<f64>() / 5.0;
        let var = excess.iter().map(|e| (e - mu).powi(2)).sum::<f64>() / 4.0;
        let expected = mu * 252.0 / (var.sqrt() * 252.0_f64.sqrt());
        assert_relative_eq!(sharpe_ratio(&returns, rf, 252).unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_sharpe_zero_variance() {
        assert!(matches!(
            sharpe_ratio(&[0.0; 10], 0.02, 252),
            Err(RiskError::ZeroVariance { .. })
        ));
    }

    #[test]
    fn test_sharpe_degenerate_inputs() {
        assert!(matches!(
            sharpe_ratio(&[], 0.02, 252),
            Err(RiskError::EmptyInput { .. })
        ));
        assert!(matches!(
            sharpe_ratio(&[0.01], 0.02, 252),
            Err(RiskError::InsufficientData { .. })
        ));
        assert!(matches!(
            sharpe_ratio(&[0.01, 0.02], 0.02, 0),
            Err(RiskError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_performance_summary() {
        let returns = [0.01, -0.005, 0.003, 0.007, -0.002];
        let summary = performance_summary(&returns, 0.0, 252).unwrap();
        assert_eq!(summary.observations, 5);
        assert_relative_eq!(summary.annualized_return, 0.013 / 5.0 * 252.0, epsilon = 1e-12);
        assert_relative_eq!(
            summary.sharpe_ratio,
            summary.annualized_return / summary.annualized_volatility,
            epsilon = 1e-9
        );
    }
}
