//! Risk calculation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Parameters consumed by the VaR estimators and backtests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// VaR confidence level (e.g. 0.95 for 95% VaR).
    pub confidence_level: f64,

    /// Number of draws for Monte Carlo VaR.
    pub monte_carlo_simulations: usize,

    /// Random seed for reproducible Monte Carlo runs (None = entropy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monte_carlo_seed: Option<u64>,

    /// Trading days per year for annualisation.
    pub trading_days_per_year: u32,

    /// Annual risk-free rate used by the Sharpe ratio.
    pub risk_free_rate: f64,

    /// VaR horizon in trading days for the rolling backtest.
    pub horizon_days: usize,

    /// Trailing window for rolling volatility.
    pub rolling_window: usize,

    /// EWMA decay factor.
    ///
    /// Carried for compatibility with existing configuration files; no
    /// estimator reads it.
    pub ewma_decay: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl RiskConfig {
    /// Default confidence level.
    pub const DEFAULT_CONFIDENCE: f64 = 0.95;
    /// Default Monte Carlo draw count.
    pub const DEFAULT_SIMULATIONS: usize = 10_000;
    /// Default trading days per year.
    pub const DEFAULT_TRADING_DAYS: u32 = 252;

    /// Standard configuration: 95% confidence, 10,000 draws, 10-day horizon.
    pub fn standard() -> Self {
        Self {
            confidence_level: Self::DEFAULT_CONFIDENCE,
            monte_carlo_simulations: Self::DEFAULT_SIMULATIONS,
            monte_carlo_seed: None,
            trading_days_per_year: Self::DEFAULT_TRADING_DAYS,
            risk_free_rate: 0.02,
            horizon_days: 10,
            rolling_window: 21,
            ewma_decay: 0.94,
        }
    }

    /// Builder method to set the confidence level.
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Builder method to set the Monte Carlo draw count.
    pub fn with_monte_carlo_simulations(mut self, simulations: usize) -> Self {
        self.monte_carlo_simulations = simulations;
        self
    }

    /// Builder method to fix the Monte Carlo seed.
    pub fn with_monte_carlo_seed(mut self, seed: u64) -> Self {
        self.monte_carlo_seed = Some(seed);
        self
    }

    /// Builder method to set the VaR horizon.
    pub fn with_horizon_days(mut self, horizon_days: usize) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Builder method to set the rolling volatility window.
    pub fn with_rolling_window(mut self, window: usize) -> Self {
        self.rolling_window = window;
        self
    }

    /// Builder method to set the annual risk-free rate.
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }
}

impl Validate for RiskConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            errors.push(ValidationError::with_rule(
                "confidence_level",
                "Confidence level must be strictly between 0 and 1",
                "open_unit_interval",
            ));
        }

        if self.monte_carlo_simulations < 100 || self.monte_carlo_simulations > 10_000_000 {
            errors.push(ValidationError::with_rule(
                "monte_carlo_simulations",
                "Monte Carlo simulations must be between 100 and 10,000,000",
                "valid_mc_paths",
            ));
        }

        if self.trading_days_per_year == 0 {
            errors.push(ValidationError::with_rule(
                "trading_days_per_year",
                "Trading days per year must be positive",
                "positive",
            ));
        }

        if !self.risk_free_rate.is_finite() {
            errors.push(ValidationError::new(
                "risk_free_rate",
                "Risk-free rate must be finite",
            ));
        }

        if self.horizon_days == 0 {
            errors.push(ValidationError::with_rule(
                "horizon_days",
                "Horizon must be at least one day",
                "positive",
            ));
        }

        if self.rolling_window < 2 {
            errors.push(ValidationError::with_rule(
                "rolling_window",
                "Rolling window needs at least two observations",
                "min_window",
            ));
        }

        if !(self.ewma_decay > 0.0 && self.ewma_decay < 1.0) {
            errors.push(ValidationError::with_rule(
                "ewma_decay",
                "EWMA decay must be strictly between 0 and 1",
                "open_unit_interval",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_config_standard() {
        let config = RiskConfig::standard();
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.monte_carlo_simulations, 10_000);
        assert_eq!(config.trading_days_per_year, 252);
        assert_eq!(config.risk_free_rate, 0.02);
        assert_eq!(config.horizon_days, 10);
        assert_eq!(config.monte_carlo_seed, None);
        assert!(config.is_valid());
    }

    #[test]
    fn test_risk_config_validation() {
        let mut config = RiskConfig::default();
        assert!(config.is_valid());

        config.confidence_level = 1.0;
        assert!(!config.is_valid());

        config.confidence_level = 0.99;
        config.monte_carlo_simulations = 10;
        config.rolling_window = 1;
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "monte_carlo_simulations");
        assert_eq!(errors[1].field, "rolling_window");
    }

    #[test]
    fn test_builders() {
        let config = RiskConfig::standard()
            .with_confidence_level(0.99)
            .with_monte_carlo_simulations(50_000)
            .with_monte_carlo_seed(42)
            .with_horizon_days(1)
            .with_rolling_window(63)
            .with_risk_free_rate(0.0);
        assert_eq!(config.confidence_level, 0.99);
        assert_eq!(config.monte_carlo_simulations, 50_000);
        assert_eq!(config.monte_carlo_seed, Some(42));
        assert_eq!(config.horizon_days, 1);
        assert_eq!(config.rolling_window, 63);
        assert_eq!(config.risk_free_rate, 0.0);
        assert!(config.is_valid());
    }
}
