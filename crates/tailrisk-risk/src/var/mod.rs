//! Value at Risk (VaR) estimation.
//!
//! VaR is reported as a non-negative loss magnitude: the absolute value of
//! the return quantile at `1 - confidence`. All three estimators share the
//! same contract:
//!
//! - `returns` must be non-empty ([`RiskError::EmptyInput`] otherwise)
//! - `confidence` must lie strictly between 0 and 1
//!   ([`RiskError::InvalidInput`] otherwise)
//!
//! A single observation has no sample standard deviation; the distributional
//! estimators treat it as a point mass (sigma = 0).

mod historical;
mod monte_carlo;
mod parametric;

pub use historical::*;
pub use monte_carlo::*;
pub use parametric::*;

use serde::{Deserialize, Serialize};
use tailrisk_config::RiskConfig;
use tailrisk_math::statistics::{mean, sample_std_dev};

use crate::error::{check_confidence, RiskError, RiskResult};

/// Value at Risk result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarResult {
    /// The VaR as a fraction of position value (absolute loss).
    pub var: f64,
    /// Confidence level (e.g., 0.95 for 95%).
    pub confidence_level: f64,
    /// Time horizon in trading days.
    pub horizon_days: u32,
    /// Method used for calculation.
    pub method: VarMethod,
}

impl VarResult {
    /// Rescales a VaR to another horizon by the square-root-of-time rule.
    ///
    /// Assumes independent, identically distributed returns.
    pub fn scaled_to_horizon(&self, horizon_days: u32) -> Self {
        let ratio = f64::from(horizon_days) / f64::from(self.horizon_days.max(1));
        Self {
            var: self.var * ratio.sqrt(),
            horizon_days,
            ..*self
        }
    }

    /// Loss in currency for a position of `position_value`.
    pub fn loss_amount(&self, position_value: f64) -> f64 {
        self.var * position_value.abs()
    }
}

impl std::fmt::Display for VarResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} VaR({:.0}%, {}d): {:.4}%",
            self.method,
            self.confidence_level * 100.0,
            self.horizon_days,
            self.var * 100.0
        )
    }
}

/// VaR calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarMethod {
    /// Historical simulation.
    Historical,
    /// Parametric (variance-covariance).
    Parametric,
    /// Monte Carlo simulation.
    MonteCarlo,
}

impl VarMethod {
    /// Every method, in reporting order.
    pub const ALL: [VarMethod; 3] = [Self::Historical, Self::Parametric, Self::MonteCarlo];
}

impl std::fmt::Display for VarMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Historical => "Historical",
            Self::Parametric => "Parametric",
            Self::MonteCarlo => "Monte Carlo",
        };
        f.write_str(name)
    }
}

/// A one-day VaR estimator over a sample of returns.
///
/// Implementations are interchangeable: callers hold a
/// `Box<dyn VarEstimator>` or a generic and never branch on the method.
pub trait VarEstimator {
    /// The method this estimator implements.
    fn method(&self) -> VarMethod;

    /// Estimates VaR as a non-negative loss magnitude.
    fn estimate(&self, returns: &[f64], confidence: f64) -> RiskResult<f64>;

    /// Estimates VaR and wraps it in a one-day [`VarResult`].
    fn estimate_result(&self, returns: &[f64], confidence: f64) -> RiskResult<VarResult> {
        Ok(VarResult {
            var: self.estimate(returns, confidence)?,
            confidence_level: confidence,
            horizon_days: 1,
            method: self.method(),
        })
    }
}

/// Builds the estimator for `method` from a risk configuration.
pub fn estimator_for(method: VarMethod, config: &RiskConfig) -> Box<dyn VarEstimator> {
    match method {
        VarMethod::Historical => Box::new(HistoricalVar),
        VarMethod::Parametric => Box::new(ParametricVar),
        VarMethod::MonteCarlo => Box::new(MonteCarloVar {
            simulations: config.monte_carlo_simulations,
            seed: config.monte_carlo_seed,
        }),
    }
}

/// Runs the historical, parametric and Monte Carlo estimators with the
/// confidence level and Monte Carlo settings from `config`.
pub fn estimate_all(returns: &[f64], config: &RiskConfig) -> RiskResult<Vec<VarResult>> {
    VarMethod::ALL
        .iter()
        .map(|&method| estimator_for(method, config).estimate_result(returns, config.confidence_level))
        .collect()
}

/// Shared argument checks for the estimators.
fn validate_inputs(returns: &[f64], confidence: f64) -> RiskResult<()> {
    if returns.is_empty() {
        return Err(RiskError::empty_input("returns"));
    }
    check_confidence(confidence)
}

/// Sample mean and standard deviation, with sigma = 0 for one observation.
fn location_scale(returns: &[f64]) -> RiskResult<(f64, f64)> {
    let mu = mean(returns)?;
    if returns.len() == 1 {
        log::debug!("single observation, treating returns as a point mass");
        return Ok((mu, 0.0));
    }
    Ok((mu, sample_std_dev(returns)?))
}
