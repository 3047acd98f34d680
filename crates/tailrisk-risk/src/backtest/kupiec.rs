//! Kupiec proportion-of-failures test.

use serde::{Deserialize, Serialize};
use tailrisk_math::distributions::chi_squared_sf;

use crate::error::{check_confidence, RiskError, RiskResult};

/// Outcome of the Kupiec unconditional coverage test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KupiecResult {
    /// Number of observations.
    pub n: usize,
    /// Number of breaches.
    pub x: usize,
    /// Observed breach rate `x / n`.
    pub p_hat: f64,
    /// Likelihood-ratio statistic, chi-squared with one degree of freedom.
    pub lr: f64,
    /// Upper-tail probability of `lr`.
    pub p_value: f64,
}

impl KupiecResult {
    /// Expected number of breaches for a model with `confidence` coverage.
    pub fn expected_breaches(&self, confidence: f64) -> f64 {
        self.n as f64 * (1.0 - confidence)
    }

    /// Returns true if the statistic is defined (the observed rate is
    /// strictly between 0 and 1).
    pub fn is_defined(&self) -> bool {
        !self.lr.is_nan()
    }
}

/// Tests whether the breach frequency matches `1 - confidence`.
///
/// The likelihoods are compared in log space, so long samples do not
/// underflow. When no day or every day breaches, the alternative likelihood
/// degenerates and `lr` and `p_value` are NaN.
pub fn kupiec_pof_test(breaches: &[bool], confidence: f64) -> RiskResult<KupiecResult> {
    if breaches.is_empty() {
        return Err(RiskError::empty_input("breach flags"));
    }
    check_confidence(confidence)?;

    let n = breaches.len();
    let x = breaches.iter().filter(|&&b| b).count();
    let p = 1.0 - confidence;
    let p_hat = x as f64 / n as f64;

    if x == 0 || x == n {
        log::warn!("Kupiec statistic undefined: {x} breaches in {n} observations");
        return Ok(KupiecResult {
            n,
            x,
            p_hat,
            lr: f64::NAN,
            p_value: f64::NAN,
        });
    }

    let hits = x as f64;
    let misses = (n - x) as f64;
    let ll_null = misses * (1.0 - p).ln() + hits * p.ln();
    let ll_alt = misses * (1.0 - p_hat).ln() + hits * p_hat.ln();
    let lr = (2.0 * (ll_alt - ll_null)).max(0.0);

    Ok(KupiecResult {
        n,
        x,
        p_hat,
        lr,
        p_value: chi_squared_sf(lr, 1.0)?,
    })
}
