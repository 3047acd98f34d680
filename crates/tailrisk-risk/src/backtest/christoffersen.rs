//! Christoffersen independence test.
//!
//! Breaches from a well-specified model arrive independently: the chance of
//! a breach today does not depend on whether yesterday breached. The test
//! compares a first-order Markov chain fitted to the breach sequence with
//! the independent alternative.

use serde::{Deserialize, Serialize};
use tailrisk_math::distributions::chi_squared_sf;

use crate::error::{RiskError, RiskResult};

/// Day-to-day transition counts of a breach sequence.
///
/// `nij` counts days in state `j` that follow a day in state `i`, where
/// state 1 is a breach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCounts {
    /// No breach followed by no breach.
    pub n00: usize,
    /// No breach followed by a breach.
    pub n01: usize,
    /// Breach followed by no breach.
    pub n10: usize,
    /// Breach followed by a breach.
    pub n11: usize,
}

impl TransitionCounts {
    /// Counts transitions between consecutive flags.
    pub fn from_flags(breaches: &[bool]) -> Self {
        let mut counts = Self::default();
        for pair in breaches.windows(2) {
            match (pair[0], pair[1]) {
                (false, false) => counts.n00 += 1,
                (false, true) => counts.n01 += 1,
                (true, false) => counts.n10 += 1,
                (true, true) => counts.n11 += 1,
            }
        }
        counts
    }

    /// Total number of transitions (sequence length minus one).
    pub fn total(&self) -> usize {
        self.n00 + self.n01 + self.n10 + self.n11
    }
}

/// Outcome of the Christoffersen independence test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChristoffersenResult {
    /// Transition counts.
    pub counts: TransitionCounts,
    /// P(breach | no breach yesterday); 0 if no such day.
    pub pi0: f64,
    /// P(breach | breach yesterday); 0 if no such day.
    pub pi1: f64,
    /// Unconditional breach probability over the transitions.
    pub pi: f64,
    /// Likelihood-ratio statistic, chi-squared with one degree of freedom.
    pub lr: f64,
    /// Upper-tail probability of `lr`.
    pub p_value: f64,
}

/// Tests a breach sequence for serial independence.
///
/// Empty transition cells contribute nothing to the log-likelihood
/// (`0 * ln 0 = 0`), so the statistic stays finite when breaches never
/// cluster or never occur. The unguarded likelihood formula is NaN for
/// those sequences; here they give `lr = 0` and `p_value = 1`.
///
/// # Errors
///
/// `RiskError::InsufficientData` for fewer than two observations.
pub fn christoffersen_independence_test(breaches: &[bool]) -> RiskResult<ChristoffersenResult> {
    if breaches.len() < 2 {
        return Err(RiskError::InsufficientData {
            required: 2,
            actual: breaches.len(),
        });
    }

    let counts = TransitionCounts::from_flags(breaches);
    let TransitionCounts { n00, n01, n10, n11 } = counts;

    let pi0 = ratio(n01, n00 + n01);
    let pi1 = ratio(n11, n10 + n11);
    let pi = ratio(n01 + n11, counts.total());

    let ll_independent = bernoulli_ll(n00 + n10, n01 + n11, pi);
    let ll_markov = bernoulli_ll(n00, n01, pi0) + bernoulli_ll(n10, n11, pi1);
    let lr = (-2.0 * (ll_independent - ll_markov)).max(0.0);

    Ok(ChristoffersenResult {
        counts,
        pi0,
        pi1,
        pi,
        lr,
        p_value: chi_squared_sf(lr, 1.0)?,
    })
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Log-likelihood of `misses` failures and `hits` successes at rate `p`.
fn bernoulli_ll(misses: usize, hits: usize, p: f64) -> f64 {
    xlogy(misses, 1.0 - p) + xlogy(hits, p)
}

fn xlogy(n: usize, p: f64) -> f64 {
    if n == 0 {
        0.0
    } else {
        n as f64 * p.ln()
    }
}
