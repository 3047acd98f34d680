//! Error types for risk calculations.

use tailrisk_core::CoreError;
use tailrisk_math::MathError;
use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// A series or sample that must be non-empty was empty.
    #[error("empty input: {context}")]
    EmptyInput {
        /// What was empty.
        context: String,
    },

    /// A ratio is undefined because its denominator has zero dispersion.
    #[error("zero variance in {context}")]
    ZeroVariance {
        /// Calculation that hit the zero denominator.
        context: String,
    },

    /// Insufficient data for calculation.
    #[error("insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Observations supplied.
        actual: usize,
    },

    /// Invalid input parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two series that must share a date index do not.
    #[error("misaligned series: {reason}")]
    Misaligned {
        /// Where the indices diverge.
        reason: String,
    },

    /// Series construction error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Statistical routine error.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl RiskError {
    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input(context: impl Into<String>) -> Self {
        Self::EmptyInput {
            context: context.into(),
        }
    }

    /// Creates a zero variance error.
    #[must_use]
    pub fn zero_variance(context: impl Into<String>) -> Self {
        Self::ZeroVariance {
            context: context.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

/// Rejects confidence levels outside the open unit interval.
pub(crate) fn check_confidence(confidence: f64) -> RiskResult<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(RiskError::invalid_input(format!(
            "confidence level must be between 0 and 1, got {confidence}"
        )))
    }
}
