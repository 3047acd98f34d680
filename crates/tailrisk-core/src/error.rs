//! Error types for core series handling.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building dates and series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date parsing or an invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Dates and values do not have the same length.
    #[error("Length mismatch: {dates} dates but {values} values")]
    LengthMismatch {
        /// Number of dates supplied.
        dates: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// Dates are not strictly increasing (out of order or duplicated).
    #[error("Dates must be strictly increasing: {previous} is followed by {next}")]
    UnorderedDates {
        /// The earlier position's date.
        previous: String,
        /// The date that breaks the ordering.
        next: String,
    },

    /// A price is zero or negative.
    #[error("Non-positive price {value} on {date}")]
    NonPositivePrice {
        /// Date of the offending observation.
        date: String,
        /// The offending price.
        value: f64,
    },

    /// A value is NaN or infinite.
    #[error("Non-finite value on {date}")]
    NonFiniteValue {
        /// Date of the offending observation.
        date: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
