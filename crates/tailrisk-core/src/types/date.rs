//! Date type for trading-day series.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date identifying one observation of a series.
///
/// Newtype wrapper around `chrono::NaiveDate`. Ordering follows the
/// calendar, which is what series ordering checks rely on.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::types::Date;
///
/// let date = Date::parse("2025-03-30").unwrap();
/// assert_eq!(date.year(), 2025);
/// assert_eq!(date.add_days(2).to_string(), "2025-04-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses the date cell of a price file.
    ///
    /// Accepts a plain `YYYY-MM-DD` date as well as timestamps such as
    /// `2024-01-02 00:00:00` or `2024-01-02T00:00:00`, keeping only the
    /// calendar date.
    pub fn parse_lenient(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        if let Ok(date) = Self::parse(s) {
            return Ok(date);
        }
        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Date(dt.date()));
            }
        }
        // Timezone-suffixed timestamps: the leading ten characters carry the date.
        match s.get(..10) {
            Some(prefix) if s.len() > 10 => Self::parse(prefix),
            _ => Err(CoreError::invalid_date(format!("Cannot parse: {s}"))),
        }
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
