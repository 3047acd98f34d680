//! Date-indexed series.

use serde::Serialize;

use super::Date;
use crate::error::{CoreError, CoreResult};

/// An ordered, date-indexed sequence of values.
///
/// Dates are strictly increasing, so an index never carries duplicates.
/// The series is immutable once built; every transform returns a new one.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::types::{Date, TimeSeries};
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let returns = TimeSeries::new(vec![d(2), d(3), d(4)], vec![0.01, -0.02, 0.005]).unwrap();
/// let losses = returns.map(|r| -r);
/// assert_eq!(losses.values(), &[-0.01, 0.02, -0.005]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries<T> {
    dates: Vec<Date>,
    values: Vec<T>,
}

impl<T> TimeSeries<T> {
    /// Creates a series from parallel date and value vectors.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LengthMismatch` if the vectors differ in length and
    /// `CoreError::UnorderedDates` if dates are not strictly increasing.
    pub fn new(dates: Vec<Date>, values: Vec<T>) -> CoreResult<Self> {
        if dates.len() != values.len() {
            return Err(CoreError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
        if let Some(pair) = dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(CoreError::UnorderedDates {
                previous: pair[0].to_string(),
                next: pair[1].to_string(),
            });
        }
        Ok(Self { dates, values })
    }

    /// Creates a series from `(date, value)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (Date, T)>) -> CoreResult<Self> {
        let (dates, values): (Vec<Date>, Vec<T>) = points.into_iter().unzip();
        Self::new(dates, values)
    }

    /// Creates an empty series.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dates: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a series whose ordering is already guaranteed by construction,
    /// e.g. a transform of an existing series restricted to a subrange.
    pub(crate) fn from_ordered(dates: Vec<Date>, values: Vec<T>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The date index.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The values, in date order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the observation at position `index`.
    pub fn get(&self, index: usize) -> Option<(Date, &T)> {
        Some((*self.dates.get(index)?, self.values.get(index)?))
    }

    /// Returns the value observed on `date`.
    pub fn value_at(&self, date: Date) -> Option<&T> {
        self.dates
            .binary_search(&date)
            .ok()
            .map(|i| &self.values[i])
    }

    /// Iterates over `(date, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &T)> + '_ {
        self.dates.iter().copied().zip(self.values.iter())
    }

    /// First observation.
    pub fn first(&self) -> Option<(Date, &T)> {
        self.get(0)
    }

    /// Last observation.
    pub fn last(&self) -> Option<(Date, &T)> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Applies `f` to every value, keeping the date index.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> TimeSeries<U> {
        TimeSeries::from_ordered(self.dates.clone(), self.values.iter().map(f).collect())
    }

    /// Restricts two series to their common dates.
    ///
    /// This is the explicit index join callers use before comparing series
    /// that were derived with different look-back or look-ahead lengths.
    pub fn inner_join<U: Clone>(&self, other: &TimeSeries<U>) -> (TimeSeries<T>, TimeSeries<U>)
    where
        T: Clone,
    {
        let mut dates = Vec::new();
        let mut left = Vec::new();
        let mut right = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.len() && j < other.len() {
            match self.dates[i].cmp(&other.dates[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dates.push(self.dates[i]);
                    left.push(self.values[i].clone());
                    right.push(other.values[j].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        (
            TimeSeries::from_ordered(dates.clone(), left),
            TimeSeries::from_ordered(dates, right),
        )
    }
}

impl<T: Clone> TimeSeries<Option<T>> {
    /// Drops observations whose value is undefined.
    pub fn drop_missing(&self) -> TimeSeries<T> {
        let (dates, values): (Vec<Date>, Vec<T>) = self
            .iter()
            .filter_map(|(date, value)| value.clone().map(|v| (date, v)))
            .unzip();
        TimeSeries::from_ordered(dates, values)
    }
}

impl<T> Default for TimeSeries<T> {
    fn default() -> Self {
        Self::empty()
    }
}
