//! Closing price series.

use serde::Serialize;

use super::{Date, TimeSeries};
use crate::error::{CoreError, CoreResult};

/// A validated series of daily closing prices.
///
/// Invariants checked at construction:
/// - dates are strictly increasing (no duplicates)
/// - every price is finite and strictly positive
///
/// An empty price series is representable; return transforms reject it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries(TimeSeries<f64>);

impl PriceSeries {
    /// Creates a price series from parallel date and price vectors.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NonFiniteValue` or `CoreError::NonPositivePrice`
    /// for invalid prices, and the [`TimeSeries::new`] errors for a bad index.
    pub fn new(dates: Vec<Date>, prices: Vec<f64>) -> CoreResult<Self> {
        TimeSeries::new(dates, prices).and_then(Self::try_from)
    }

    /// Creates a price series from `(date, price)` pairs.
    pub fn from_points(points: impl IntoIterator<Item = (Date, f64)>) -> CoreResult<Self> {
        TimeSeries::from_points(points).and_then(Self::try_from)
    }

    /// Number of prices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no prices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The date index.
    pub fn dates(&self) -> &[Date] {
        self.0.dates()
    }

    /// The prices, in date order.
    pub fn values(&self) -> &[f64] {
        self.0.values()
    }

    /// Borrows the underlying series.
    pub fn as_series(&self) -> &TimeSeries<f64> {
        &self.0
    }
}

impl TryFrom<TimeSeries<f64>> for PriceSeries {
    type Error = CoreError;

    fn try_from(series: TimeSeries<f64>) -> CoreResult<Self> {
        for (date, &price) in series.iter() {
            if !price.is_finite() {
                return Err(CoreError::NonFiniteValue {
                    date: date.to_string(),
                });
            }
            if price <= 0.0 {
                return Err(CoreError::NonPositivePrice {
                    date: date.to_string(),
                    value: price,
                });
            }
        }
        Ok(Self(series))
    }
}

impl From<PriceSeries> for TimeSeries<f64> {
    fn from(prices: PriceSeries) -> Self {
        prices.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> Date {
        Date::from_ymd(2024, 1, day).unwrap()
    }

    #[test]
    fn test_valid_prices() {
        let prices = PriceSeries::new(vec![d(1), d(2), d(3)], vec![100.0, 110.0, 121.0]).unwrap();
        assert_eq!(prices.len(), 3);
        assert_eq!(prices.values(), &[100.0, 110.0, 121.0]);
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = PriceSeries::new(vec![d(1), d(2)], vec![100.0, 0.0]).unwrap_err();
        assert!(matches!(err, CoreError::NonPositivePrice { value, .. } if value == 0.0));
    }

    #[test]
    fn test_rejects_nan() {
        let err = PriceSeries::new(vec![d(1)], vec![f64::NAN]).unwrap_err();
        assert!(matches!(err, CoreError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_empty_is_representable() {
        let prices = PriceSeries::new(vec![], vec![]).unwrap();
        assert!(prices.is_empty());
    }
}
