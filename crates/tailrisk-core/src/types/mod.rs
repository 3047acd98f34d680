//! Domain types for return-series analytics.
//!
//! - [`Date`]: trading date
//! - [`TimeSeries`]: date-indexed values with strictly increasing dates
//! - [`PriceSeries`]: time series of positive, finite closing prices

mod date;
mod price;
mod series;

pub use date::Date;
pub use price::PriceSeries;
pub use series::TimeSeries;

/// Daily, log or forward returns indexed by date.
pub type ReturnSeries = TimeSeries<f64>;

/// Breach flags indexed by date.
pub type BreachSeries = TimeSeries<bool>;

/// Rolling statistics where the leading observations are undefined.
pub type VolatilitySeries = TimeSeries<Option<f64>>;
