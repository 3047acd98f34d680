//! # tailrisk-risk
//!
//! Value-at-Risk estimation and backtesting for a single price series.
//!
//! This crate provides:
//!
//! - **Returns**: simple, log and forward log returns, rolling volatility,
//!   parametric VaR threshold series
//! - **VaR**: Historical, Parametric and Monte Carlo estimators behind the
//!   [`VarEstimator`](var::VarEstimator) trait
//! - **Breaches**: breach flags and breach frequency
//! - **Backtests**: Kupiec POF, Christoffersen independence, conditional
//!   coverage, expected shortfall
//! - **Performance**: annualisation and the Sharpe ratio
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::{Date, PriceSeries};
//! use tailrisk_risk::prelude::*;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let dates: Vec<Date> = (0..60).map(|i| start.add_days(i)).collect();
//! let closes: Vec<f64> = (0..60_i32)
//!     .map(|i| 100.0 * (1.0 + 0.01 * (f64::from(i) * 0.7).sin()))
//!     .collect();
//! let prices = PriceSeries::new(dates, closes).unwrap();
//!
//! let returns = daily_returns(&prices).unwrap();
//! let var = historical_var(returns.values(), 0.95).unwrap();
//! assert!(var > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod backtest;
pub mod breach;
mod error;
pub mod performance;
pub mod returns;
pub mod var;

pub use error::{RiskError, RiskResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::backtest::*;
    pub use crate::breach::*;
    pub use crate::performance::*;
    pub use crate::returns::*;
    pub use crate::var::*;
    pub use crate::{RiskError, RiskResult};
}
