//! # tailrisk Core
//!
//! Core types shared by every tailrisk crate.
//!
//! - **Types**: [`Date`], the generic [`TimeSeries`], and the validated
//!   [`PriceSeries`] that every return transform starts from
//! - **Errors**: [`CoreError`] for series construction and date parsing
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::prelude::*;
//!
//! let d0 = Date::from_ymd(2024, 1, 2).unwrap();
//! let d1 = Date::from_ymd(2024, 1, 3).unwrap();
//! let prices = PriceSeries::new(vec![d0, d1], vec![100.0, 101.5]).unwrap();
//! assert_eq!(prices.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BreachSeries, Date, PriceSeries, ReturnSeries, TimeSeries, VolatilitySeries,
    };
}

pub use error::{CoreError, CoreResult};
pub use types::{BreachSeries, Date, PriceSeries, ReturnSeries, TimeSeries, VolatilitySeries};
