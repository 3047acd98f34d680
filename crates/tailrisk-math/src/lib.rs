//! # tailrisk Math
//!
//! Statistical utilities for the tailrisk Value-at-Risk library.
//!
//! This crate provides:
//!
//! - **Statistics**: mean, sample variance/standard deviation, and the
//!   linearly interpolated percentile used by every empirical estimator
//! - **Distributions**: standard normal quantiles and chi-squared tail
//!   probabilities for likelihood-ratio tests
//!
//! ## Design Philosophy
//!
//! - **Closed form where possible**: quantiles come from inverse CDFs, never
//!   from sampling
//! - **Explicit failure**: empty samples are errors, not NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod distributions;
pub mod error;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::{chi_squared_sf, normal_quantile};
    pub use crate::error::{MathError, MathResult};
    pub use crate::statistics::{
        mean, percentile, percentile_of_sorted, sample_std_dev, sample_variance, sorted,
    };
}

pub use error::{MathError, MathResult};
