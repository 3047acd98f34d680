//! # tailrisk Ext File
//!
//! File-based price data for the tailrisk Value-at-Risk library.
//!
//! Prices are persisted as one CSV per instrument and retrieval day,
//! `YYYY-MM-DD_<keyword>.csv`. This crate locates the newest file for a
//! keyword, parses it into a validated [`PriceSeries`](tailrisk_core::PriceSeries)
//! and writes series back in the same layout.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod price_files;

pub use error::{FileError, FileResult};
pub use price_files::*;
