//! CLI command implementations.

pub mod backtest;
pub mod config;
pub mod stats;
pub mod var;

// Re-export submodules for convenience
pub use backtest::BacktestArgs;
pub use config::ConfigArgs;
pub use stats::StatsArgs;
pub use var::VarArgs;

use std::path::PathBuf;

use tailrisk_config::{AppConfig, RiskConfig, Validate};
use tailrisk_core::PriceSeries;

use crate::cli::DataArgs;
use crate::error::CliResult;

/// Loads the newest price file selected by `args`, falling back to the
/// configured data directory and ticker keywords.
pub fn load_prices(args: &DataArgs, config: &AppConfig) -> CliResult<PriceSeries> {
    let dir: PathBuf = args
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());
    let keyword = config.data.keyword_for(&args.keyword);
    tracing::debug!(dir = %dir.display(), keyword, "resolving price file");

    let prices = tailrisk_ext_file::load_latest_price_series(&dir, keyword, args.column.as_deref())?;
    tracing::info!(observations = prices.len(), "loaded {keyword} prices");
    Ok(prices)
}

/// Re-validates risk parameters after command-line overrides.
pub fn checked_risk_config(config: RiskConfig) -> CliResult<RiskConfig> {
    config.validate_or_error()?;
    Ok(config)
}
