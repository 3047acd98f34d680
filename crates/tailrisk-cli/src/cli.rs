//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::{BacktestArgs, ConfigArgs, StatsArgs, VarArgs};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tailrisk.toml";

/// tailrisk - Value-at-Risk estimation and backtesting
#[derive(Parser)]
#[command(name = "tailrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML). Defaults to ./tailrisk.toml when present.
    #[arg(short, long, global = true, env = "TAILRISK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Estimate one-day VaR with every method
    Var(VarArgs),

    /// Backtest a rolling parametric VaR against realised forward returns
    Backtest(BacktestArgs),

    /// Annualised return, volatility and Sharpe ratio
    Stats(StatsArgs),

    /// Show and validate the effective configuration
    Config(ConfigArgs),
}

/// Where to find the price series a command runs on.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory of `YYYY-MM-DD_<keyword>.csv` price files
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// File keyword (e.g. sp500) or configured ticker name (e.g. "S&P 500")
    #[arg(short, long)]
    pub keyword: String,

    /// Price column (defaults to the first column after the date)
    #[arg(long)]
    pub column: Option<String>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
