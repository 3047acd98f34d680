//! tailrisk CLI - Value-at-Risk estimation and backtesting from price files.
//!
//! # Usage
//!
//! ```bash
//! # One-day VaR of the newest S&P 500 file at 99%
//! tailrisk var --data-dir data --keyword sp500 --confidence 0.99
//!
//! # Ten-day rolling parametric VaR backtest
//! tailrisk backtest --data-dir data --keyword sp500 --horizon 10
//!
//! # Annualised performance
//! tailrisk stats --data-dir data --keyword sp500
//!
//! # Effective configuration as TOML
//! tailrisk config --show
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tailrisk_config::{AppConfig, Validate};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, DEFAULT_CONFIG_FILE};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_file_or_default(DEFAULT_CONFIG_FILE)?,
    };

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Var(args) => {
            config.validate_or_error()?;
            commands::var::execute(args, &config, format)?
        }
        Commands::Backtest(args) => {
            config.validate_or_error()?;
            commands::backtest::execute(args, &config, format)?
        }
        Commands::Stats(args) => {
            config.validate_or_error()?;
            commands::stats::execute(args, &config, format)?
        }
        Commands::Config(args) => commands::config::execute(args, &config, format)?,
    }

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn,tailrisk=info",
        1 => "warn,tailrisk=debug",
        _ => "warn,tailrisk=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
