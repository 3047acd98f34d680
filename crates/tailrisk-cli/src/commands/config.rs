//! Config command implementation.
//!
//! Shows, writes and validates the effective configuration.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use tailrisk_config::{AppConfig, Validate};

use crate::cli::OutputFormat;
use crate::output::{print_error, print_header, print_json_value, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the effective configuration as TOML
    #[arg(long)]
    pub show: bool,

    /// Write the effective configuration to this TOML file
    #[arg(long, value_name = "PATH")]
    pub write: Option<PathBuf>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    if let Some(path) = &args.write {
        std::fs::write(path, config.to_toml_string()?)
            .with_context(|| format!("writing {}", path.display()))?;
        print_success(&format!("Configuration written to {}", path.display()));
        return Ok(());
    }

    if args.show {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    match format {
        OutputFormat::Json => print_json_value(config)?,
        _ => {
            let risk = &config.risk;
            let mut rows = vec![
                KeyValue::from_percent("Confidence Level", risk.confidence_level),
                KeyValue::new("Monte Carlo Simulations", risk.monte_carlo_simulations.to_string()),
                KeyValue::new(
                    "Monte Carlo Seed",
                    risk.monte_carlo_seed
                        .map_or_else(|| "entropy".to_string(), |s| s.to_string()),
                ),
                KeyValue::new("Trading Days per Year", risk.trading_days_per_year.to_string()),
                KeyValue::from_percent("Risk-Free Rate", risk.risk_free_rate),
                KeyValue::new("Horizon", format!("{} days", risk.horizon_days)),
                KeyValue::new("Rolling Window", format!("{} days", risk.rolling_window)),
                KeyValue::new("Data Directory", config.data.data_dir.display().to_string()),
                KeyValue::new("Start Date", config.data.start_date.clone()),
            ];
            rows.extend(
                config
                    .data
                    .tickers
                    .iter()
                    .map(|(name, keyword)| KeyValue::new(format!("Ticker {name}"), keyword.clone())),
            );

            if format == OutputFormat::Table {
                print_header("Configuration");
            }
            print_output(&rows, format)?;
        }
    }

    let errors = config.validate();
    if errors.is_empty() {
        if format == OutputFormat::Table {
            print_success("Configuration is valid");
        }
        return Ok(());
    }
    for error in &errors {
        print_error(&error.to_string());
    }
    anyhow::bail!("configuration has {} invalid setting(s)", errors.len())
}
