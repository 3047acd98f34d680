//! Stats command implementation.

use anyhow::Result;
use clap::Args;

use tailrisk_config::AppConfig;
use tailrisk_risk::performance::performance_summary;
use tailrisk_risk::returns::daily_returns;

use crate::cli::{DataArgs, OutputFormat};
use crate::commands::load_prices;
use crate::output::{print_header, print_json_value, print_output, KeyValue};

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Annual risk-free rate (e.g., 0.03). Defaults to the configured rate.
    #[arg(long)]
    pub risk_free_rate: Option<f64>,
}

/// Execute the stats command.
pub fn execute(args: StatsArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let risk_free_rate = args.risk_free_rate.unwrap_or(config.risk.risk_free_rate);
    let trading_days = config.risk.trading_days_per_year;

    let prices = load_prices(&args.data, config)?;
    let returns = daily_returns(&prices)?;
    let summary = performance_summary(returns.values(), risk_free_rate, trading_days)?;

    match format {
        OutputFormat::Json => print_json_value(&summary)?,
        OutputFormat::Minimal => {
            println!(
                "{:.6} {:.6} {:.4}",
                summary.annualized_return, summary.annualized_volatility, summary.sharpe_ratio
            );
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Observations", summary.observations.to_string()),
                KeyValue::from_percent("Annualized Return", summary.annualized_return),
                KeyValue::from_percent("Annualized Volatility", summary.annualized_volatility),
                KeyValue::from_percent("Risk-Free Rate", risk_free_rate),
                KeyValue::new("Sharpe Ratio", format!("{:.4}", summary.sharpe_ratio)),
            ];
            if format == OutputFormat::Table {
                print_header("Performance");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
