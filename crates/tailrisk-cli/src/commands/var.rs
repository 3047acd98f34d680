//! VaR command implementation.
//!
//! Estimates one-day VaR of daily returns with every method, plus expected
//! shortfall, optionally rescaled to a longer horizon.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tailrisk_config::AppConfig;
use tailrisk_risk::backtest::expected_shortfall;
use tailrisk_risk::returns::daily_returns;
use tailrisk_risk::var::{estimate_all, VarResult};

use crate::cli::{DataArgs, OutputFormat};
use crate::commands::{checked_risk_config, load_prices};
use crate::output::{format_percent, print_header, print_json_value, print_output, KeyValue};

/// Arguments for the var command.
#[derive(Args, Debug)]
pub struct VarArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Confidence level (e.g., 0.99). Defaults to the configured level.
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Monte Carlo draws
    #[arg(long)]
    pub simulations: Option<usize>,

    /// Monte Carlo seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Rescale the one-day figures to this many days (square-root-of-time)
    #[arg(long, default_value = "1")]
    pub horizon_days: u32,

    /// Position value; adds the currency loss to each row
    #[arg(long)]
    pub position: Option<f64>,
}

/// One estimator's output.
#[derive(Debug, Serialize, Tabled)]
struct VarRow {
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Confidence", display_with = "display_percent")]
    confidence_level: f64,
    #[tabled(rename = "Horizon (days)")]
    horizon_days: u32,
    #[tabled(rename = "VaR", display_with = "display_percent")]
    var: f64,
    #[tabled(rename = "Loss", display_with = "display_loss")]
    loss: Option<f64>,
}

impl VarRow {
    fn new(result: &VarResult, position: Option<f64>) -> Self {
        Self {
            method: result.method.to_string(),
            confidence_level: result.confidence_level,
            horizon_days: result.horizon_days,
            var: result.var,
            loss: position.map(|p| result.loss_amount(p)),
        }
    }
}

fn display_percent(value: &f64) -> String {
    format_percent(*value)
}

fn display_loss(value: &Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

#[derive(Serialize)]
struct VarReport {
    observations: usize,
    estimates: Vec<VarRow>,
    expected_shortfall: f64,
}

/// Execute the var command.
pub fn execute(args: VarArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let mut risk = config.risk.clone();
    if let Some(confidence) = args.confidence {
        risk = risk.with_confidence_level(confidence);
    }
    if let Some(simulations) = args.simulations {
        risk = risk.with_monte_carlo_simulations(simulations);
    }
    if let Some(seed) = args.seed {
        risk = risk.with_monte_carlo_seed(seed);
    }
    let risk = checked_risk_config(risk)?;
    if args.horizon_days == 0 {
        anyhow::bail!("--horizon-days must be at least 1");
    }

    let prices = load_prices(&args.data, config)?;
    let returns = daily_returns(&prices)?;

    let rows: Vec<VarRow> = estimate_all(returns.values(), &risk)?
        .iter()
        .map(|r| VarRow::new(&r.scaled_to_horizon(args.horizon_days), args.position))
        .collect();
    let es = expected_shortfall(returns.values(), risk.confidence_level)?
        * f64::from(args.horizon_days).sqrt();

    match format {
        OutputFormat::Table => {
            print_header("Value at Risk");
            print_output(&rows, format)?;

            let mut summary = vec![
                KeyValue::new("Observations", returns.len().to_string()),
                KeyValue::from_percent("Expected Shortfall", es),
            ];
            if let (Some((first, _)), Some((last, _))) = (returns.first(), returns.last()) {
                summary.insert(0, KeyValue::new("Period", format!("{first} to {last}")));
            }
            print_output(&summary, format)?;
        }
        OutputFormat::Json => {
            print_json_value(&VarReport {
                observations: returns.len(),
                estimates: rows,
                expected_shortfall: es,
            })?;
        }
        OutputFormat::Csv => {
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{:.6}", row.var);
            }
            println!("{es:.6}");
        }
    }

    Ok(())
}
