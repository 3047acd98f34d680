//! Backtest command implementation.
//!
//! Rolls a parametric VaR forecast over the price history and tests its
//! breaches against realised forward log returns.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tailrisk_config::AppConfig;
use tailrisk_core::{Date, PriceSeries};
use tailrisk_risk::backtest::{expected_shortfall, run_backtest, VarBacktest};
use tailrisk_risk::breach::detect_breaches;
use tailrisk_risk::returns::{
    forward_log_returns, log_returns, parametric_var_series, rolling_volatility, z_score,
};

use crate::cli::{DataArgs, OutputFormat};
use crate::commands::{checked_risk_config, load_prices};
use crate::output::{print_header, print_json_value, print_output, print_success, print_warning, KeyValue};

/// Arguments for the backtest command.
#[derive(Args, Debug)]
pub struct BacktestArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Rolling volatility window in days. Defaults to the configured window.
    #[arg(short, long)]
    pub window: Option<usize>,

    /// VaR horizon in days. Defaults to the configured horizon.
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Confidence level (e.g., 0.99). Defaults to the configured level.
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Significance level for the pass/fail verdict
    #[arg(long, default_value = "0.05")]
    pub significance: f64,
}

/// Backtest output as written in JSON.
#[derive(Debug, Serialize)]
struct BacktestReport {
    start: Date,
    end: Date,
    window: usize,
    horizon_days: usize,
    observations: usize,
    #[serde(flatten)]
    backtest: VarBacktest,
    expected_shortfall: f64,
    significance: f64,
    passes: bool,
}

/// Runs the rolling forecast and breach tests over `prices`.
fn backtest_prices(
    prices: &PriceSeries,
    window: usize,
    horizon: usize,
    confidence: f64,
) -> Result<(Vec<Date>, VarBacktest, f64)> {
    let returns = log_returns(prices)?;
    let volatility = rolling_volatility(&returns, window)?;
    let thresholds = parametric_var_series(&volatility, z_score(confidence)?, horizon).drop_missing();
    let forward = forward_log_returns(prices, horizon)?;

    let (realised, forecasts) = forward.inner_join(&thresholds);
    if realised.len() < 2 {
        anyhow::bail!(
            "{} prices are too few for a {window}-day window and {horizon}-day horizon",
            prices.len()
        );
    }
    tracing::debug!(
        forecasts = forecasts.len(),
        "aligned forecasts with forward returns"
    );

    let breaches = detect_breaches(&realised, &forecasts)?;
    let backtest = run_backtest(breaches.values(), confidence)?;
    let es = expected_shortfall(realised.values(), confidence)?;
    Ok((realised.dates().to_vec(), backtest, es))
}

/// Execute the backtest command.
pub fn execute(args: BacktestArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let mut risk = config.risk.clone();
    if let Some(window) = args.window {
        risk = risk.with_rolling_window(window);
    }
    if let Some(horizon) = args.horizon {
        risk = risk.with_horizon_days(horizon);
    }
    if let Some(confidence) = args.confidence {
        risk = risk.with_confidence_level(confidence);
    }
    let risk = checked_risk_config(risk)?;

    let prices = load_prices(&args.data, config)?;
    let (dates, backtest, es) = backtest_prices(
        &prices,
        risk.rolling_window,
        risk.horizon_days,
        risk.confidence_level,
    )?;
    let passes = backtest.passes(args.significance);

    let (start, end) = match (dates.first(), dates.last()) {
        (Some(&start), Some(&end)) => (start, end),
        _ => anyhow::bail!("no aligned forecasts"),
    };

    if format == OutputFormat::Json {
        return print_json_value(&BacktestReport {
            start,
            end,
            window: risk.rolling_window,
            horizon_days: risk.horizon_days,
            observations: dates.len(),
            backtest,
            expected_shortfall: es,
            significance: args.significance,
            passes,
        });
    }

    if format == OutputFormat::Minimal {
        println!(
            "{} {} {} {}",
            backtest.summary.count,
            backtest.kupiec.p_value,
            backtest.christoffersen.p_value,
            backtest.conditional_coverage.p_value
        );
        return Ok(());
    }

    let rows = vec![
        KeyValue::new("Period", format!("{start} to {end}")),
        KeyValue::new("Observations", dates.len().to_string()),
        KeyValue::new("Window", format!("{} days", risk.rolling_window)),
        KeyValue::new("Horizon", format!("{} days", risk.horizon_days)),
        KeyValue::from_percent("Confidence", risk.confidence_level),
        KeyValue::new("Breaches", backtest.summary.count.to_string()),
        KeyValue::new(
            "Expected Breaches",
            format!("{:.1}", backtest.kupiec.expected_breaches(risk.confidence_level)),
        ),
        KeyValue::from_percent("Breach Rate", backtest.summary.rate),
        KeyValue::from_stat("Kupiec LR", backtest.kupiec.lr, 4),
        KeyValue::from_stat("Kupiec p-value", backtest.kupiec.p_value, 4),
        KeyValue::from_stat("Independence LR", backtest.christoffersen.lr, 4),
        KeyValue::from_stat("Independence p-value", backtest.christoffersen.p_value, 4),
        KeyValue::from_stat("Conditional Coverage LR", backtest.conditional_coverage.lr, 4),
        KeyValue::from_stat(
            "Conditional Coverage p-value",
            backtest.conditional_coverage.p_value,
            4,
        ),
        KeyValue::from_percent("Expected Shortfall", es),
    ];

    if format == OutputFormat::Table {
        print_header("VaR Backtest");
    }
    print_output(&rows, format)?;

    if format == OutputFormat::Table {
        if !backtest.kupiec.is_defined() {
            print_warning("Kupiec test undefined: no breaches or breaches on every day");
        }
        if passes {
            print_success(&format!("No test rejects the model at {}", args.significance));
        } else {
            print_warning(&format!("Model rejected at {}", args.significance));
        }
    }

    Ok(())
}
