//! Integration tests for tailrisk-risk.
//!
//! These tests run the full rolling backtest: prices to returns, rolling
//! volatility to a VaR threshold series, forward returns, explicit join,
//! breach detection and the statistical tests.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tailrisk_config::RiskConfig;
use tailrisk_core::{Date, PriceSeries};
use tailrisk_risk::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// Geometric random walk with daily volatility `sigma`.
fn simulated_prices(days: usize, sigma: f64, seed: u64) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let shocks = Normal::new(0.0, sigma).unwrap();
    let start = Date::from_ymd(2018, 1, 1).unwrap();

    let mut price = 100.0;
    let mut dates = Vec::with_capacity(days);
    let mut closes = Vec::with_capacity(days);
    for i in 0..days {
        dates.push(start.add_days(i as i64));
        closes.push(price);
        price *= f64::exp(shocks.sample(&mut rng));
    }
    PriceSeries::new(dates, closes).unwrap()
}

fn rolling_backtest(prices: &PriceSeries, config: &RiskConfig) -> VarBacktest {
    let log_r = log_returns(prices).unwrap();
    let vol = rolling_volatility(&log_r, config.rolling_window).unwrap();
    let z = z_score(config.confidence_level).unwrap();
    let thresholds = parametric_var_series(&vol, z, config.horizon_days).drop_missing();
    let forward = forward_log_returns(prices, config.horizon_days).unwrap();

    let (fwd, var) = forward.inner_join(&thresholds);
    let breaches = detect_breaches(&fwd, &var).unwrap();
    run_backtest(breaches.values(), config.confidence_level).unwrap()
}

// =============================================================================
// ROLLING BACKTEST
// =============================================================================

#[test]
fn test_rolling_backtest_on_gaussian_walk() {
    let prices = simulated_prices(1_500, 0.01, 7);
    let config = RiskConfig::standard().with_horizon_days(1);
    let report = rolling_backtest(&prices, &config);

    // 1500 prices, 1499 returns, the first 20 lack a full window, and the
    // last price has no forward return.
    assert_eq!(report.kupiec.n, 1_499 - 20 - 1);
    assert!(report.summary.rate > 0.02 && report.summary.rate < 0.09);
    assert!(report.kupiec.is_defined());
    assert_eq!(report.christoffersen.counts.total(), report.kupiec.n - 1);
}

#[test]
fn test_ten_day_horizon_alignment() {
    let prices = simulated_prices(300, 0.01, 11);
    let config = RiskConfig::standard();
    let log_r = log_returns(&prices).unwrap();
    let vol = rolling_volatility(&log_r, config.rolling_window).unwrap();
    let thresholds = parametric_var_series(&vol, -1.645, config.horizon_days).drop_missing();
    let forward = forward_log_returns(&prices, config.horizon_days).unwrap();

    assert_eq!(thresholds.len(), 299 - 20);
    assert_eq!(forward.len(), 290);
    // Unjoined series are rejected, never truncated.
    assert!(matches!(
        detect_breaches(&forward, &thresholds),
        Err(RiskError::Misaligned { .. })
    ));

    let (fwd, var) = forward.inner_join(&thresholds);
    assert_eq!(fwd.dates(), var.dates());
    assert_eq!(fwd.len(), 290 - 21);
    assert_eq!(fwd.dates()[0], prices.dates()[21]);
}

#[test]
fn test_breaches_from_understated_risk_fail_kupiec() {
    let prices = simulated_prices(1_000, 0.02, 3);
    let log_r = log_returns(&prices).unwrap();
    let vol = rolling_volatility(&log_r, 21).unwrap();
    // Half the true volatility: far too many breaches.
    let halved = vol.map(|v| v.map(|s| s * 0.5));
    let thresholds = parametric_var_series(&halved, z_score(0.95).unwrap(), 1).drop_missing();
    let forward = forward_log_returns(&prices, 1).unwrap();
    let (fwd, var) = forward.inner_join(&thresholds);
    let breaches = detect_breaches(&fwd, &var).unwrap();

    let report = run_backtest(breaches.values(), 0.95).unwrap();
    assert!(report.summary.rate > 0.15);
    assert!(report.kupiec.p_value < 0.001);
    assert!(!report.passes(0.05));
}

// =============================================================================
// ESTIMATORS ON DAILY RETURNS
// =============================================================================

#[test]
fn test_estimators_agree_on_gaussian_returns() {
    let prices = simulated_prices(2_000, 0.01, 21);
    let returns = daily_returns(&prices).unwrap();
    let config = RiskConfig::standard().with_monte_carlo_seed(5);

    let results = estimate_all(returns.values(), &config).unwrap();
    let hist = results[0].var;
    let param = results[1].var;
    let mc = results[2].var;

    assert_relative_eq!(param, 0.01645, max_relative = 0.15);
    assert_relative_eq!(hist, param, max_relative = 0.15);
    assert_relative_eq!(mc, param, max_relative = 0.05);

    let es = expected_shortfall(returns.values(), 0.95).unwrap();
    assert!(es > hist);
}

#[test]
fn test_estimators_are_swappable() {
    let returns = daily_returns(&simulated_prices(250, 0.015, 2)).unwrap();
    let estimators: Vec<Box<dyn VarEstimator>> = vec![
        Box::new(HistoricalVar),
        Box::new(ParametricVar),
        Box::new(MonteCarloVar::new(20_000).with_seed(9)),
    ];
    for estimator in &estimators {
        let result = estimator.estimate_result(returns.values(), 0.99).unwrap();
        assert_eq!(result.method, estimator.method());
        assert!(result.var > 0.0);
        assert!(result.scaled_to_horizon(10).var > result.var);
    }
}

#[test]
fn test_empty_series_is_rejected_everywhere() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(historical_var(&[], 0.95), Err(RiskError::EmptyInput { .. })));
    assert!(matches!(parametric_var(&[], 0.95), Err(RiskError::EmptyInput { .. })));
    assert!(matches!(
        monte_carlo_var(&[], 0.95, 1_000, &mut rng),
        Err(RiskError::EmptyInput { .. })
    ));
    assert!(matches!(expected_shortfall(&[], 0.95), Err(RiskError::EmptyInput { .. })));
}

#[test]
fn test_performance_summary_on_random_walk() {
    let prices = simulated_prices(500, 0.01, 4);
    let returns = daily_returns(&prices).unwrap();
    let summary = performance_summary(returns.values(), 0.02, 252).unwrap();
    assert_eq!(summary.observations, 499);
    assert_relative_eq!(summary.annualized_volatility, 0.01 * 252.0_f64.sqrt(), max_relative = 0.15);
}
