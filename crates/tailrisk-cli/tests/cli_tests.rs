//! End-to-end tests of the `tailrisk` binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tailrisk_core::Date;
use tempfile::TempDir;

/// Writes a price file in the persisted layout with `n` trading days.
fn write_prices(dir: &Path, name: &str, n: usize, price: impl Fn(usize) -> f64) {
    let mut content = String::from("Date,sp500_close\n");
    let start = Date::from_ymd(2022, 1, 3).unwrap();
    for i in 0..n {
        let date = start.add_days(i as i64);
        content.push_str(&format!("{date},{:.4}\n", price(i)));
    }
    std::fs::write(dir.join(name), content).unwrap();
}

fn wavy(i: usize) -> f64 {
    let t = i as f64;
    100.0 * (1.0 + 0.0004 * t) + 3.0 * (t * 0.7).sin() + 1.5 * (t * 2.3).cos()
}

fn tailrisk(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tailrisk").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("TAILRISK_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_prices(dir.path(), "2024-01-02_sp500.csv", 300, wavy);
    dir
}

#[test]
fn test_var_json() {
    let dir = data_dir();
    tailrisk(&dir)
        .args(["var", "--data-dir", ".", "--keyword", "sp500", "--seed", "7", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Historical\""))
        .stdout(predicate::str::contains("\"Monte Carlo\""))
        .stdout(predicate::str::contains("expected_shortfall"));
}

#[test]
fn test_var_seed_is_reproducible() {
    let dir = data_dir();
    let run = || {
        tailrisk(&dir)
            .args(["var", "-d", ".", "-k", "sp500", "--seed", "42", "--format", "minimal"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_var_resolves_ticker_name() {
    let dir = data_dir();
    tailrisk(&dir)
        .args(["var", "-d", ".", "-k", "S&P 500", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("method,confidence_level,horizon_days,var,loss"));
}

#[test]
fn test_backtest_table() {
    let dir = data_dir();
    tailrisk(&dir)
        .args(["backtest", "-d", ".", "-k", "sp500", "--window", "20", "--horizon", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kupiec p-value"))
        .stdout(predicate::str::contains("Independence LR"));
}

#[test]
fn test_backtest_json_counts() {
    let dir = data_dir();
    tailrisk(&dir)
        .args([
            "backtest", "-d", ".", "-k", "sp500", "--window", "20", "--horizon", "5", "-f", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"observations\": 275"));
}

#[test]
fn test_missing_keyword_fails() {
    let dir = data_dir();
    tailrisk(&dir)
        .args(["var", "-d", ".", "-k", "nasdaq"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no price file matching 'nasdaq'"));
}

#[test]
fn test_stats_constant_prices() {
    let dir = tempfile::tempdir().unwrap();
    write_prices(dir.path(), "2024-01-02_flat.csv", 30, |_| 50.0);
    tailrisk(&dir)
        .args(["stats", "-d", ".", "-k", "flat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero variance"));
}

#[test]
fn test_stats_minimal() {
    let dir = data_dir();
    tailrisk(&dir)
        .args(["stats", "-d", ".", "-k", "sp500", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^-?\d+\.\d{6} \d+\.\d{6} -?\d+\.\d{4}\n$").unwrap());
}

#[test]
fn test_config_show_defaults() {
    let dir = tempfile::tempdir().unwrap();
    tailrisk(&dir)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confidence_level = 0.95"));
}

#[test]
fn test_config_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tailrisk.toml"), "[risk]\nconfidence_level = 0.99\n").unwrap();
    tailrisk(&dir)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("confidence_level = 0.99"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = data_dir();
    std::fs::write(dir.path().join("bad.toml"), "[risk]\nconfidence_level = 1.5\n").unwrap();
    tailrisk(&dir)
        .args(["--config", "bad.toml", "var", "-d", ".", "-k", "sp500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confidence_level"));
}

#[test]
fn test_config_write_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    tailrisk(&dir)
        .args(["config", "--write", "out.toml"])
        .assert()
        .success();
    let written = std::fs::read_to_string(dir.path().join("out.toml")).unwrap();
    assert!(written.contains("[risk]"));
    assert!(written.contains("[data]"));
}
