//! Integration tests for dated price files.

use std::fs;
use std::path::Path;

use tailrisk_core::{Date, PriceSeries};
use tailrisk_ext_file::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn d(day: u32) -> Date {
    Date::from_ymd(2024, 1, day).unwrap()
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const SIMPLE: &str = "Date,sp500_close\n2024-01-02,100.0\n2024-01-03,101.5\n2024-01-04,99.25\n";

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn test_latest_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "2025-03-28_sp500.csv", SIMPLE);
    write(dir.path(), "2025-03-30_sp500.csv", SIMPLE);
    write(dir.path(), "2025-04-02_nasdaq.csv", SIMPLE);
    write(dir.path(), "notes_sp500.csv", SIMPLE);

    let path = find_latest_price_file(dir.path(), "sp500").unwrap();
    assert_eq!(path.file_name().unwrap(), "2025-03-30_sp500.csv");
}

#[test]
fn test_no_matching_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "2025-04-02_nasdaq.csv", SIMPLE);

    let err = find_latest_price_file(dir.path(), "sp500").unwrap_err();
    assert!(matches!(err, FileError::NoMatchingFile { ref keyword, .. } if keyword == "sp500"));
}

#[test]
fn test_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_latest_price_file(dir.path().join("absent"), "sp500").unwrap_err();
    assert!(matches!(err, FileError::Io { .. }));
}

// =============================================================================
// READING
// =============================================================================

#[test]
fn test_read_simple_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "prices.csv", SIMPLE);

    let prices = read_price_series(dir.path().join("prices.csv"), None).unwrap();
    assert_eq!(prices.dates(), &[d(2), d(3), d(4)]);
    assert_eq!(prices.values(), &[100.0, 101.5, 99.25]);
}

#[test]
fn test_vendor_header_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "prices.csv",
        "Price,Close\nTicker,^GSPC\nDate,\n2024-01-02,4742.83\n2024-01-03,4704.81\n",
    );

    let prices = read_price_series(dir.path().join("prices.csv"), None).unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices.values(), &[4742.83, 4704.81]);
}

#[test]
fn test_named_column_and_nan_rows() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "prices.csv",
        "Open,Trade Date,Close\n1,2024-01-02 00:00:00,10.0\n2,2024-01-03,NaN\n3,2024-01-04,12.0\n",
    );

    let prices = read_price_series(dir.path().join("prices.csv"), Some("Close")).unwrap();
    assert_eq!(prices.dates(), &[d(2), d(4)]);
    assert_eq!(prices.values(), &[10.0, 12.0]);

    let default = read_price_series(dir.path().join("prices.csv"), None).unwrap();
    assert_eq!(default, prices);

    let err = read_price_series(dir.path().join("prices.csv"), Some("Volume")).unwrap_err();
    assert!(matches!(err, FileError::MissingColumn { ref column, .. } if column == "Volume"));
}

#[test]
fn test_invalid_prices_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "prices.csv", "Date,Close\n2024-01-02,100\n2024-01-03,-5\n");
    assert!(matches!(
        read_price_series(dir.path().join("prices.csv"), None),
        Err(FileError::Series(_))
    ));
}

#[test]
fn test_header_only_gives_empty_series() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "prices.csv", "Date,Close\n");
    assert!(read_price_series(dir.path().join("prices.csv"), None)
        .unwrap()
        .is_empty());
}

// =============================================================================
// WRITING
// =============================================================================

#[test]
fn test_save_then_load_latest() {
    let dir = tempfile::tempdir().unwrap();
    let series = PriceSeries::new(vec![d(2), d(3), d(5)], vec![100.0, 100.5, 98.125]).unwrap();
    let retrieved = Date::from_ymd(2025, 3, 30).unwrap();

    let path = save_price_file(dir.path().join("processed"), retrieved, "sp500", &series).unwrap();
    assert_eq!(path.file_name().unwrap(), "2025-03-30_sp500.csv");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Date,sp500_close\n2024-01-02,100\n"));

    let loaded = load_latest_price_series(dir.path().join("processed"), "sp500", None).unwrap();
    assert_eq!(loaded, series);

    let by_name =
        load_latest_price_series(dir.path().join("processed"), "sp500", Some("sp500_close"))
            .unwrap();
    assert_eq!(by_name, series);
}
