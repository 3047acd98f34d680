//! Dated closing-price CSV files.
//!
//! Files are named `YYYY-MM-DD_<keyword>.csv`, where the date is the day the
//! prices were retrieved. Each holds a header row, a date column and one or
//! more price columns.

use std::fs;
use std::path::{Path, PathBuf};

use tailrisk_core::{Date, PriceSeries};

use crate::error::{FileError, FileResult};

// =============================================================================
// FILE NAMING
// =============================================================================

/// File name for prices of `keyword` retrieved on `date`.
///
/// ```rust
/// use tailrisk_core::Date;
/// use tailrisk_ext_file::price_file_name;
///
/// let date = Date::from_ymd(2025, 3, 30).unwrap();
/// assert_eq!(price_file_name(date, "sp500"), "2025-03-30_sp500.csv");
/// ```
pub fn price_file_name(date: Date, keyword: &str) -> String {
    format!("{date}_{keyword}.csv")
}

/// Retrieval date encoded in `file_name`, if it is a price file for `keyword`.
fn dated_price_file(file_name: &str, keyword: &str) -> Option<Date> {
    let suffix = format!("_{keyword}.csv");
    let prefix = file_name.strip_suffix(suffix.as_str())?;
    Date::parse(prefix).ok()
}

/// Most recently dated price file for `keyword` in `dir`.
///
/// Names that do not follow `YYYY-MM-DD_<keyword>.csv` exactly are ignored.
pub fn find_latest_price_file(dir: impl AsRef<Path>, keyword: &str) -> FileResult<PathBuf> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| FileError::io(dir, e))?;

    let mut latest: Option<(Date, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|e| FileError::io(dir, e))?;
        let name = entry.file_name();
        let Some(date) = name.to_str().and_then(|n| dated_price_file(n, keyword)) else {
            continue;
        };
        if latest.as_ref().map_or(true, |(best, _)| date > *best) {
            latest = Some((date, entry.path()));
        }
    }

    latest.map(|(_, path)| path).ok_or_else(|| FileError::NoMatchingFile {
        dir: dir.display().to_string(),
        keyword: keyword.to_string(),
    })
}

// =============================================================================
// READING
// =============================================================================

/// Reads a closing-price series from a CSV file.
///
/// - The date column is the first header containing `date` (any case),
///   otherwise the first column.
/// - The price column is `column` when given, otherwise the first column
///   after the date column.
/// - Rows whose date or price does not parse, and NaN prices, are skipped.
///   This drops the extra header rows some vendors write below the first.
pub fn read_price_series(path: impl AsRef<Path>, column: Option<&str>) -> FileResult<PriceSeries> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h.to_lowercase().contains("date"))
        .unwrap_or(0);
    let price_idx = match column {
        Some(name) => headers.iter().position(|h| h == name),
        None => (date_idx + 1 < headers.len()).then_some(date_idx + 1),
    }
    .ok_or_else(|| FileError::MissingColumn {
        column: column.unwrap_or("<price>").to_string(),
        path: path.display().to_string(),
    })?;

    let mut points = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let date = record.get(date_idx).and_then(|s| Date::parse_lenient(s).ok());
        let price = record
            .get(price_idx)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|p| !p.is_nan());
        match (date, price) {
            (Some(date), Some(price)) => points.push((date, price)),
            _ => {
                log::debug!("skipping row {:?} in {}", record.position(), path.display());
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        log::debug!("skipped {skipped} unparsable rows in {}", path.display());
    }

    Ok(PriceSeries::from_points(points)?)
}

/// Reads the most recent price file for `keyword` in `dir`.
pub fn load_latest_price_series(
    dir: impl AsRef<Path>,
    keyword: &str,
    column: Option<&str>,
) -> FileResult<PriceSeries> {
    let path = find_latest_price_file(dir, keyword)?;
    log::info!("loading prices from {}", path.display());
    read_price_series(&path, column)
}

// =============================================================================
// WRITING
// =============================================================================

/// Writes a price series as a two-column `Date,<column_name>` CSV.
pub fn write_price_series(
    path: impl AsRef<Path>,
    series: &PriceSeries,
    column_name: &str,
) -> FileResult<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Date", column_name])?;
    for (date, price) in series.as_series().iter() {
        writer.write_record([date.to_string(), price.to_string()])?;
    }
    writer.flush().map_err(|e| FileError::io(path, e))
}

/// Saves prices retrieved on `date` as `<dir>/YYYY-MM-DD_<keyword>.csv`
/// with a `<keyword>_close` column, creating `dir` if needed.
pub fn save_price_file(
    dir: impl AsRef<Path>,
    date: Date,
    keyword: &str,
    series: &PriceSeries,
) -> FileResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| FileError::io(dir, e))?;
    let path = dir.join(price_file_name(date, keyword));
    write_price_series(&path, series, &format!("{keyword}_close"))?;
    log::info!("saved {} prices to {}", series.len(), path.display());
    Ok(path)
}
