//! Price data location configuration.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Where persisted price files live and which instruments they cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `YYYY-MM-DD_<keyword>.csv` price files.
    pub data_dir: PathBuf,

    /// First date of the price history.
    ///
    /// Carried for compatibility with existing configuration files; prices
    /// are only read from disk, so nothing consumes it.
    pub start_date: String,

    /// Display name to file keyword, e.g. `"S&P 500" -> "sp500"`.
    pub tickers: BTreeMap<String, String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        let tickers = [("S&P 500", "sp500"), ("NASDAQ", "nasdaq")]
            .into_iter()
            .map(|(name, keyword)| (name.to_string(), keyword.to_string()))
            .collect();
        Self {
            data_dir: PathBuf::from("data").join("processed"),
            start_date: "2017-01-01".to_string(),
            tickers,
        }
    }
}

impl DataConfig {
    /// Resolves a ticker display name or a raw keyword to a file keyword.
    pub fn keyword_for<'a>(&'a self, name_or_keyword: &'a str) -> &'a str {
        self.tickers
            .get(name_or_keyword)
            .map_or(name_or_keyword, String::as_str)
    }
}

impl Validate for DataConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.data_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new("data_dir", "Data directory cannot be empty"));
        }

        for (name, keyword) in &self.tickers {
            if keyword.is_empty() || keyword.contains(['/', '\\']) {
                errors.push(ValidationError::with_rule(
                    format!("tickers.{name}"),
                    "Keyword must be a non-empty file name fragment",
                    "file_keyword",
                ));
            }
        }

        if self.start_date.len() != 10 || self.start_date.split('-').count() != 3 {
            errors.push(ValidationError::with_rule(
                "start_date",
                "Start date must be formatted YYYY-MM-DD",
                "iso_date",
            ));
        }

        errors
    }
}
