//! Top-level configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataConfig;
use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::risk::RiskConfig;

/// Complete application configuration, as read from a TOML file.
///
/// ```toml
/// [risk]
/// confidence_level = 0.95
/// monte_carlo_simulations = 10000
/// horizon_days = 10
///
/// [data]
/// data_dir = "data/processed"
///
/// [data.tickers]
/// "S&P 500" = "sp500"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Estimation and backtest parameters.
    pub risk: RiskConfig,
    /// Price file location.
    pub data: DataConfig,
}

impl AppConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Qualifies each error's field with its table name, e.g. `risk.horizon_days`.
fn prefixed(
    section: &'static str,
    errors: Vec<ValidationError>,
) -> impl Iterator<Item = ValidationError> {
    errors.into_iter().map(move |mut e| {
        e.field = format!("{section}.{}", e.field);
        e
    })
}

impl Validate for AppConfig {
    fn validate(&self) -> Vec<ValidationError> {
        prefixed("risk", self.risk.validate())
            .chain(prefixed("data", self.data.validate()))
            .collect()
    }
}
