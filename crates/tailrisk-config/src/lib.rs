//! tailrisk Configuration Layer
//!
//! Explicit configuration for VaR estimation and backtesting. Every
//! computation in `tailrisk-risk` takes its parameters from these structures
//! (or from plain arguments); there are no module-level globals.
//!
//! # Features
//!
//! - **Risk Configuration**: confidence level, Monte Carlo settings, VaR
//!   horizon, rolling window, annualisation constants
//! - **Data Configuration**: price-file directory and ticker keywords
//! - **Validation**: field-level checks through the [`Validate`] trait
//! - **TOML loading**: every field optional, defaults fill the gaps
//!
//! # Example
//!
//! ```rust
//! use tailrisk_config::{AppConfig, Validate};
//!
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [risk]
//!     confidence_level = 0.99
//!     monte_carlo_seed = 7
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.risk.confidence_level, 0.99);
//! assert_eq!(config.risk.monte_carlo_simulations, 10_000);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod app;
mod data;
mod error;
mod risk;

pub use app::AppConfig;
pub use data::DataConfig;
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use risk::RiskConfig;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::app::AppConfig;
    pub use crate::data::DataConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::risk::RiskConfig;
}
