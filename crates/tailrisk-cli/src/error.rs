//! CLI error types.

use thiserror::Error;

use tailrisk_config::ConfigError;
use tailrisk_ext_file::FileError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Price data could not be loaded.
    #[error("Data error: {0}")]
    Data(#[from] FileError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
