//! Error types for price file access.

use tailrisk_core::CoreError;
use thiserror::Error;

/// A specialized Result type for price file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while locating, reading or writing price files.
#[derive(Error, Debug)]
pub enum FileError {
    /// No file in the directory matches `YYYY-MM-DD_<keyword>.csv`.
    #[error("no price file matching '{keyword}' in {dir}")]
    NoMatchingFile {
        /// Directory that was searched.
        dir: String,
        /// File keyword that was looked for.
        keyword: String,
    },

    /// Filesystem error.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being accessed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested column is not in the header.
    #[error("column '{column}' not found in {path}")]
    MissingColumn {
        /// Column that was requested.
        column: String,
        /// File being read.
        path: String,
    },

    /// The parsed rows do not form a valid price series.
    #[error("invalid price series: {0}")]
    Series(#[from] CoreError),
}

impl FileError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
