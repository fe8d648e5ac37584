//! Error types for bc2score.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for bc2score operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bc2score operations.
///
/// Only whole-run failures live here. Problems with individual input lines
/// never surface as errors; they are counted and reported in the summary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An input file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file missing, malformed or out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization of a report failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
