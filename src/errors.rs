//! Unified error types for the reservation service.
//!
//! Dataset failures are normally absorbed by the loader (see [`crate::db`]),
//! so most of these only reach the HTTP layer when something is genuinely broken.

use thiserror::Error;

/// Every error the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Filesystem read failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file was read but its content did not decode.
    #[error("Failed to parse dataset '{dataset}': {message}")]
    DatasetParse {
        /// Logical dataset name
        dataset: String,
        /// Decoder message
        message: String,
    },

    /// Aggregation did not run to completion (the worker task panicked or was cancelled).
    #[error("Aggregation failed: {message}")]
    Aggregation {
        /// Description of the failed task
        message: String,
    },

    /// The HTTP server could not bind or stopped unexpectedly.
    #[error("Server error: {message}")]
    Server {
        /// Human-readable description of the problem
        message: String,
    },
}

impl Error {
    /// Stable machine-readable code, surfaced as `code` in API error bodies.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::DatasetParse { .. } => "DATASET_PARSE_ERROR",
            Self::Aggregation { .. } => "AGGREGATION_ERROR",
            Self::Server { .. } => "SERVER_ERROR",
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Aggregation {
            message: err.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
