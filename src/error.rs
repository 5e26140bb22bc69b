//! Error types for perf-compare

use thiserror::Error;

/// Result type alias for perf-compare operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for perf-compare
///
/// Load failures never surface here; the loader logs them and returns an
/// empty record list instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
