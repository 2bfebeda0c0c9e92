/// Core error types for Cadence
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cadence
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog JSON could not be parsed into the track list shape
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
