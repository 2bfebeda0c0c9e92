//! Error types for catalog loading.

use crate::sources::SourceTier;
use thiserror::Error;

/// Errors raised by a single catalog tier.
///
/// None of these reach the user directly: the loader records them and falls
/// through to the next tier.
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP request failed (connection refused, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error ({status})")]
    Status { status: u16 },

    /// Invalid catalog URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Body was not a catalog
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// No snapshot has been cached yet
    #[error("No cached catalog snapshot")]
    CacheMiss,

    /// IO error while reading a local catalog
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings store could not be read
    #[error("Settings store error: {0}")]
    Store(#[from] StoreError),
}

/// Coarse classification used for logging and fallback reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Remote fetch rejected or non-success
    Network,

    /// Malformed catalog JSON
    Parse,

    /// Nothing to read (cache miss, missing file)
    Missing,

    /// Local storage could not be read
    Storage,
}

impl SourceError {
    /// Classify this error
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Request(_) | Self::Status { .. } | Self::InvalidUrl(_) => FailureKind::Network,
            Self::Parse(_) => FailureKind::Parse,
            Self::CacheMiss => FailureKind::Missing,
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => FailureKind::Missing,
            Self::Io(_) | Self::Store(_) => FailureKind::Storage,
        }
    }
}

impl From<cadence_core::CoreError> for SourceError {
    fn from(err: cadence_core::CoreError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Record of one tier that did not produce a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierFailure {
    /// Tier that failed
    pub tier: SourceTier,

    /// Failure classification
    pub kind: FailureKind,

    /// Human readable reason
    pub message: String,
}

/// Terminal catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Every tier failed; the shell should fall back to an empty catalog
    #[error("Catalog unavailable: all {} tiers failed", .attempts.len())]
    Unavailable { attempts: Vec<TierFailure> },
}

/// Errors from the durable settings store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for a single tier.
pub type Result<T> = std::result::Result<T, SourceError>;
