//! Catalog tiers
//!
//! Each tier is a `CatalogSource` that produces the raw catalog JSON or fails.
//! Parsing is left to the loader so every tier's body is judged the same way.

mod cache;
mod local;
mod remote;

pub use cache::CacheSource;
pub use local::LocalFileSource;
pub use remote::RemoteSource;

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// Which tier of the fallback chain a source occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTier {
    /// Authoritative remote catalog; success refreshes the snapshot
    Remote,

    /// Snapshot of the last successful remote fetch
    Cache,

    /// Static file shipped alongside the player
    Local,
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Remote => "remote",
            Self::Cache => "cache",
            Self::Local => "local",
        })
    }
}

/// One tier of the catalog fallback chain
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Tier this source occupies
    fn tier(&self) -> SourceTier;

    /// Where the data comes from, for logs
    fn describe(&self) -> String;

    /// Fetch the raw catalog body
    async fn fetch(&self) -> Result<String>;
}
