//! Cadence Catalog
//!
//! Resolves the session's track list from an ordered chain of tiers.
//!
//! # Features
//!
//! - **Remote tier**: plain HTTP GET of the catalog JSON
//! - **Cache tier**: the verbatim body of the last successful remote fetch,
//!   kept in a durable settings store
//! - **Local tier**: a static catalog file
//! - **Settings store**: file-backed or in-memory key-value storage
//!
//! A tier failure (network error, bad status, malformed JSON, missing cache)
//! is never surfaced on its own: the loader falls through to the next tier and
//! only reports `CatalogError::Unavailable` when every tier failed.
//!
//! # Example
//!
//! ```ignore
//! use cadence_catalog::{CatalogLoader, FileSettingsStore, LocalFileSource, RemoteSource};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileSettingsStore::new(".cadence/settings.json"));
//!     let loader = CatalogLoader::standard(
//!         RemoteSource::new("https://music.example.com/songs.json")?,
//!         store,
//!         LocalFileSource::new("songs.json"),
//!     );
//!
//!     match loader.load().await {
//!         Ok(loaded) => println!("Loaded {} tracks from {}", loaded.catalog.len(), loaded.tier),
//!         Err(e) => eprintln!("Error loading tracks: {e}"),
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod loader;
pub mod sources;
pub mod store;

pub use error::{CatalogError, FailureKind, Result, SourceError, StoreError, TierFailure};
pub use loader::{CatalogLoader, LoadedCatalog};
pub use sources::{CacheSource, CatalogSource, LocalFileSource, RemoteSource, SourceTier};
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};
