//! Catalog loader - ordered fallback over catalog tiers
//!
//! Tiers are tried in the order they were added. The first tier whose body
//! parses as a catalog wins; every other outcome falls through to the next.
//! A catalog is never assembled from more than one tier.

use crate::error::{CatalogError, SourceError, TierFailure};
use crate::sources::{CacheSource, CatalogSource, LocalFileSource, RemoteSource, SourceTier};
use crate::store::{SettingsStore, SETTING_CATALOG_SNAPSHOT};
use cadence_core::Catalog;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Catalog produced by a successful load
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// The catalog
    pub catalog: Catalog,

    /// Tier the catalog came from
    pub tier: SourceTier,

    /// Tiers tried (and failed) before the winning one
    pub failures: Vec<TierFailure>,
}

/// Resolves the session catalog from an ordered list of tiers.
///
/// # Example
///
/// ```ignore
/// use cadence_catalog::{CatalogLoader, FileSettingsStore, LocalFileSource, RemoteSource};
/// use std::sync::Arc;
///
/// let store = Arc::new(FileSettingsStore::new(".cadence/settings.json"));
/// let loader = CatalogLoader::standard(
///     RemoteSource::new("https://music.example.com/songs.json")?,
///     store,
///     LocalFileSource::new("songs.json"),
/// );
///
/// let loaded = loader.load().await?;
/// println!("{} tracks from {}", loaded.catalog.len(), loaded.tier);
/// ```
#[derive(Default)]
pub struct CatalogLoader {
    sources: Vec<Box<dyn CatalogSource>>,
    snapshot_store: Option<Arc<dyn SettingsStore>>,
}

impl CatalogLoader {
    /// Create a loader with no tiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Remote, then cached snapshot, then local file
    pub fn standard(
        remote: RemoteSource,
        store: Arc<dyn SettingsStore>,
        local: LocalFileSource,
    ) -> Self {
        Self::new()
            .with_source(remote)
            .with_source(CacheSource::new(Arc::clone(&store)))
            .with_source(local)
            .with_snapshot_store(store)
    }

    /// Append a tier to the chain
    pub fn with_source(self, source: impl CatalogSource + 'static) -> Self {
        self.with_boxed_source(Box::new(source))
    }

    /// Append an already boxed tier to the chain
    pub fn with_boxed_source(mut self, source: Box<dyn CatalogSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Store that receives the verbatim body of every successful remote fetch
    pub fn with_snapshot_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.snapshot_store = Some(store);
        self
    }

    /// Number of configured tiers
    pub fn tier_count(&self) -> usize {
        self.sources.len()
    }

    /// Resolve the catalog
    ///
    /// # Errors
    /// Returns `CatalogError::Unavailable` when every tier failed. Individual
    /// tier failures are never returned on their own.
    pub async fn load(&self) -> Result<LoadedCatalog, CatalogError> {
        let mut failures = Vec::new();

        for source in &self.sources {
            let tier = source.tier();
            debug!(tier = %tier, source = %source.describe(), "Trying catalog tier");

            match Self::fetch_catalog(&**source).await {
                Ok((catalog, body)) => {
                    if tier == SourceTier::Remote {
                        self.write_snapshot(&body).await;
                    }

                    info!(
                        tier = %tier,
                        tracks = catalog.len(),
                        skipped = failures.len(),
                        "Catalog loaded"
                    );

                    return Ok(LoadedCatalog {
                        catalog,
                        tier,
                        failures,
                    });
                }
                Err(e) => {
                    warn!(tier = %tier, kind = ?e.kind(), error = %e, "Catalog tier failed");
                    failures.push(TierFailure {
                        tier,
                        kind: e.kind(),
                        message: e.to_string(),
                    });
                }
            }
        }

        error!(attempts = failures.len(), "No catalog tier succeeded");
        Err(CatalogError::Unavailable { attempts: failures })
    }

    async fn fetch_catalog(source: &dyn CatalogSource) -> Result<(Catalog, String), SourceError> {
        let body = source.fetch().await?;
        let catalog = Catalog::from_json(&body)?;
        Ok((catalog, body))
    }

    async fn write_snapshot(&self, body: &str) {
        let Some(store) = &self.snapshot_store else {
            return;
        };

        // Snapshot write failures never fail the load.
        match store.set(SETTING_CATALOG_SNAPSHOT, body).await {
            Ok(()) => debug!(bytes = body.len(), "Catalog snapshot refreshed"),
            Err(e) => warn!(error = %e, "Failed to persist catalog snapshot"),
        }
    }
}
