//! Cached snapshot tier.

use super::{CatalogSource, SourceTier};
use crate::error::{Result, SourceError};
use crate::store::{SettingsStore, SETTING_CATALOG_SNAPSHOT};
use async_trait::async_trait;
use std::sync::Arc;

/// Reads the catalog snapshot written by the last successful remote fetch.
///
/// The snapshot is returned as-is; there is no expiry and no revalidation.
pub struct CacheSource {
    store: Arc<dyn SettingsStore>,
}

impl CacheSource {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogSource for CacheSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Cache
    }

    fn describe(&self) -> String {
        format!("settings key {}", SETTING_CATALOG_SNAPSHOT)
    }

    async fn fetch(&self) -> Result<String> {
        self.store
            .get(SETTING_CATALOG_SNAPSHOT)
            .await?
            .ok_or(SourceError::CacheMiss)
    }
}
