//! Durable settings storage
//!
//! A small key-value store with string values. It backs the cached catalog
//! snapshot and the player shell's display preference. Values are opaque
//! strings so the snapshot can be stored verbatim as fetched.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_catalog::store::{self, FileSettingsStore, SettingsStore};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSettingsStore::new(".cadence/settings.json");
//!
//! store::set_flag(&store, store::SETTING_GRADIENT_BACKGROUND, true).await?;
//! let enabled = store::get_flag(&store, store::SETTING_GRADIENT_BACKGROUND).await?;
//! # Ok(())
//! # }
//! ```

use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, StoreError>;

// Setting key constants
/// Last successfully fetched remote catalog, stored verbatim
pub const SETTING_CATALOG_SNAPSHOT: &str = "catalog.snapshot";

/// Gradient background display preference ("true"/"false")
pub const SETTING_GRADIENT_BACKGROUND: &str = "ui.gradient_background";

/// Durable key-value storage
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key has never been set
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value; returns whether something was removed
    async fn remove(&self, key: &str) -> Result<bool>;
}

/// Read a boolean-as-string setting
///
/// Anything other than `"true"`/`"false"` reads as `None`.
pub async fn get_flag(store: &dyn SettingsStore, key: &str) -> Result<Option<bool>> {
    Ok(match store.get(key).await?.as_deref() {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    })
}

/// Write a boolean-as-string setting
pub async fn set_flag(store: &dyn SettingsStore, key: &str, value: bool) -> Result<()> {
    store.set(key, if value { "true" } else { "false" }).await
}

/// Settings persisted as a single JSON object file
///
/// Writes go through a sibling temp file followed by a rename, so a crash
/// mid-write leaves the previous contents intact.
pub struct FileSettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSettingsStore {
    /// Create a store backed by `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Current contents for a read-modify-write
    ///
    /// A corrupt file reads as empty so the next write replaces it.
    async fn read_for_write(&self) -> Result<BTreeMap<String, String>> {
        match self.read_all().await {
            Err(StoreError::Serialization(e)) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt settings file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write_all(&self, settings: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let raw = serde_json::to_string_pretty(settings)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), keys = settings.len(), "Settings written");
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut settings = self.read_for_write().await?;
        settings.insert(key.to_string(), value.to_string());
        self.write_all(&settings).await
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut settings = self.read_for_write().await?;
        if settings.remove(key).is_none() {
            return Ok(false);
        }
        self.write_all(&settings).await?;
        Ok(true)
    }
}

/// In-memory settings, lost when dropped
#[derive(Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.values.write().await.remove(key).is_some())
    }
}
