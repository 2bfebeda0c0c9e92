//! Local file tier.

use super::{CatalogSource, SourceTier};
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a static catalog file shipped with the player.
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for LocalFileSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Local
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        debug!(path = %self.path.display(), "Reading local catalog");
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
