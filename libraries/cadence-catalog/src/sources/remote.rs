//! Remote catalog tier.

use super::{CatalogSource, SourceTier};
use crate::error::{Result, SourceError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the catalog with a single plain GET.
pub struct RemoteSource {
    http: Client,
    url: Url,
}

impl RemoteSource {
    /// Create a source for `url` with the default timeout.
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a source for `url` with a custom request timeout.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url.trim()).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(SourceError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .user_agent(format!("Cadence/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, url })
    }

    /// Catalog URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for RemoteSource {
    fn tier(&self) -> SourceTier {
        SourceTier::Remote
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<String> {
        debug!(url = %self.url, "Fetching remote catalog");

        let response = self.http.get(self.url.clone()).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            debug!(bytes = body.len(), "Fetched remote catalog");
            Ok(body)
        } else {
            Err(SourceError::Status {
                status: status.as_u16(),
            })
        }
    }
}
