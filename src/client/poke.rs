//! PokeAPI Client
//!
//! Fetches raw response bodies through an injected [`Cache`] and decodes them.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, instrument, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::LocationAreaPage;

/// PokeAPI client backed by a response cache.
///
/// Cloning is cheap; clones share the HTTP connection pool and the cache.
#[derive(Debug, Clone)]
pub struct PokeClient {
    /// HTTP client
    http: reqwest::Client,
    /// Response bodies keyed by request URL
    cache: Arc<Cache>,
    /// First location-area listing page
    first_page_url: String,
}

impl PokeClient {
    /// Creates a client from configuration and a shared cache.
    ///
    /// # Errors
    /// Returns `ClientError::Http` if the HTTP client cannot be built.
    pub fn new(config: &Config, cache: Arc<Cache>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            cache,
            first_page_url: config.location_area_url(),
        })
    }

    /// URL of the first location-area listing page.
    pub fn first_page_url(&self) -> &str {
        &self.first_page_url
    }

    /// The cache this client reads through.
    pub fn cache(&self) -> &Arc<Cache> {
        &self.cache
    }

    /// Returns the body at `url`, from the cache when possible.
    ///
    /// Only successful responses are cached. The body is stored as-is,
    /// whether or not it later decodes.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> ClientResult<Bytes> {
        if let Some(body) = self.cache.get(url).await {
            debug!(bytes = body.len(), "Cache hit");
            return Ok(body);
        }

        debug!("Cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Unexpected response status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    /// Fetches and decodes one page of the location-area listing.
    pub async fn location_areas(&self, url: &str) -> ClientResult<LocationAreaPage> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
