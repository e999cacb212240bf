//! High-level client — `LcfClient` with a builder and sub-client accessors.
//!
//! The features sub-client lives in `domain/features/client.rs`. This module
//! keeps the builder, the `/versions` cache, and the accessor methods.

use crate::domain::features::client::Features;
use crate::error::SdkError;
use crate::http::LcfHttp;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::features::client::Features as FeaturesClient;

/// The primary entry point for the SDK.
///
/// The base URL is the service root (`http://features.lc.snad.space`);
/// endpoint paths are resolved by the HTTP layer. The list of served API
/// versions rarely changes, so `versions()` is cached with a TTL.
pub struct LcfClient {
    pub(crate) http: LcfHttp,
    /// Versions cache: (versions, fetched_at)
    pub(crate) versions_cache: Arc<RwLock<Option<(Vec<String>, Instant)>>>,
    /// Cache TTL for the versions list
    pub(crate) versions_cache_ttl: Duration,
}

impl LcfClient {
    pub fn builder() -> LcfClientBuilder {
        LcfClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn features(&self) -> Features<'_> {
        Features { client: self }
    }

    /// Access the low-level HTTP client.
    pub fn http(&self) -> &LcfHttp {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Service metadata ─────────────────────────────────────────────────

    /// Get the API versions the service serves. Uses TTL cache.
    pub async fn versions(&self) -> Result<Vec<String>, SdkError> {
        {
            let cache = self.versions_cache.read().await;
            if let Some((versions, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.versions_cache_ttl {
                    return Ok(versions.clone());
                }
            }
        }

        let versions = self.http.versions().await?.into_inner();
        *self.versions_cache.write().await = Some((versions.clone(), Instant::now()));
        Ok(versions)
    }

    /// Drop the cached versions list.
    pub async fn invalidate_versions(&self) {
        *self.versions_cache.write().await = None;
    }
}

impl Clone for LcfClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            versions_cache: self.versions_cache.clone(),
            versions_cache_ttl: self.versions_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LcfClientBuilder {
    base_url: String,
    timeout: Duration,
    versions_cache_ttl: Duration,
}

impl Default for LcfClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            versions_cache_ttl: Duration::from_secs(3600),
        }
    }
}

impl LcfClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn versions_cache_ttl(mut self, ttl: Duration) -> Self {
        self.versions_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<LcfClient, SdkError> {
        Ok(LcfClient {
            http: LcfHttp::with_timeout(&self.base_url, self.timeout),
            versions_cache: Arc::new(RwLock::new(None)),
            versions_cache_ttl: self.versions_cache_ttl,
        })
    }
}
