//! Low-level HTTP client — `LcfHttp`.
//!
//! One method per service endpoint. Every call measures wall-clock round-trip
//! latency (request through body deserialization) and returns it in a
//! [`Timed`] wrapper. Failures map straight to [`HttpError`]; there is no
//! retry layer, a request either succeeds or surfaces its error.

use crate::domain::features::wire::FeaturesRequest;
use crate::domain::features::FeatureValues;
use crate::domain::light_curve::LightCurve;
use crate::error::HttpError;
use crate::shared::Timed;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the light-curve feature service.
///
/// The base URL names either the service root
/// (`http://features.lc.snad.space`) or a fully versioned endpoint
/// (`http://features.lc.snad.space/api/latest`); [`extract`](Self::extract)
/// and [`extract_custom`](Self::extract_custom) resolve relative to it, the
/// `*_at` variants always address `{base}/api/{version}/`.
#[derive(Debug, Clone)]
pub struct LcfHttp {
    base_url: String,
    client: Client,
}

impl LcfHttp {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        let builder = Client::builder().timeout(timeout).pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Extraction ───────────────────────────────────────────────────────

    /// Default features: POST `{base}` with `{"light_curve": [...]}`.
    pub async fn extract(
        &self,
        light_curve: &LightCurve,
    ) -> Result<Timed<FeatureValues>, HttpError> {
        self.post(&self.base_url, &FeaturesRequest::new(light_curve))
            .await
    }

    /// Default features at a pinned API version:
    /// POST `{base}/api/{version}/`.
    pub async fn extract_at(
        &self,
        version: &str,
        light_curve: &LightCurve,
    ) -> Result<Timed<FeatureValues>, HttpError> {
        let url = format!("{}/api/{}/", self.base_url, version);
        self.post(&url, &FeaturesRequest::new(light_curve)).await
    }

    /// Custom features: POST `{base}/features` with
    /// `{"light_curve": ..., "extractor": ...}`. The extractor is serialized
    /// verbatim; the response shape depends on it and is returned raw.
    pub async fn extract_custom<E: Serialize>(
        &self,
        light_curve: &LightCurve,
        extractor: &E,
    ) -> Result<Timed<serde_json::Value>, HttpError> {
        let url = format!("{}/features", self.base_url);
        self.post(&url, &FeaturesRequest::with_extractor(light_curve, extractor))
            .await
    }

    /// Custom features at a pinned API version:
    /// POST `{base}/api/{version}/features`.
    pub async fn extract_custom_at<E: Serialize>(
        &self,
        version: &str,
        light_curve: &LightCurve,
        extractor: &E,
    ) -> Result<Timed<serde_json::Value>, HttpError> {
        let url = format!("{}/api/{}/features", self.base_url, version);
        self.post(&url, &FeaturesRequest::with_extractor(light_curve, extractor))
            .await
    }

    // ── Service metadata ─────────────────────────────────────────────────

    /// List the API versions the service serves: GET `{base}/versions`.
    pub async fn versions(&self) -> Result<Timed<Vec<String>>, HttpError> {
        let url = format!("{}/versions", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<Timed<T>, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Timed<T>, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Timed<T>, HttpError> {
        let started = Instant::now();

        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            let elapsed = started.elapsed();
            tracing::debug!(
                %method,
                url,
                status = status.as_u16(),
                elapsed_ms = elapsed.as_secs_f64() * 1e3,
                "Request completed"
            );
            return Ok(Timed::new(parsed, elapsed));
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(%method, url, status = status_code, "Request failed");

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
