//! Features sub-client — default and custom extraction requests.

use crate::client::LcfClient;
use crate::domain::features::FeatureValues;
use crate::domain::light_curve::LightCurve;
use crate::error::SdkError;
use crate::network::LATEST_VERSION;
use crate::shared::Timed;
use serde::Serialize;

/// Sub-client for the feature extraction endpoints.
pub struct Features<'a> {
    pub(crate) client: &'a LcfClient,
}

impl<'a> Features<'a> {
    /// Extract the default feature set at the `latest` API version.
    pub async fn latest(
        &self,
        light_curve: &LightCurve,
    ) -> Result<Timed<FeatureValues>, SdkError> {
        Ok(self
            .client
            .http
            .extract_at(LATEST_VERSION, light_curve)
            .await?)
    }

    /// Extract the default feature set at a pinned API version
    /// (e.g. `"v0.5"`).
    pub async fn at(
        &self,
        version: &str,
        light_curve: &LightCurve,
    ) -> Result<Timed<FeatureValues>, SdkError> {
        Ok(self.client.http.extract_at(version, light_curve).await?)
    }

    /// Extract a custom feature set at the `latest` API version. The
    /// extractor configuration is serialized verbatim and the response is
    /// returned raw.
    pub async fn custom<E: Serialize>(
        &self,
        light_curve: &LightCurve,
        extractor: &E,
    ) -> Result<Timed<serde_json::Value>, SdkError> {
        Ok(self
            .client
            .http
            .extract_custom_at(LATEST_VERSION, light_curve, extractor)
            .await?)
    }

    /// Extract a custom feature set at a pinned API version.
    pub async fn custom_at<E: Serialize>(
        &self,
        version: &str,
        light_curve: &LightCurve,
        extractor: &E,
    ) -> Result<Timed<serde_json::Value>, SdkError> {
        Ok(self
            .client
            .http
            .extract_custom_at(version, light_curve, extractor)
            .await?)
    }
}
