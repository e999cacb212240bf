//! Feature results domain — responses from the extraction endpoints.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use std::collections::HashMap;

/// Feature values keyed by feature name, e.g. `{"amplitude_magn": 0.42}`.
///
/// The default extraction endpoints return a flat name-to-value map. The
/// custom `/features` endpoint response shape depends on the submitted
/// extractor configuration and stays a raw `serde_json::Value`.
pub type FeatureValues = HashMap<String, f64>;
