//! # lcf-client
//!
//! A Rust client SDK for the SNAD light-curve feature extraction web service.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Light curves, extractor configurations, feature results
//! 2. **HTTP API** — `LcfHttp` with one method per service endpoint
//! 3. **High-Level Client** — `LcfClient` with a builder and version caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lcf_client::prelude::*;
//!
//! let client = LcfClient::builder()
//!     .base_url("http://features.lc.snad.space")
//!     .build()?;
//!
//! let light_curve = LightCurve::synthetic(100);
//! let timed = client.features().latest(&light_curve).await?;
//! println!("Requested in {:.3} ms", timed.elapsed_ms());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared utilities used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and CLI base-URL resolution.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client, one method per service endpoint.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `LcfClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::Timed;

    // Domain types — light curve
    pub use crate::domain::light_curve::{LightCurve, Observation};

    // Domain types — extractor configuration
    pub use crate::domain::extractor::{
        CurveFitAlgorithm, Extractor, FeatureConfig, FeatureExtractorConfig, FixedLnPrior,
        InitsBounds, LnPrior,
    };

    // Domain types — feature results
    pub use crate::domain::features::FeatureValues;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{resolve_base_url, DEFAULT_API_URL, LATEST_VERSION};

    // HTTP client + high-level client
    #[cfg(feature = "http")]
    pub use crate::client::{FeaturesClient, LcfClient, LcfClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::LcfHttp;
}
