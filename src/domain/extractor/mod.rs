//! Extractor configuration domain.
//!
//! The `/features` endpoints accept a nested, named-variant configuration
//! tree selecting which features the service computes and with what
//! parameters. The service validates the tree; the client only serializes it.
//!
//! Two representations are supported:
//! - typed — the enums below, externally tagged so they serialize to the
//!   exact wire format (`{"Amplitude": {}}`, `{"BeyondNStd": {"nstd": 1.0}}`);
//! - opaque — [`FeatureConfig::Custom`] (or any `Serialize` passed straight
//!   to the HTTP layer), forwarded byte-for-byte.

use serde::{Deserialize, Serialize};

// ─── Extractor ───────────────────────────────────────────────────────────────

/// Top-level extractor document: `{"FeatureExtractor": {"features": [...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Extractor {
    FeatureExtractor(FeatureExtractorConfig),
}

impl Extractor {
    /// Build a `FeatureExtractor` document from a list of feature configs.
    pub fn from_features(features: impl IntoIterator<Item = FeatureConfig>) -> Self {
        Extractor::FeatureExtractor(FeatureExtractorConfig {
            features: features.into_iter().collect(),
        })
    }
}

/// Body of the `FeatureExtractor` variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureExtractorConfig {
    pub features: Vec<FeatureConfig>,
}

impl FeatureExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, feature: FeatureConfig) -> Self {
        self.features.push(feature);
        self
    }
}

// ─── Features ────────────────────────────────────────────────────────────────

/// A single feature selection, externally tagged by feature name.
///
/// The variant set mirrors the features the service versions expose. Anything
/// not covered (e.g. `Periodogram` with its nested sub-features) goes through
/// [`FeatureConfig::Custom`] untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureConfig {
    Amplitude {},
    AndersonDarlingNormal {},
    BazinFit {
        algorithm: CurveFitAlgorithm,
        ln_prior: LnPrior,
        inits_bounds: InitsBounds,
    },
    BeyondNStd {
        nstd: f64,
    },
    Cusum {},
    Eta {},
    EtaE {},
    ExcessVariance {},
    InterPercentileRange {
        quantile: f64,
    },
    Kurtosis {},
    LinearFit {},
    LinearTrend {},
    MagnitudePercentageRatio {
        quantile_numerator: f64,
        quantile_denominator: f64,
    },
    MaximumSlope {},
    Mean {},
    MeanVariance {},
    MedianAbsoluteDeviation {},
    MedianBufferRangePercentage {
        quantile: f64,
    },
    PercentAmplitude {},
    PercentDifferenceMagnitudePercentile {
        quantile: f64,
    },
    ReducedChi2 {},
    Skew {},
    StandardDeviation {},
    StetsonK {},
    WeightedMean {},
    /// Opaque pass-through for feature documents this SDK does not model.
    #[serde(untagged)]
    Custom(serde_json::Value),
}

// ─── Curve-fit parameters ────────────────────────────────────────────────────

/// Numeric optimizer for curve-fit features such as `BazinFit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveFitAlgorithm {
    Ceres {
        niterations: u32,
        loss_factor: Option<f64>,
    },
    Lmsder {
        niterations: u32,
    },
    Mcmc {
        niterations: u32,
        fine_tuning_algorithm: Option<Box<CurveFitAlgorithm>>,
    },
}

/// Log-prior selection for curve-fit features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LnPrior {
    Fixed(FixedLnPrior),
}

/// A fixed prior shape: `{"None": {}}`, `{"Normal": {"mu": ..., "sigma": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FixedLnPrior {
    None {},
    LogNormal { mu: f64, sigma: f64 },
    LogUniform { left: f64, right: f64 },
    Normal { mu: f64, sigma: f64 },
    Uniform { left: f64, right: f64 },
}

/// Initial-guess and bounds selection for curve fits. `Default` serializes to
/// the bare string `"Default"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InitsBounds {
    Default,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// The document the service's own demo client sends.
    fn demo_extractor() -> Extractor {
        Extractor::from_features([
            FeatureConfig::Amplitude {},
            FeatureConfig::AndersonDarlingNormal {},
            FeatureConfig::BazinFit {
                algorithm: CurveFitAlgorithm::Ceres {
                    niterations: 10,
                    loss_factor: None,
                },
                ln_prior: LnPrior::Fixed(FixedLnPrior::None {}),
                inits_bounds: InitsBounds::Default,
            },
            FeatureConfig::BeyondNStd { nstd: 1.0 },
        ])
    }

    #[test]
    fn test_demo_extractor_wire_format() {
        let value = serde_json::to_value(demo_extractor()).unwrap();
        let expected = json!({
            "FeatureExtractor": {
                "features": [
                    {"Amplitude": {}},
                    {"AndersonDarlingNormal": {}},
                    {"BazinFit": {
                        "algorithm": {"Ceres": {"niterations": 10, "loss_factor": null}},
                        "ln_prior": {"Fixed": {"None": {}}},
                        "inits_bounds": "Default"
                    }},
                    {"BeyondNStd": {"nstd": 1.0}},
                ]
            }
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn test_demo_extractor_round_trip() {
        let value = serde_json::to_value(demo_extractor()).unwrap();
        let back: Extractor = serde_json::from_value(value).unwrap();
        assert_eq!(back, demo_extractor());
    }

    #[test]
    fn test_custom_feature_passes_through() {
        let doc = json!({"Periodogram": {"peaks": 5, "features": [{"Amplitude": {}}]}});
        let feature = FeatureConfig::Custom(doc.clone());
        assert_eq!(serde_json::to_value(&feature).unwrap(), doc);
    }

    #[test]
    fn test_inits_bounds_default_is_string() {
        let json = serde_json::to_string(&InitsBounds::Default).unwrap();
        assert_eq!(json, r#""Default""#);
    }

    #[test]
    fn test_builder_accumulates_features() {
        let config = FeatureExtractorConfig::new()
            .with(FeatureConfig::Kurtosis {})
            .with(FeatureConfig::BeyondNStd { nstd: 2.0 });
        assert_eq!(config.features.len(), 2);
    }
}
