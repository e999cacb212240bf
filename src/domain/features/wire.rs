//! Request envelope for the extraction endpoints.

use crate::domain::light_curve::LightCurve;
use serde::Serialize;

/// POST body: `{"light_curve": [...]}`, optionally with an `extractor` key.
///
/// The extractor is generic over any `Serialize` so callers can send either
/// the typed [`Extractor`](crate::domain::extractor::Extractor) tree or an
/// opaque `serde_json::Value`; it is forwarded without interpretation.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturesRequest<'a, E: Serialize = ()> {
    pub light_curve: &'a LightCurve,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor: Option<&'a E>,
}

impl<'a> FeaturesRequest<'a, ()> {
    /// Default-features request: light curve only.
    pub fn new(light_curve: &'a LightCurve) -> Self {
        Self {
            light_curve,
            extractor: None,
        }
    }
}

impl<'a, E: Serialize> FeaturesRequest<'a, E> {
    /// Custom-features request: light curve plus extractor configuration.
    pub fn with_extractor(light_curve: &'a LightCurve, extractor: &'a E) -> Self {
        Self {
            light_curve,
            extractor: Some(extractor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::light_curve::Observation;
    use serde_json::json;

    #[test]
    fn test_default_request_has_no_extractor_key() {
        let lc = LightCurve::new(vec![Observation::new(0.0, 0.5, 0.1)]);
        let value = serde_json::to_value(FeaturesRequest::new(&lc)).unwrap();
        assert_eq!(
            value,
            json!({"light_curve": [{"t": 0.0, "m": 0.5, "err": 0.1}]})
        );
    }

    #[test]
    fn test_custom_request_has_both_keys() {
        let lc = LightCurve::new(vec![Observation::new(0.0, 0.5, 0.1)]);
        let extractor = json!({"FeatureExtractor": {"features": [{"Amplitude": {}}]}});
        let value =
            serde_json::to_value(FeaturesRequest::with_extractor(&lc, &extractor)).unwrap();
        assert_eq!(
            value,
            json!({
                "light_curve": [{"t": 0.0, "m": 0.5, "err": 0.1}],
                "extractor": {"FeatureExtractor": {"features": [{"Amplitude": {}}]}},
            })
        );
    }

    #[test]
    fn test_opaque_extractor_passes_through_structurally() {
        let lc = LightCurve::default();
        let extractor = json!({"anything": [1, 2, {"nested": null}]});
        let value =
            serde_json::to_value(FeaturesRequest::with_extractor(&lc, &extractor)).unwrap();
        assert_eq!(value["extractor"], extractor);
    }
}
