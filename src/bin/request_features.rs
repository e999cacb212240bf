//! Demo: request default and custom features for a synthetic light curve.
//!
//! Mirrors the service's original Python demo. The first CLI argument
//! overrides the API endpoint URL; the default points at the `latest`
//! endpoint, so the custom call lands on `{endpoint}/features`.
//!
//! ```bash
//! cargo run --features native --bin request-features [API_URL]
//! ```

use lcf_client::prelude::*;

const DEFAULT_ENDPOINT: &str = "http://features.lc.snad.space/api/latest";

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

fn report<T: serde::Serialize>(timed: &Timed<T>) -> Result<(), SdkError> {
    println!("Requested in {:.3} ms", timed.elapsed_ms());
    println!("{}", serde_json::to_string_pretty(&timed.value)?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SdkError> {
    let endpoint = resolve_base_url(std::env::args().skip(1), DEFAULT_ENDPOINT);
    let http = LcfHttp::new(&endpoint);
    let light_curve = LightCurve::synthetic(100);

    let default_features = http.extract(&light_curve).await?;
    report(&default_features)?;

    println!();

    let custom_features = http
        .extract_custom(&light_curve, &demo_extractor())
        .await?;
    report(&custom_features)?;

    Ok(())
}
