//! Demo: one default-features request via the high-level client.
//!
//! The first CLI argument overrides the service root URL.
//!
//! ```bash
//! cargo run --features native --bin request-latest [BASE_URL]
//! ```

use lcf_client::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SdkError> {
    let base_url = resolve_base_url(std::env::args().skip(1), DEFAULT_API_URL);
    let client = LcfClient::builder().base_url(&base_url).build()?;

    let light_curve = LightCurve::synthetic(100);
    let features = client.features().latest(&light_curve).await?;

    println!("Requested in {:.3} ms", features.elapsed_ms());
    println!("{}", serde_json::to_string_pretty(&features.value)?);

    Ok(())
}
