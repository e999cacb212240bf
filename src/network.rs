//! Network URL constants and CLI base-URL resolution.

/// Default service root URL.
pub const DEFAULT_API_URL: &str = "http://features.lc.snad.space";

/// Version alias the service keeps pointed at its newest API.
pub const LATEST_VERSION: &str = "latest";

/// Resolve the base URL from CLI arguments: the first positional argument
/// overrides `default`. The demo binaries pass `std::env::args().skip(1)`.
pub fn resolve_base_url<I>(mut args: I, default: &str) -> String
where
    I: Iterator<Item = String>,
{
    args.next().unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_default() {
        let url = resolve_base_url(std::iter::empty(), DEFAULT_API_URL);
        assert_eq!(url, DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_base_url_override() {
        let args = vec!["http://example.test".to_string()].into_iter();
        let url = resolve_base_url(args, DEFAULT_API_URL);
        assert_eq!(url, "http://example.test");
    }

    #[test]
    fn test_resolve_base_url_ignores_extra_args() {
        let args = vec!["http://example.test".to_string(), "ignored".to_string()].into_iter();
        let url = resolve_base_url(args, DEFAULT_API_URL);
        assert_eq!(url, "http://example.test");
    }
}
