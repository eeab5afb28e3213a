//! API client configuration.
//!
//! Configuration is read from the environment with hard defaults so the
//! client works against a local development endpoint out of the box.

use std::time::Duration;

/// Default base URL when `QUILL_API_BASE_URL` is unset
pub const DEFAULT_BASE_URL: &str = "https://localhost:3000/api";

/// Default request timeout in seconds when `QUILL_HTTP_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API client configuration.
///
/// # Example
///
/// ```
/// use quill_api::ApiConfig;
///
/// let config = ApiConfig::default();
/// assert_eq!(config.base_url, "https://localhost:3000/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL for all requests (no trailing slash).
    pub base_url: String,

    /// Transport-level timeout applied to every request.
    ///
    /// The store applies no timeout of its own; this is the only one.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build configuration from the environment.
    ///
    /// Reads `QUILL_API_BASE_URL` (default `https://localhost:3000/api`)
    /// and `QUILL_HTTP_TIMEOUT_SECS` (default 30). Unparseable timeout
    /// values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("QUILL_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("QUILL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: normalize_base_url(base_url),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Strip a trailing slash so paths can always be joined with `/{path}`
fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_development() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::default().with_base_url("http://example.com/api/");
        assert_eq!(config.base_url, "http://example.com/api");
    }

    #[test]
    fn builder_overrides_timeout() {
        let config = ApiConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
