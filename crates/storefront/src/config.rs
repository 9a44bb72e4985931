//! Storefront client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VITRINE_API_BASE_URL` - Backend base URL (default: `http://localhost:3000`)
//! - `VITRINE_REQUEST_TIMEOUT_SECS` - Whole-request timeout (default: 30)
//! - `VITRINE_CONNECT_TIMEOUT_SECS` - TCP connect timeout (default: 10)
//! - `VITRINE_CURRENCY` - Store currency for price display (default: BRL)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::time::Duration;

use thiserror::Error;
use url::Url;

use vitrine_core::CurrencyCode;

/// Backend the storefront talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Backend base URL; endpoint paths are joined onto it
    pub api_base_url: Url,
    /// Timeouts applied to every backend request
    pub timeouts: HttpTimeouts,
    /// Currency used to display prices
    pub currency: CurrencyCode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// HTTP timeouts for backend requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = parse_base_url(
            "VITRINE_API_BASE_URL",
            &get_env_or_default("VITRINE_API_BASE_URL", DEFAULT_API_BASE_URL),
        )?;
        let timeouts = HttpTimeouts {
            request: Duration::from_secs(get_env_u64(
                "VITRINE_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            connect: Duration::from_secs(get_env_u64(
                "VITRINE_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
        };
        let currency = get_env_or_default("VITRINE_CURRENCY", "BRL")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_CURRENCY".to_string(), e.to_string()))?;

        Ok(Self {
            api_base_url,
            timeouts,
            currency,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration pointing at an explicit backend, with default timeouts
    /// and currency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` is not an
    /// absolute http(s) URL.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url("base_url", base_url)?,
            timeouts: HttpTimeouts::default(),
            currency: CurrencyCode::default(),
            sentry_dsn: None,
            sentry_environment: None,
        })
    }

    /// Resolve an endpoint path against the backend base URL.
    ///
    /// # Errors
    ///
    /// Returns the URL parse error if `path` cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.api_base_url.join(path.trim_start_matches('/'))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a base URL, keeping a trailing slash so relative joins append.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a numeric environment variable with a default value.
fn get_env_u64(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_for_base_url_appends_trailing_slash() {
        let config = StorefrontConfig::for_base_url("http://localhost:3000").unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.currency, CurrencyCode::BRL);
        assert_eq!(config.timeouts, HttpTimeouts::default());
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = StorefrontConfig::for_base_url("http://localhost:3000").unwrap();
        assert_eq!(
            config.endpoint("/auth/profile").unwrap().as_str(),
            "http://localhost:3000/auth/profile"
        );
        assert_eq!(
            config.endpoint("products").unwrap().as_str(),
            "http://localhost:3000/products"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let config = StorefrontConfig::for_base_url("https://shop.example.com/api").unwrap();
        assert_eq!(
            config.endpoint("/auth/login").unwrap().as_str(),
            "https://shop.example.com/api/auth/login"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = StorefrontConfig::for_base_url("ftp://localhost");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_rejects_garbage_url() {
        assert!(StorefrontConfig::for_base_url("not a url").is_err());
    }

    #[test]
    fn test_get_env_u64_uses_default_when_absent() {
        assert_eq!(get_env_u64("VITRINE_TEST_UNSET_VAR_91827", 7).unwrap(), 7);
    }

    #[test]
    fn test_get_optional_env_treats_empty_as_absent() {
        assert!(get_optional_env("VITRINE_TEST_UNSET_VAR_55120").is_none());
    }
}
