//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DASHBOARD_HOST` - Bind address (default: 127.0.0.1)
//! - `DASHBOARD_PORT` - Listen port (default: 3002)
//! - `DASHBOARD_BASE_URL` - Public URL of the dashboard (default: `http://{host}:{port}`)
//! - `DASHBOARD_LOG_JSON` - Emit JSON logs when set
//! - `VENDOR_API_URL` - Vendor backend base URL. When unset, the built-in
//!   mock backend is mounted at `/api` and the dashboard calls itself.
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3002";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Dashboard application configuration.
///
/// Implements `Debug` manually to redact the Sentry DSN.
#[derive(Clone)]
pub struct DashboardConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: Url,
    /// External vendor backend, if any
    pub api_url: Option<Url>,
    /// Emit JSON-formatted logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<SecretString>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl std::fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_url", &self.base_url.as_str())
            .field("api_url", &self.api_url.as_ref().map(Url::as_str))
            .field("log_json", &self.log_json)
            .field(
                "sentry_dsn",
                &self.sentry_dsn.as_ref().map(|_| "[REDACTED]"),
            )
            .field("sentry_environment", &self.sentry_environment)
            .field("sentry_sample_rate", &self.sentry_sample_rate)
            .field("sentry_traces_sample_rate", &self.sentry_traces_sample_rate)
            .finish()
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("DASHBOARD_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_HOST".to_string(), e.to_string()))?;
        let port = get("DASHBOARD_PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DASHBOARD_PORT".to_string(), e.to_string()))?;

        let base_url = match get("DASHBOARD_BASE_URL") {
            Some(raw) => parse_url("DASHBOARD_BASE_URL", &raw)?,
            None => parse_url("DASHBOARD_BASE_URL", &format!("http://{}", SocketAddr::new(host, port)))?,
        };
        let api_url = get("VENDOR_API_URL")
            .map(|raw| parse_url("VENDOR_API_URL", &raw))
            .transpose()?;

        let sentry_sample_rate = parse_rate(get("SENTRY_SAMPLE_RATE"), "SENTRY_SAMPLE_RATE", 1.0)?;
        let sentry_traces_sample_rate = parse_rate(
            get("SENTRY_TRACES_SAMPLE_RATE"),
            "SENTRY_TRACES_SAMPLE_RATE",
            0.1,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            api_url,
            log_json: get("DASHBOARD_LOG_JSON").is_some(),
            sentry_dsn: get("SENTRY_DSN").map(SecretString::from),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Get the socket address to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Base URL the vendor API client talks to.
    #[must_use]
    pub fn api_base_url(&self) -> &Url {
        self.api_url.as_ref().unwrap_or(&self.base_url)
    }

    /// Whether the built-in mock backend must be mounted.
    #[must_use]
    pub const fn serves_mock_api(&self) -> bool {
        self.api_url.is_none()
    }

    /// Whether session cookies should be marked `Secure`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn parse_rate(raw: Option<String>, key: &str, default: f32) -> Result<f32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0, got {rate}"),
        ));
    }
    Ok(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<DashboardConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3002");
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:3002/");
        assert!(config.serves_mock_api());
        assert_eq!(config.api_base_url(), &config.base_url);
        assert!(!config.is_secure());
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_external_api_disables_mock() {
        let config = load(&[("VENDOR_API_URL", "https://vendors.example.com/v1/")]).unwrap();
        assert!(!config.serves_mock_api());
        assert_eq!(
            config.api_base_url().as_str(),
            "https://vendors.example.com/v1/"
        );
    }

    #[test]
    fn test_https_base_url_is_secure() {
        let config = load(&[("DASHBOARD_BASE_URL", "https://dash.example.com")]).unwrap();
        assert!(config.is_secure());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = load(&[("VENDOR_API_URL", "  "), ("DASHBOARD_PORT", "")]).unwrap();
        assert!(config.serves_mock_api());
        assert_eq!(config.port, 3002);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            load(&[("DASHBOARD_PORT", "http")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "DASHBOARD_PORT"
        ));
        assert!(matches!(
            load(&[("VENDOR_API_URL", "not a url")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "VENDOR_API_URL"
        ));
        assert!(matches!(
            load(&[("SENTRY_SAMPLE_RATE", "1.5")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "SENTRY_SAMPLE_RATE"
        ));
    }

    #[test]
    fn test_debug_redacts_sentry_dsn() {
        let config = load(&[("SENTRY_DSN", "https://public@sentry.example.com/42")]).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("public@sentry"));
    }
}
