//! Client configuration and HTTP transport construction.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{IonosError, Result};

/// IONOS DNS API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.hosting.ionos.com/dns";

/// Environment variable holding the API key (`<prefix>.<secret>`).
pub const ENV_API_KEY: &str = "IONOS_API_KEY";
/// Environment variable overriding the API endpoint.
pub const ENV_BASE_URL: &str = "IONOS_BASE_URL";
/// Environment variable holding the request timeout in seconds.
pub const ENV_HTTP_TIMEOUT: &str = "IONOS_HTTP_TIMEOUT";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings used to build an [`IonosClient`](crate::IonosClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// API key sent as `X-API-Key`.
    pub api_key: String,
    /// API endpoint; path segments are appended beneath it.
    pub base_url: String,
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout, body included.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Construct a config from flat key-value settings, validating required fields.
    ///
    /// Keys: `apiKey` (required), `baseUrl`, `httpTimeout` (seconds).
    pub fn from_map(map: &HashMap<String, String>) -> std::result::Result<Self, ConfigError> {
        let mut config = Self::new(Self::get_required_field(map, "apiKey", "API Key")?);

        if let Some(base_url) = map.get("baseUrl").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(timeout) = map.get("httpTimeout").filter(|v| !v.trim().is_empty()) {
            config.request_timeout = parse_timeout_secs(timeout, "httpTimeout", "HTTP Timeout")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load the config from `IONOS_API_KEY`, `IONOS_BASE_URL` and `IONOS_HTTP_TIMEOUT`.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        let map: HashMap<String, String> = [
            ("apiKey", ENV_API_KEY),
            ("baseUrl", ENV_BASE_URL),
            ("httpTimeout", ENV_HTTP_TIMEOUT),
        ]
        .into_iter()
        .filter_map(|(key, var)| std::env::var(var).ok().map(|v| (key.to_string(), v)))
        .collect();

        Self::from_map(&map)
    }

    /// Check that the config can produce a working client.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "apiKey".to_string(),
                label: "API Key".to_string(),
            });
        }
        if reqwest::header::HeaderValue::from_str(&self.api_key).is_err() {
            return Err(ConfigError::InvalidFormat {
                field: "apiKey".to_string(),
                label: "API Key".to_string(),
                reason: "contains characters not allowed in an HTTP header".to_string(),
            });
        }
        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if !url.cannot_be_a_base() && matches!(url.scheme(), "http" | "https") => {}
            Ok(_) => {
                return Err(ConfigError::InvalidFormat {
                    field: "baseUrl".to_string(),
                    label: "Base URL".to_string(),
                    reason: "must be an absolute http(s) URL".to_string(),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidFormat {
                    field: "baseUrl".to_string(),
                    label: "Base URL".to_string(),
                    reason: e.to_string(),
                });
            }
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidFormat {
                field: "httpTimeout".to_string(),
                label: "HTTP Timeout".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Obtain a required field from the map and verify that it is not blank.
    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> std::result::Result<String, ConfigError> {
        match map.get(key) {
            None => Err(ConfigError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.trim().to_string()),
        }
    }
}

fn parse_timeout_secs(
    value: &str,
    field: &str,
    label: &str,
) -> std::result::Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidFormat {
            field: field.to_string(),
            label: label.to_string(),
            reason: format!("expected a number of seconds: {e}"),
        })
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConfigError {
    /// A required field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field is present but empty/whitespace-only.
    EmptyField {
        field: String,
        label: String,
    },
    /// A field has an invalid format.
    InvalidFormat {
        field: String,
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for IonosError {
    fn from(err: ConfigError) -> Self {
        let param = match &err {
            ConfigError::MissingField { field, .. }
            | ConfigError::EmptyField { field, .. }
            | ConfigError::InvalidFormat { field, .. } => field.clone(),
        };
        Self::InvalidParameter {
            param,
            detail: err.to_string(),
        }
    }
}

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| IonosError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new("prefix.secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_map_minimal() {
        let res = ClientConfig::from_map(&map(&[("apiKey", " prefix.secret ")]));
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(config) = res else {
            return;
        };
        assert_eq!(config.api_key, "prefix.secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn from_map_overrides() {
        let res = ClientConfig::from_map(&map(&[
            ("apiKey", "k"),
            ("baseUrl", "http://127.0.0.1:8080/dns"),
            ("httpTimeout", "5"),
        ]));
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(config) = res else {
            return;
        };
        assert_eq!(config.base_url, "http://127.0.0.1:8080/dns");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn from_map_missing_key() {
        let res = ClientConfig::from_map(&HashMap::new());
        assert!(matches!(
            res,
            Err(ConfigError::MissingField { ref field, .. }) if field == "apiKey"
        ));
    }

    #[test]
    fn from_map_blank_key() {
        let res = ClientConfig::from_map(&map(&[("apiKey", "   ")]));
        assert!(matches!(res, Err(ConfigError::EmptyField { .. })));
    }

    #[test]
    fn from_map_bad_timeout() {
        let res = ClientConfig::from_map(&map(&[("apiKey", "k"), ("httpTimeout", "soon")]));
        assert!(matches!(
            res,
            Err(ConfigError::InvalidFormat { ref field, .. }) if field == "httpTimeout"
        ));
    }

    #[test]
    fn from_map_zero_timeout() {
        let res = ClientConfig::from_map(&map(&[("apiKey", "k"), ("httpTimeout", "0")]));
        assert!(matches!(res, Err(ConfigError::InvalidFormat { .. })));
    }

    #[test]
    fn validate_rejects_header_breaking_key() {
        let config = ClientConfig::new("abc\r\nX-Injected: 1");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFormat { ref field, .. }) if field == "apiKey"
        ));
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        for url in ["not a url", "mailto:dns@example.com", "ftp://example.com/dns"] {
            let config = ClientConfig::new("k").with_base_url(url);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidFormat { .. })),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn config_error_display() {
        let e = ConfigError::MissingField {
            field: "apiKey".to_string(),
            label: "API Key".to_string(),
        };
        assert_eq!(e.to_string(), "Missing required field: API Key");
    }

    #[test]
    fn config_error_into_ionos_error() {
        let e: IonosError = ConfigError::EmptyField {
            field: "apiKey".to_string(),
            label: "API Key".to_string(),
        }
        .into();
        assert!(matches!(
            e,
            IonosError::InvalidParameter { ref param, .. } if param == "apiKey"
        ));
    }

    #[test]
    fn http_client_builds() {
        assert!(create_http_client(&ClientConfig::new("k")).is_ok());
    }
}
