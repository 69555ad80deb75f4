//! IONOS DNS API client

mod api;
mod http;

use reqwest::header::HeaderValue;
use reqwest::{Client, Url};

use crate::config::{ClientConfig, DEFAULT_BASE_URL, create_http_client};
use crate::error::{IonosError, Result};

/// IONOS DNS API client.
///
/// Holds only immutable configuration, so a single instance can be cloned or
/// shared (`Arc`) across tasks. Operations are provided by the
/// [`DnsZoneApi`](crate::DnsZoneApi) implementation.
///
/// Cancellation follows the usual async Rust rule: dropping the future of an
/// operation (e.g. via `tokio::time::timeout` or `tokio::select!`) aborts the
/// in-flight request.
#[derive(Debug, Clone)]
pub struct IonosClient {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    pub(crate) api_key: HeaderValue,
}

impl IonosClient {
    /// Client bound to [`DEFAULT_BASE_URL`] with the default transport
    /// (10 s connect timeout, 30 s request timeout).
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(api_key))
    }

    /// Client built from a validated [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = create_http_client(config)?;
        Self::build(client, &config.api_key, &config.base_url)
    }

    /// Client using a caller-supplied transport.
    ///
    /// Pooling, TLS, proxies and timeouts are whatever `client` was built with.
    pub fn with_http_client(api_key: impl Into<String>, client: Client) -> Result<Self> {
        Self::build(client, &api_key.into(), DEFAULT_BASE_URL)
    }

    /// Replace the API endpoint.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build(client: Client, api_key: &str, base_url: &str) -> Result<Self> {
        let mut api_key =
            HeaderValue::from_str(api_key).map_err(|e| IonosError::InvalidParameter {
                param: "api_key".to_string(),
                detail: e.to_string(),
            })?;
        api_key.set_sensitive(true);

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
            api_key,
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url).map_err(|e| IonosError::InvalidParameter {
        param: "base_url".to_string(),
        detail: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(IonosError::InvalidParameter {
            param: "base_url".to_string(),
            detail: format!("'{base_url}' cannot have path segments"),
        });
    }
    Ok(url)
}
