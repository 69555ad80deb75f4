//! # ionos-dns
//!
//! A typed async client for the [IONOS DNS API](https://developer.hosting.ionos.com/docs/dns).
//!
//! ## Operations
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | [`list_zones`](DnsZoneApi::list_zones) | `GET` | `/v1/zones` |
//! | [`get_records`](DnsZoneApi::get_records) | `GET` | `/v1/zones/{zoneId}` |
//! | [`replace_records`](DnsZoneApi::replace_records) | `PATCH` | `/v1/zones/{zoneId}` |
//! | [`remove_record`](DnsZoneApi::remove_record) | `DELETE` | `/v1/zones/{zoneId}/records/{recordId}` |
//!
//! Every request carries `Accept: application/json`, `Content-Type: application/json`
//! and the `X-API-Key` header. Every operation expects HTTP 200; anything else is
//! reported as [`IonosError::ApiError`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ionos_dns::{DnsZoneApi, IonosClient, Record, RecordsFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IonosClient::new("prefix.secret")?;
//!
//!     let Some(zone) = client.find_zone("_acme-challenge.www.example.com").await? else {
//!         return Ok(());
//!     };
//!
//!     let record = Record::new("_acme-challenge.www.example.com", "TXT", "token", 300);
//!     client.replace_records(&zone.id, &[record]).await?;
//!
//!     let filter = RecordsFilter::new()
//!         .record_name("_acme-challenge.www.example.com")
//!         .record_type("TXT");
//!     for record in client.get_records(&zone.id, Some(&filter)).await? {
//!         if let Some(id) = &record.id {
//!             client.remove_record(&zone.id, id).await?;
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, IonosError>`](IonosError):
//!
//! - [`IonosError::NetworkError`] / [`IonosError::Timeout`] — the request could not complete
//! - [`IonosError::ParseError`] — a 200 response body did not match the expected shape
//! - [`IonosError::ApiError`] — any other status; the [`ClientError`] carries the status
//!   code and either the vendor's structured messages or the raw body text
//!
//! Nothing is retried.

mod client;
mod config;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiErrorMessage, ClientError, ErrorBody, IonosError, Result};

// Re-export configuration
pub use config::{
    ClientConfig, ConfigError, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, ENV_HTTP_TIMEOUT,
    create_http_client,
};

pub use client::IonosClient;
pub use traits::DnsZoneApi;

// Re-export types
pub use types::{CustomerZone, Record, RecordsFilter, Zone};

// Re-export utils module
pub use utils::datetime;
pub use utils::domain::{find_zone_for_domain, normalize_domain_name};
