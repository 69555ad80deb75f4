//! Generic HTTP exchange helpers
//!
//! One request in, one `(status, body)` pair out. The helpers never retry and
//! never look at the status code themselves; deciding what counts as success
//! is left to the caller, which then either decodes the body with
//! [`HttpUtils::parse_json`] or turns it into an error with
//! [`HttpUtils::read_error`].

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, IonosError};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// The body is always read to the end, whatever the status, so the
    /// connection can go back to the pool.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status, response_text))`
    /// * `Err(IonosError::Timeout)` - the transport timed out
    /// * `Err(IonosError::NetworkError)` - any other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(StatusCode, String), IonosError> {
        log::debug!("[ionos] {method_name} {url}");

        let response = request_builder.send().await.map_err(transport_error)?;

        let status = response.status();
        log::debug!("[ionos] Response Status: {status}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(e)
            } else {
                IonosError::NetworkError {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[ionos] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status, response_text))
    }

    /// Parse a JSON success body
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(IonosError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, IonosError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[ionos] JSON parse failed: {e}");
            log::error!("[ionos] Raw response: {}", truncate_for_log(response_text));
            IonosError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Turn a non-success response into an [`IonosError::ApiError`]
    ///
    /// Structured vendor JSON is preferred; otherwise the raw text is kept.
    pub fn read_error(status: StatusCode, response_text: &str) -> IonosError {
        let err = IonosError::ApiError(ClientError::from_body(status.as_u16(), response_text));
        if err.is_expected() {
            log::warn!("[ionos] {err}");
        } else {
            log::error!("[ionos] {err}");
        }
        err
    }
}

/// Map a reqwest failure to the transport variants.
fn transport_error(e: reqwest::Error) -> IonosError {
    if e.is_timeout() {
        IonosError::Timeout {
            detail: e.to_string(),
        }
    } else {
        IonosError::NetworkError {
            detail: e.to_string(),
        }
    }
}
