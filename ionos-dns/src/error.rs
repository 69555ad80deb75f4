use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all IONOS DNS API operations.
///
/// The variants fall into three groups:
/// - transport failures: [`NetworkError`](Self::NetworkError) and [`Timeout`](Self::Timeout)
/// - decode failures: [`ParseError`](Self::ParseError)
/// - vendor failures: [`ApiError`](Self::ApiError), any response whose status is not 200
///
/// All variants are serializable for structured error reporting. No variant is
/// retried by the client; retry policy belongs to the caller.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum IonosError {
    /// The request could not be completed (DNS resolution failure, connection
    /// refused, connection reset while reading the body, etc.).
    #[error("[ionos] Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The transport gave up waiting for the response.
    #[error("[ionos] Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A 200 response carried a body that does not match the expected shape.
    #[error("[ionos] Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("[ionos] Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// A client parameter is invalid (malformed base URL, API key that is not
    /// a valid header value, ...).
    #[error("[ionos] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API answered with a status other than the expected success code.
    #[error("[ionos] API error: {0}")]
    ApiError(ClientError),
}

impl IonosError {
    /// HTTP status code of an [`ApiError`](Self::ApiError), `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// 是否为预期行为（调用方输入错误、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidParameter { .. } => true,
            Self::ApiError(err) => (400..500).contains(&err.status_code),
            _ => false,
        }
    }
}

/// Convenience type alias for `Result<T, IonosError>`.
pub type Result<T> = std::result::Result<T, IonosError>;

/// A non-200 response from the IONOS API.
///
/// Always carries the status code. The body is either the vendor's structured
/// error list or, when the body is not valid error JSON, the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Decoded error body.
    pub body: ErrorBody,
}

/// Error body of a [`ClientError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorBody {
    /// The body was the vendor's structured error JSON.
    Structured(Vec<ApiErrorMessage>),
    /// The body was not error JSON; the text is kept verbatim.
    Raw(String),
}

/// One entry of the vendor's structured error list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiErrorMessage {
    /// Vendor error code (e.g. `UNAUTHORIZED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorMessage {
    fn is_empty(&self) -> bool {
        self.code.is_none() && self.message.is_none()
    }
}

impl std::fmt::Display for ApiErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (Some(code), None) => write!(f, "{code}"),
            (None, Some(message)) => write!(f, "{message}"),
            (None, None) => write!(f, "<empty>"),
        }
    }
}

/// The API returns either a list of error objects or a single one.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    List(Vec<ApiErrorMessage>),
    Single(ApiErrorMessage),
}

impl ClientError {
    /// Decode an error response body.
    ///
    /// Structured vendor JSON wins; anything else (plain text, HTML from a
    /// proxy, an empty body, JSON of an unrelated shape) is kept as raw text.
    pub fn from_body(status_code: u16, body: &str) -> Self {
        let body = match serde_json::from_str::<Option<ErrorPayload>>(body) {
            // JSON `null` is an empty error list
            Ok(None) => ErrorBody::Structured(Vec::new()),
            Ok(Some(ErrorPayload::List(messages))) => ErrorBody::Structured(messages),
            Ok(Some(ErrorPayload::Single(message))) if !message.is_empty() => {
                ErrorBody::Structured(vec![message])
            }
            _ => ErrorBody::Raw(body.to_string()),
        };

        Self { status_code, body }
    }

    /// Structured vendor messages, if the body was error JSON.
    pub fn messages(&self) -> Option<&[ApiErrorMessage]> {
        match &self.body {
            ErrorBody::Structured(messages) => Some(messages),
            ErrorBody::Raw(_) => None,
        }
    }

    /// Raw body text, if the body was not error JSON.
    pub fn raw_message(&self) -> Option<&str> {
        match &self.body {
            ErrorBody::Structured(_) => None,
            ErrorBody::Raw(text) => Some(text),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.status_code)?;
        match &self.body {
            ErrorBody::Structured(messages) => {
                for (i, message) in messages.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { ", " };
                    write!(f, "{sep}{message}")?;
                }
                Ok(())
            }
            ErrorBody::Raw(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(())
                } else {
                    write!(f, ": {text}")
                }
            }
        }
    }
}

impl std::error::Error for ClientError {}
