//! Error types for the Mollie API client.

use crate::transport::HttpResponse;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for Mollie operations
pub type MollieResult<T> = Result<T, MollieError>;

/// Main error type for the Mollie API client.
///
/// Covers the full taxonomy: configuration problems, request construction,
/// transport failures, structured upstream errors, and decode failures on
/// the success path. Nothing is retried or recovered locally.
#[derive(Error, Debug)]
pub enum MollieError {
    /// Configuration error (missing credential, invalid settings)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// The configured base URL cannot anchor relative joins
    #[error("bad base URL: {url:?} (must be absolute and end with a trailing slash)")]
    BadBaseUrl {
        /// The offending base URL
        url: String,
    },

    /// Request construction error (URL composition, body marshalling)
    #[error("Request error: {message}")]
    RequestBuild {
        /// Error message describing the request-build issue
        message: String,
    },

    /// Network error (connection failed, DNS, TLS, cancellation, timeout)
    #[error("Network error: {message}")]
    Transport {
        /// Error message describing the network issue
        message: String,
    },

    /// Structured error returned by the Mollie API for a non-2xx status
    #[error("{error}")]
    Api {
        /// The decoded upstream error envelope
        error: ApiError,
        /// The full response, kept so callers can inspect headers and body
        response: HttpResponse,
    },

    /// Invalid JSON on the success path
    #[error("Decode error: {message}")]
    Decode {
        /// Error message describing the decode failure
        message: String,
    },
}

impl MollieError {
    /// Returns the decoded upstream error when this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            MollieError::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the captured response for API errors, so rate-limit hints
    /// and the raw body stay reachable on failure.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            MollieError::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Error envelope returned by the Mollie API: `{status, title, detail,
/// field?, _links.documentation?}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code echoed in the body
    pub status: u16,
    /// Short human-readable summary
    pub title: String,
    /// Detailed explanation of what went wrong
    #[serde(default)]
    pub detail: String,
    /// The request field the error applies to, when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Links block; `documentation` points at the relevant guide
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<ErrorLinks>,
}

/// `_links` block of an error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorLinks {
    /// Link to the documentation page for this error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<crate::pagination::Link>,
}

impl ApiError {
    /// Decodes the structured envelope from a non-2xx body, falling back to
    /// the HTTP status line when the body is empty or not valid JSON.
    pub fn from_response(status: http::StatusCode, body: &[u8]) -> Self {
        if !body.is_empty() {
            if let Ok(err) = serde_json::from_slice::<ApiError>(body) {
                return err;
            }
        }
        ApiError {
            status: status.as_u16(),
            title: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            detail: String::new(),
            field: None,
            links: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.title)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        if let Some(field) = &self.field {
            write!(f, ", affected field: {}", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

// Conversions from common error types
impl From<reqwest::Error> for MollieError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MollieError::Transport {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            MollieError::Transport {
                message: format!("Connection failed: {}", err),
            }
        } else {
            MollieError::Transport {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for MollieError {
    fn from(err: serde_json::Error) -> Self {
        MollieError::Decode {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<url::ParseError> for MollieError {
    fn from(err: url::ParseError) -> Self {
        MollieError::RequestBuild {
            message: format!("Invalid URL: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_api_error_display_full() {
        let err = ApiError {
            status: 422,
            title: "Unprocessable Entity".to_string(),
            detail: "bad".to_string(),
            field: Some("amount".to_string()),
            links: None,
        };
        assert_eq!(
            err.to_string(),
            "422 Unprocessable Entity: bad, affected field: amount"
        );
    }

    #[test]
    fn test_api_error_display_without_field() {
        let err = ApiError {
            status: 404,
            title: "Not Found".to_string(),
            detail: "No payment exists with token tr_xxx.".to_string(),
            field: None,
            links: None,
        };
        assert_eq!(
            err.to_string(),
            "404 Not Found: No payment exists with token tr_xxx."
        );
    }

    #[test]
    fn test_api_error_from_structured_body() {
        let body = br#"{"status":422,"title":"Unprocessable Entity","detail":"bad","field":"amount"}"#;
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(err.status, 422);
        assert_eq!(err.field.as_deref(), Some("amount"));
    }

    #[test]
    fn test_api_error_fallback_on_empty_body() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert_eq!(err.status, 500);
        assert_eq!(err.title, "Internal Server Error");
        assert_eq!(err.to_string(), "500 Internal Server Error");
    }

    #[test]
    fn test_api_error_fallback_on_garbage_body() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, b"<html>upstream</html>");
        assert_eq!(err.status, 502);
        assert_eq!(err.title, "Bad Gateway");
    }
}
