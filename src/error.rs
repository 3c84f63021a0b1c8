//! Error types for the Schwab API client.
//!
//! This module provides a single error type covering all failure modes
//! when talking to the Schwab Trader and Market Data APIs. The client
//! never retries or recovers on its own; every failure is classified
//! once and surfaced to the caller.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Schwab API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Schwab API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// API returned an error response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// The access token was rejected (401). Obtain a fresh token with
    /// [`crate::auth::refresh_access_token`] and retry at the call site.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Server-provided detail, when the response body carried one
        message: String,
    },

    /// OAuth token exchange or refresh failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the API (429)
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized { .. } | Error::Authentication(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Unauthorized { .. } | Error::NotFound(_) | Error::RateLimited { .. } => true,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response.
    ///
    /// Schwab error bodies come in two shapes: the Trader/Market Data APIs
    /// use `{"errors": [{"title": ..., "detail": ...}]}`, while the OAuth
    /// endpoints use `{"error": ..., "error_description": ...}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message =
            message_from_body(&body).unwrap_or_else(|| "Unknown API error".to_string());

        Error::Api {
            status,
            message,
            body,
        }
    }
}

/// Extract the human-readable message from a Schwab error body.
///
/// Trader/Market Data bodies carry `errors[0].detail` (or `.title`);
/// OAuth bodies carry `error_description`.
pub(crate) fn message_from_body(body: &Value) -> Option<String> {
    body.get("errors")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("detail").or_else(|| e.get("title")))
        .and_then(|m| m.as_str())
        .or_else(|| body.get("error_description").and_then(|m| m.as_str()))
        .or_else(|| body.get("message").and_then(|m| m.as_str()))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_auth() {
        let unauthorized = Error::Unauthorized {
            message: "token expired".into(),
        };
        assert!(unauthorized.is_auth_error());
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(!Error::InvalidInput("bad".into()).is_auth_error());
    }

    #[test]
    fn test_message_from_body_shapes() {
        let trader = serde_json::json!({
            "errors": [{"status": "401", "title": "Unauthorized",
                        "detail": "token expired"}]
        });
        assert_eq!(message_from_body(&trader).as_deref(), Some("token expired"));

        let oauth = serde_json::json!({"error_description": "invalid client"});
        assert_eq!(message_from_body(&oauth).as_deref(), Some("invalid client"));

        assert_eq!(message_from_body(&Value::Null), None);
    }

    #[test]
    fn test_error_classification() {
        let client_err = Error::from_api_response(400, Value::Null);
        assert!(client_err.is_client_error());
        assert!(!client_err.is_server_error());

        let server_err = Error::from_api_response(503, Value::Null);
        assert!(server_err.is_server_error());
        assert!(!server_err.is_client_error());
    }

    #[test]
    fn test_from_trader_api_body() {
        let body = serde_json::json!({
            "errors": [{
                "id": "9821320c-8500-4edf-bd46-a9299c13d2e0",
                "status": "400",
                "title": "Bad Request",
                "detail": "Missing header"
            }]
        });

        let err = Error::from_api_response(400, body);
        match err {
            Error::Api {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Missing header");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_from_oauth_body() {
        let body = serde_json::json!({
            "error": "unsupported_token_type",
            "error_description": "400 Bad Request"
        });

        let err = Error::from_api_response(400, body);
        match err {
            Error::Api { message, .. } => assert_eq!(message, "400 Bad Request"),
            _ => panic!("Expected Api error"),
        }
    }
}
