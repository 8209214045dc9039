//! HTTP-specific error types for the Omise API SDK.
//!
//! This module contains error types for HTTP operations, including API
//! error responses, malformed bodies and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`ApiError`]: Non-2xx HTTP responses from the API, with the error payload
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Api(e)) => {
//!         println!("API error {} ({:?}): {}", e.status, e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::MalformedBody { status, reason }) => {
//!         println!("Unreadable body with status {}: {}", status, reason);
//!     }
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// Omise error bodies look like
/// `{"object": "error", "location": "...", "code": "not_found", "message": "..."}`.
/// The fields are copied verbatim; nothing is reinterpreted locally.
///
/// # Example
///
/// ```rust
/// use omise_api::clients::ApiError;
/// use serde_json::json;
///
/// let error = ApiError::from_body(
///     404,
///     &json!({
///         "object": "error",
///         "location": "https://www.omise.co/api-errors#not-found",
///         "code": "not_found",
///         "message": "customer cust_missing was not found"
///     }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(error.status, 404);
/// assert_eq!(error.code.as_deref(), Some("not_found"));
/// assert_eq!(error.request_id.as_deref(), Some("req-123"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message} (status {status})")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The machine-readable error code (e.g., `not_found`), if provided.
    pub code: Option<String>,
    /// The human-readable error message.
    pub message: String,
    /// Documentation link for the error, if provided.
    pub location: Option<String>,
    /// Value of the `X-Request-Id` header, if present.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an error from a response status and its parsed body.
    ///
    /// Bodies that are not Omise error objects are kept as their JSON text in
    /// `message`.
    #[must_use]
    pub fn from_body(status: u16, body: &serde_json::Value, request_id: Option<String>) -> Self {
        let field = |name: &str| {
            body.get(name)
                .and_then(serde_json::Value::as_str)
                .map(String::from)
        };

        let message = field("message").unwrap_or_else(|| {
            if body.as_object().is_some_and(serde_json::Map::is_empty) {
                format!("HTTP status {status}")
            } else {
                body.to_string()
            }
        });

        Self {
            status,
            code: field("code"),
            message,
            location: field("location"),
            request_id,
        }
    }
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent, for example when a
/// POST or PATCH request carries no body.
///
/// # Example
///
/// ```rust
/// use omise_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request body is not a JSON object.
    #[error("Request body for {method} must be a JSON object.")]
    BodyNotObject {
        /// The HTTP method of the request.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to tell server-side rejections ([`HttpError::Api`])
/// apart from local or transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API rejected the request (non-2xx status code).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The response body could not be parsed as JSON.
    #[error("Malformed response body (status {status}): {reason}")]
    MalformedBody {
        /// The HTTP status code of the response.
        status: u16,
        /// The parser's description of the problem.
        reason: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the API error payload, if this is an API rejection.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_copies_omise_error_fields() {
        let error = ApiError::from_body(
            401,
            &json!({
                "object": "error",
                "location": "https://www.omise.co/api-errors#authentication-failure",
                "code": "authentication_failure",
                "message": "authentication failed"
            }),
            None,
        );

        assert_eq!(error.status, 401);
        assert_eq!(error.code.as_deref(), Some("authentication_failure"));
        assert_eq!(error.message, "authentication failed");
        assert_eq!(
            error.location.as_deref(),
            Some("https://www.omise.co/api-errors#authentication-failure")
        );
        assert!(error.to_string().contains("authentication failed"));
        assert!(error.to_string().contains("401"));
    }

    #[test]
    fn test_api_error_keeps_unknown_bodies_verbatim() {
        let error = ApiError::from_body(502, &json!({"raw_body": "Bad Gateway"}), None);
        assert!(error.code.is_none());
        assert!(error.message.contains("Bad Gateway"));

        let error = ApiError::from_body(500, &json!({}), Some("abc".to_string()));
        assert_eq!(error.message, "HTTP status 500");
        assert_eq!(error.request_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use patch without specifying data.");
    }

    #[test]
    fn test_http_error_exposes_api_error() {
        let error = HttpError::from(ApiError::from_body(404, &json!({}), None));
        assert_eq!(error.api_error().map(|e| e.status), Some(404));

        let error = HttpError::MalformedBody {
            status: 200,
            reason: "expected value".to_string(),
        };
        assert!(error.api_error().is_none());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &ApiError::from_body(400, &json!({}), None);
        let _ = api_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _ = invalid_error;
    }
}
