//! REST-specific error types for the Omise API SDK.
//!
//! This module contains error types for REST API operations, including
//! invalid paths, missing credentials, and wrapped HTTP errors.
//!
//! # Error Handling
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Config`]: When the request needs a credential that is not configured
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::clients::rest::{Host, RestClient, RestError};
//!
//! match client.post(Host::Vault, "/tokens", body).await {
//!     Ok(response) => println!("Token: {}", response.body),
//!     Err(RestError::Config(e)) => println!("Not configured: {}", e),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {}", path),
//!     Err(RestError::Http(e)) => println!("HTTP error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use omise_api::clients::rest::RestError;
/// use omise_api::ConfigError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
///
/// let error = RestError::from(ConfigError::MissingVaultKey);
/// assert!(error.to_string().contains("public_key"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// This error is returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// The request cannot be sent with the current configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiError;
    use serde_json::json;

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "/invalid/path".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Invalid REST API path"));
        assert!(message.contains("/invalid/path"));
    }

    #[test]
    fn test_from_config_error_conversion() {
        let rest_error: RestError = ConfigError::MissingVaultKey.into();
        assert!(matches!(
            rest_error,
            RestError::Config(ConfigError::MissingVaultKey)
        ));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Api(ApiError::from_body(
            404,
            &json!({"object": "error", "code": "not_found", "message": "not found"}),
            None,
        ));

        let rest_error: RestError = http_error.into();

        assert!(matches!(rest_error, RestError::Http(_)));
        assert!(rest_error.to_string().contains("not found"));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let path_error: &dyn std::error::Error = &RestError::InvalidPath {
            path: "test".to_string(),
        };
        let _ = path_error;

        let config_error: &dyn std::error::Error = &RestError::Config(ConfigError::MissingVaultKey);
        let _ = config_error;
    }
}
