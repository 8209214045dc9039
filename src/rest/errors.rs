//! Resource-specific error types for REST API operations.
//!
//! This module contains the error type for resource operations. Local usage
//! errors (unsupported operation, singleton addressed by id, missing id or
//! parent) are raised before any request is sent. Server rejections keep the
//! Omise error payload verbatim inside [`ResourceError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::rest::{Resource, ResourceError};
//! use omise_api::rest::resources::Customer;
//!
//! match Customer::retrieve(&client, Some("cust_missing"), None).await {
//!     Ok(customer) => println!("Found: {:?}", customer.email()),
//!     Err(e) if e.status() == Some(404) => println!("No such customer"),
//!     Err(ResourceError::Config(e)) => println!("Not configured: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{ApiError, HttpError, RestError};
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use omise_api::rest::ResourceError;
///
/// let error = ResourceError::SingletonAddressedById {
///     resource: "Account",
///     id: "acct_1".to_string(),
/// };
/// assert!(error.to_string().contains("Account"));
/// assert!(error.status().is_none());
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An id was supplied for a resource that has exactly one instance.
    #[error("{resource} is a singleton and cannot be addressed by id '{id}'")]
    SingletonAddressedById {
        /// The type name of the resource.
        resource: &'static str,
        /// The id that was supplied.
        id: String,
    },

    /// An instance operation was attempted without an id.
    #[error("{resource}::{operation} requires an id")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A nested resource was addressed without its parent.
    #[error("Cannot resolve path for {resource}::{operation} without a parent")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// The resource does not support the operation.
    #[error("{resource} does not support {operation}")]
    UnsupportedOperation {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A successful response did not have the expected shape.
    #[error("Unexpected {resource} payload: {reason}")]
    UnexpectedPayload {
        /// The type name of the resource being decoded.
        resource: &'static str,
        /// What was wrong with the payload.
        reason: String,
    },

    /// Query parameters could not be serialized.
    #[error("Invalid parameters: {reason}")]
    InvalidParams {
        /// The serializer's description of the problem.
        reason: String,
    },

    /// The nested item was attached to its parent but re-fetching it failed.
    ///
    /// The parent has already changed. Retrieve `id` again to recover it.
    #[error("{resource} {id} was attached but could not be retrieved: {source}")]
    NestedRetrieveFailed {
        /// The type name of the nested resource.
        resource: &'static str,
        /// The id of the attached item.
        id: String,
        /// Why the retrieve failed.
        source: Box<ResourceError>,
    },

    /// A required credential or setting is missing.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred, including API rejections.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred (invalid path).
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Config(e) => Self::Config(e),
            RestError::Http(e) => Self::Http(e),
            other @ RestError::InvalidPath { .. } => Self::Rest(other),
        }
    }
}

impl ResourceError {
    pub(crate) fn unexpected(resource: &'static str, reason: impl Into<String>) -> Self {
        Self::UnexpectedPayload {
            resource,
            reason: reason.into(),
        }
    }

    /// Returns the API error payload if the server rejected the request.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(e) => e.api_error(),
            Self::NestedRetrieveFailed { source, .. } => source.api_error(),
            _ => None,
        }
    }

    /// Returns the HTTP status if the server rejected the request.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.api_error().and_then(|e| e.request_id.as_deref())
    }

    /// Returns `true` if the error was raised locally, before any request.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::SingletonAddressedById { .. }
                | Self::MissingId { .. }
                | Self::PathResolutionFailed { .. }
                | Self::UnsupportedOperation { .. }
                | Self::InvalidParams { .. }
                | Self::Config(_)
                | Self::Rest(_)
        )
    }
}
