//! HTTP client types for Omise API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Omise API and vault. It handles
//! request/response processing and Omise error payload parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client bound to one host and credential
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`rest::RestClient`]: Higher-level client routing requests to the API or vault
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::{OmiseConfig, SecretKey};
//! use omise_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_123")?)
//!     .build()?;
//!
//! let client = HttpClient::new(config.api_host(), config.secret_key().as_ref(), &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/account")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client never retries. A failed call surfaces its error immediately.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ApiError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_VERSION_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export REST client types at the clients module level
pub use rest::{Host, RestClient, RestError};
