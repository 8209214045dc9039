//! REST API client for the Omise API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient). It owns one HTTP client per
//! Omise host and picks the right credential for each request.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `patch()`, `delete()` methods
//! - [`Host`]: Which Omise host (and credential) a request goes to
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::{OmiseConfig, PublicKey, RestClient, SecretKey};
//! use omise_api::clients::rest::Host;
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_123")?)
//!     .public_key(PublicKey::new("pkey_test_123")?)
//!     .build()?;
//!
//! let client = RestClient::new(&config)?;
//!
//! let account = client.get(Host::Api, "/account", None).await?;
//! let token = client
//!     .post(Host::Vault, "/tokens", serde_json::json!({"card": {"number": "4242424242424242"}}))
//!     .await?;
//! ```
//!
//! # Path Normalization
//!
//! Paths are normalized before sending: repeated slashes are collapsed, a
//! single leading slash is ensured, and empty paths are rejected.
//!
//! # Retry Behavior
//!
//! None. Every call is exactly one round trip.

mod client;
mod errors;

pub use client::{Host, RestClient};
pub use errors::RestError;
