//! # Omise API Rust SDK
//!
//! A Rust SDK for the Omise REST API, mapping the JSON objects the API
//! returns onto live resources that can be retrieved, listed, created,
//! updated and destroyed.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`OmiseConfig`] and [`OmiseConfigBuilder`]
//! - Validated newtypes for credentials, hosts and the API version
//! - An async HTTP client with one credential per host (API and vault)
//! - Dynamically accessed resource attributes via [`rest::AttributeStore`]
//! - Resource path resolution for singleton, top-level and nested resources
//! - Paginated collections and nested collections with vault-backed creation
//!
//! ## Quick Start
//!
//! ```rust
//! use omise_api::{OmiseConfig, SecretKey, PublicKey, ApiVersion};
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_123").unwrap())
//!     .public_key(PublicKey::new("pkey_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_host().as_ref(), "https://api.omise.co");
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use omise_api::{OmiseConfig, RestClient, SecretKey, PublicKey};
//! use omise_api::rest::Resource;
//! use omise_api::rest::resources::{Account, Customer};
//! use serde_json::json;
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_123")?)
//!     .public_key(PublicKey::new("pkey_test_123")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! // Singletons are retrieved without an id
//! let account = Account::retrieve(&client, None, None).await?;
//! println!("{:?}", account.email());
//!
//! // Every field the server sent is reachable, typed accessor or not
//! let mut customer = Customer::retrieve(&client, Some("cust_test_1"), None).await?;
//! println!("{:?}", customer.attributes().get("metadata"));
//!
//! // Card numbers go through the vault, never the main API
//! let mut cards = customer.cards()?;
//! let card = cards.create(&client, json!({
//!     "name": "JOHN DOE",
//!     "number": "4242424242424242",
//!     "expiration_month": 12,
//!     "expiration_year": 2030
//! })).await?;
//! ```
//!
//! ## Multiple Accounts
//!
//! Credentials live on the client, not in global state. Two clients built
//! with different secret keys address different accounts, and resources
//! loaded through one never see the other's credential:
//!
//! ```rust,ignore
//! let first = RestClient::new(&config)?;
//! let second = first.with_secret_key(SecretKey::new("skey_test_456")?)?;
//!
//! let a = Account::retrieve(&first, None, None).await?;
//! let b = Account::retrieve(&second, None, None).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Local errors first**: Unaddressable operations fail before any request
//! - **Thread-safe**: Configuration and clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, HostUrl, OmiseConfig, OmiseConfigBuilder, PublicKey, SecretKey};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, Host, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export resource types
pub use rest::{Collection, Entity, NestedCollection, Resource, ResourceError};
