//! REST resource infrastructure for the Omise API.
//!
//! This module maps JSON objects returned by the API onto live objects:
//!
//! - **[`AttributeStore`]**: ordered, dynamically accessed fields of one object
//! - **[`ResourceDescriptor`]** and [`resolve_path`]: how a resource is addressed
//! - **[`Entity`]**: attributes plus the information needed to address them again
//! - **[`Resource`] trait**: `retrieve`, `create`, `list`, `update`, `reload`, `destroy`
//! - **[`Collection<T>`]**: one page of a list with its envelope metadata
//! - **[`NestedCollection`]**: a collection under a parent, with vault-backed creation
//! - **[`ResourceError`]**: error types for resource operations
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use omise_api::{OmiseConfig, PublicKey, RestClient, SecretKey};
//! use omise_api::rest::{ListParams, Resource};
//! use omise_api::rest::resources::{Balance, Customer};
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_123")?)
//!     .public_key(PublicKey::new("pkey_test_123")?)
//!     .build()?;
//! let client = RestClient::new(&config)?;
//!
//! // Singleton
//! let balance = Balance::retrieve(&client, None, None).await?;
//!
//! // One page of customers
//! let customers = Customer::list(&client, Some(ListParams { limit: Some(2), ..Default::default() })).await?;
//! for customer in &customers {
//!     println!("{:?}", customer.email());
//! }
//! if let Some(next) = customers.next_page_params() {
//!     let more = Customer::list(&client, Some(next)).await?;
//! }
//!
//! // Nested cards, with a card created through the vault
//! let mut customer = Customer::retrieve(&client, Some("cust_test_1"), None).await?;
//! let mut cards = customer.cards()?;
//! let card = cards.create(&client, serde_json::json!({"number": "4242424242424242"})).await?;
//! ```

mod attributes;
mod collection;
mod entity;
mod errors;
mod nested;
mod path;
mod resource;

pub mod resources;

// Public exports
pub use crate::clients::Host;
pub use attributes::AttributeStore;
pub use collection::Collection;
pub use entity::Entity;
pub use errors::ResourceError;
pub use nested::{NestedCollection, VaultBacked};
pub use path::{resolve_path, Addressing, Nesting, ResourceDescriptor, ResourceOperation};
pub use resource::{ListParams, Resource};
