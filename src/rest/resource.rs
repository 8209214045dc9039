//! Resource trait for CRUD operations.
//!
//! This module defines the [`Resource`] trait, which provides a standardized
//! interface for Omise resources. A resource supplies a
//! [`ResourceDescriptor`] and a thin wrapper around [`Entity`]; it gains
//! `retrieve()`, `create()`, `list()`, `update()`, `reload()` and
//! `destroy()`.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use omise_api::clients::Host;
//! use omise_api::rest::{Addressing, Entity, Nesting, Resource, ResourceDescriptor, ResourceOperation};
//!
//! #[derive(Clone, Debug)]
//! pub struct Dispute(Entity);
//!
//! impl Resource for Dispute {
//!     const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
//!         name: "Dispute",
//!         object: "dispute",
//!         endpoint: "/disputes",
//!         addressing: Addressing::ById,
//!         nesting: Nesting::TopLevel,
//!         host: Host::Api,
//!         operations: &[ResourceOperation::Retrieve, ResourceOperation::List],
//!     };
//!
//!     fn from_entity(entity: Entity) -> Self { Self(entity) }
//!     fn entity(&self) -> &Entity { &self.0 }
//!     fn entity_mut(&mut self) -> &mut Entity { &mut self.0 }
//!     fn into_entity(self) -> Entity { self.0 }
//! }
//!
//! // Usage:
//! let dispute = Dispute::retrieve(&client, Some("dspt_1"), None).await?;
//! let disputes = Dispute::list(&client, None).await?;
//! ```

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{Collection, Entity, ResourceDescriptor, ResourceError};

/// Pagination and filtering parameters for list operations.
///
/// Unset fields are left out of the query string.
///
/// # Example
///
/// ```rust
/// use omise_api::rest::ListParams;
///
/// let params = ListParams {
///     limit: Some(20),
///     order: Some("reverse_chronological".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(params.limit, Some(20));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// `chronological` or `reverse_chronological`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Earliest creation time (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Latest creation time (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// An Omise resource type.
///
/// Implementors wrap an [`Entity`] and declare a [`ResourceDescriptor`].
/// All operations check the descriptor before sending anything, so an
/// unsupported operation or a badly addressed call never reaches the
/// network.
#[allow(async_fn_in_trait)]
pub trait Resource: Sized + Send + Sync {
    /// How this resource is addressed and what it supports.
    const DESCRIPTOR: ResourceDescriptor;

    /// Wraps an entity already checked against [`Self::DESCRIPTOR`].
    fn from_entity(entity: Entity) -> Self;

    /// Returns the wrapped entity.
    fn entity(&self) -> &Entity;

    /// Returns the wrapped entity mutably.
    fn entity_mut(&mut self) -> &mut Entity;

    /// Unwraps the entity.
    fn into_entity(self) -> Entity;

    /// Builds an instance from a payload without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedPayload`] if the payload does not
    /// describe this resource.
    fn from_value(value: Value, parent_path: Option<String>) -> Result<Self, ResourceError> {
        Entity::from_value(Self::DESCRIPTOR, parent_path, value).map(Self::from_entity)
    }

    /// Fetches one top-level instance.
    ///
    /// Pass `None` as `id` for singletons. Nested resources are fetched
    /// through their parent's collection instead.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::SingletonAddressedById`],
    /// [`ResourceError::MissingId`] or [`ResourceError::PathResolutionFailed`]
    /// without a request when the call is badly addressed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let account = Account::retrieve(&client, None, None).await?;
    /// let customer = Customer::retrieve(&client, Some("cust_test_1"), None).await?;
    /// ```
    async fn retrieve(
        client: &RestClient,
        id: Option<&str>,
        query: Option<HashMap<String, String>>,
    ) -> Result<Self, ResourceError> {
        Entity::retrieve(client, Self::DESCRIPTOR, None, id, query)
            .await
            .map(Self::from_entity)
    }

    /// Creates a top-level instance from `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedOperation`] without a request if
    /// the resource cannot be created directly.
    async fn create(client: &RestClient, fields: Value) -> Result<Self, ResourceError> {
        Entity::create(client, Self::DESCRIPTOR, None, fields)
            .await
            .map(Self::from_entity)
    }

    /// Lists top-level instances.
    ///
    /// Returns one page. Use [`Collection::next_page_params`] to request
    /// the next one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedOperation`] without a request if
    /// the resource cannot be listed.
    async fn list(
        client: &RestClient,
        params: Option<ListParams>,
    ) -> Result<Collection<Self>, ResourceError> {
        Collection::fetch(client, None, params).await
    }

    /// Updates this instance with `fields`, replacing all attributes.
    ///
    /// # Errors
    ///
    /// See [`Entity::update`].
    async fn update(
        &mut self,
        client: &RestClient,
        fields: Value,
    ) -> Result<&mut Self, ResourceError> {
        self.entity_mut().update(client, fields).await?;
        Ok(self)
    }

    /// Re-fetches this instance in place.
    ///
    /// # Errors
    ///
    /// See [`Entity::reload`].
    async fn reload(&mut self, client: &RestClient) -> Result<&mut Self, ResourceError> {
        self.entity_mut().reload(client).await?;
        Ok(self)
    }

    /// Deletes this instance.
    ///
    /// # Errors
    ///
    /// See [`Entity::destroy`].
    async fn destroy(&mut self, client: &RestClient) -> Result<&mut Self, ResourceError> {
        self.entity_mut().destroy(client).await?;
        Ok(self)
    }
}

/// Serializes parameters to a query parameter map.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParams {
        reason: e.to_string(),
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {} // Skip null values
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(_) | Value::Object(_) => {
                    return Err(ResourceError::InvalidParams {
                        reason: format!("'{key}' cannot be sent as a query parameter"),
                    });
                }
            }
        }
    }

    Ok(query)
}
