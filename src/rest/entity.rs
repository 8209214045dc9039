//! Live entities backed by an [`AttributeStore`].
//!
//! An [`Entity`] is one JSON object fetched from the API together with what
//! is needed to address it again: its resource descriptor and, for nested
//! resources, the parent path it was loaded under.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::{resolve_path, AttributeStore, ResourceDescriptor, ResourceError, ResourceOperation};

/// A single resource instance mapped from one JSON object.
///
/// Every mutating call (`update`, `reload`, `destroy`) is exactly one round
/// trip. On success the whole attribute store is replaced by the server's
/// response; on failure nothing changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    descriptor: ResourceDescriptor,
    parent_path: Option<String>,
    attributes: AttributeStore,
}

impl Entity {
    /// Builds an entity from a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedPayload`] if:
    /// - `value` is not a JSON object
    /// - its `object` field names another resource type
    /// - an id-addressed resource has no string `id`
    pub fn from_value(
        descriptor: ResourceDescriptor,
        parent_path: Option<String>,
        value: Value,
    ) -> Result<Self, ResourceError> {
        let attributes = Self::decode(&descriptor, value)?;
        Ok(Self {
            descriptor,
            parent_path,
            attributes,
        })
    }

    fn decode(descriptor: &ResourceDescriptor, value: Value) -> Result<AttributeStore, ResourceError> {
        let attributes = AttributeStore::from_value(value)
            .ok_or_else(|| ResourceError::unexpected(descriptor.name, "expected a JSON object"))?;

        if let Some(object) = attributes.get_str("object") {
            if object != descriptor.object {
                return Err(ResourceError::unexpected(
                    descriptor.name,
                    format!("expected object '{}', got '{object}'", descriptor.object),
                ));
            }
        }

        if !descriptor.is_singleton() && attributes.get_str("id").is_none() {
            return Err(ResourceError::unexpected(descriptor.name, "missing 'id'"));
        }

        Ok(attributes)
    }

    /// Returns the resource descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// Returns the id, or `None` for singletons.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        if self.descriptor.is_singleton() {
            None
        } else {
            self.attributes.get_str("id")
        }
    }

    /// Returns the parent path this entity was loaded under.
    #[must_use]
    pub fn parent_path(&self) -> Option<&str> {
        self.parent_path.as_deref()
    }

    /// Returns the path of this entity (e.g., `/customers/cust_1/cards/card_1`).
    #[must_use]
    pub fn location(&self) -> String {
        let parent = if self.descriptor.is_nested() {
            self.parent_path()
        } else {
            None
        };
        resolve_path(self.descriptor.endpoint, self.id(), parent)
    }

    /// Returns all attributes.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Returns the raw value of `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    /// Returns `true` if this entity came from the live environment.
    #[must_use]
    pub fn livemode(&self) -> Option<bool> {
        self.attributes.get_bool("livemode")
    }

    /// Returns the creation time.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.attributes.get_datetime("created")
    }

    /// Returns `true` once the server reported this entity as deleted.
    #[must_use]
    pub fn deleted(&self) -> bool {
        self.attributes.get_bool("deleted").unwrap_or(false)
    }

    /// Consumes the entity, returning its attributes.
    #[must_use]
    pub fn into_attributes(self) -> AttributeStore {
        self.attributes
    }

    /// Fetches one instance.
    ///
    /// `id` must be `None` for singletons and present otherwise; `parent`
    /// is required for nested resources. Checks run before any request.
    ///
    /// # Errors
    ///
    /// Returns a local [`ResourceError`] if the resource cannot be addressed
    /// this way, or the transport/API error of the single GET.
    pub async fn retrieve(
        client: &RestClient,
        descriptor: ResourceDescriptor,
        parent: Option<&str>,
        id: Option<&str>,
        query: Option<HashMap<String, String>>,
    ) -> Result<Self, ResourceError> {
        let path = descriptor.path(ResourceOperation::Retrieve, id, parent)?;

        tracing::debug!(resource = descriptor.name, path = %path, "Retrieving resource");

        let response = client.get(descriptor.host, &path, query).await?;
        Self::from_response(descriptor, parent, response)
    }

    /// Creates an instance by POSTing `fields` to the collection endpoint.
    ///
    /// # Errors
    ///
    /// Returns a local [`ResourceError`] if the resource does not support
    /// creation, or the transport/API error of the single POST.
    pub async fn create(
        client: &RestClient,
        descriptor: ResourceDescriptor,
        parent: Option<&str>,
        fields: Value,
    ) -> Result<Self, ResourceError> {
        let path = descriptor.path(ResourceOperation::Create, None, parent)?;

        tracing::debug!(resource = descriptor.name, path = %path, "Creating resource");

        let response = client.post(descriptor.host, &path, fields).await?;
        Self::from_response(descriptor, parent, response)
    }

    /// Sends `fields` as a PATCH to this entity's path.
    ///
    /// On success every attribute is replaced by the server response; fields
    /// not present in the response are gone.
    ///
    /// # Errors
    ///
    /// Returns a local [`ResourceError`] if the resource cannot be updated,
    /// or the transport/API error of the single PATCH. The entity is
    /// unchanged on error.
    pub async fn update(
        &mut self,
        client: &RestClient,
        fields: Value,
    ) -> Result<&mut Self, ResourceError> {
        let path = self.instance_path(ResourceOperation::Update)?;

        tracing::debug!(resource = self.descriptor.name, path = %path, "Updating resource");

        let response = client.patch(self.descriptor.host, &path, fields).await?;
        self.replace_from(response)?;
        Ok(self)
    }

    /// Re-fetches this entity in place.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update), for a single GET.
    pub async fn reload(&mut self, client: &RestClient) -> Result<&mut Self, ResourceError> {
        let path = self.instance_path(ResourceOperation::Retrieve)?;

        tracing::debug!(resource = self.descriptor.name, path = %path, "Reloading resource");

        let response = client.get(self.descriptor.host, &path, None).await?;
        self.replace_from(response)?;
        Ok(self)
    }

    /// Deletes this entity on the server.
    ///
    /// The attributes are replaced by the deletion payload, after which
    /// [`deleted`](Self::deleted) returns `true`.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update), for a single DELETE.
    pub async fn destroy(&mut self, client: &RestClient) -> Result<&mut Self, ResourceError> {
        let path = self.instance_path(ResourceOperation::Destroy)?;

        tracing::debug!(resource = self.descriptor.name, path = %path, "Destroying resource");

        let response = client.delete(self.descriptor.host, &path).await?;
        self.replace_from(response)?;
        Ok(self)
    }

    fn instance_path(&self, operation: ResourceOperation) -> Result<String, ResourceError> {
        self.descriptor
            .path(operation, self.id(), self.parent_path())
    }

    fn from_response(
        descriptor: ResourceDescriptor,
        parent: Option<&str>,
        response: HttpResponse,
    ) -> Result<Self, ResourceError> {
        Self::from_value(descriptor, parent.map(String::from), response.body)
    }

    /// Decodes `response` fully before touching the store.
    fn replace_from(&mut self, response: HttpResponse) -> Result<(), ResourceError> {
        let attributes = Self::decode(&self.descriptor, response.body)?;
        self.attributes.replace_all(attributes.into_map());
        Ok(())
    }
}
