//! Collections scoped to a parent entity.
//!
//! A [`NestedCollection`] is a [`Collection`] whose paths hang under a
//! parent entity (e.g., a customer's cards). It keeps a mutable borrow of
//! the parent for as long as it lives, because creating an item also
//! updates the parent.
//!
//! # Creating a nested item
//!
//! Sensitive payloads (card numbers) never go to the main API. Creation is
//! three dependent calls, each awaited in order:
//!
//! 1. POST the raw fields to the vault `/tokens` endpoint with the public key
//! 2. PATCH the parent, attaching the token id
//! 3. GET the new item through the collection
//!
//! There is no rollback. If step 2 fails the token exists remotely but the
//! parent is unchanged. If step 3 fails the parent has changed and the error
//! ([`ResourceError::NestedRetrieveFailed`]) carries the new item's id.

use std::ops::Deref;

use serde_json::{Map, Value};

use crate::clients::{Host, RestClient};
use crate::rest::resources::Token;
use crate::rest::{Collection, ListParams, Resource, ResourceError};

/// A resource whose instances are created by attaching a vault token to a
/// parent.
pub trait VaultBacked: Resource {
    /// Field of the parent that receives the token id (e.g., `card`).
    const ATTACH_FIELD: &'static str;
}

/// A [`Collection`] of `T` scoped to a parent `P`.
///
/// Derefs to [`Collection<T>`] for iteration, metadata and
/// [`Collection::retrieve`].
///
/// # Example
///
/// ```rust,ignore
/// use omise_api::rest::Resource;
/// use omise_api::rest::resources::Customer;
///
/// let mut customer = Customer::retrieve(&client, Some("cust_test_1"), None).await?;
/// let mut cards = customer.cards()?;
///
/// for card in cards.iter() {
///     println!("{:?} ending {:?}", card.brand(), card.last_digits());
/// }
///
/// let card = cards
///     .create(&client, serde_json::json!({
///         "name": "JOHN DOE",
///         "number": "4242424242424242",
///         "expiration_month": 12,
///         "expiration_year": 2030,
///         "security_code": "123"
///     }))
///     .await?;
/// ```
#[derive(Debug)]
pub struct NestedCollection<'p, P: Resource, T: VaultBacked> {
    parent: &'p mut P,
    collection: Collection<T>,
}

impl<'p, P: Resource, T: VaultBacked> NestedCollection<'p, P, T> {
    /// Pairs an already loaded collection with its parent.
    pub fn new(parent: &'p mut P, collection: Collection<T>) -> Self {
        Self { parent, collection }
    }

    /// Builds the collection from the list the parent embeds under `field`.
    ///
    /// No request is made. A parent without `field` yields an empty page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedPayload`] if the embedded list is
    /// malformed.
    pub fn from_embedded(parent: &'p mut P, field: &str) -> Result<Self, ResourceError> {
        let parent_path = parent.entity().location();
        let embedded = parent
            .entity()
            .get(field)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({"object": "list", "data": []}));

        let collection = Collection::from_value(embedded, Some(parent_path))?;
        Ok(Self::new(parent, collection))
    }

    /// Fetches the parent's list from the server with one GET.
    ///
    /// # Errors
    ///
    /// Same as [`Collection::fetch`].
    pub async fn load(
        client: &RestClient,
        parent: &'p mut P,
        params: Option<ListParams>,
    ) -> Result<Self, ResourceError> {
        let parent_path = parent.entity().location();
        let collection = Collection::fetch(client, Some(&parent_path), params).await?;
        Ok(Self::new(parent, collection))
    }

    /// Returns the parent.
    #[must_use]
    pub fn parent(&self) -> &P {
        self.parent
    }

    /// Returns the loaded page.
    #[must_use]
    pub const fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    /// Releases the parent borrow, keeping the loaded page.
    #[must_use]
    pub fn into_collection(self) -> Collection<T> {
        self.collection
    }

    /// Creates an item from sensitive `fields` through the vault.
    ///
    /// See the [module documentation](self) for the three steps. The parent
    /// is replaced by its updated representation after step 2. The loaded
    /// page is not modified.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Config`] before any request when no public key is configured
    /// - the step 1 error; nothing changed anywhere
    /// - [`ResourceError::UnexpectedPayload`] if the token has no preview id
    /// - the step 2 error; a token exists remotely, the parent is unchanged
    /// - [`ResourceError::NestedRetrieveFailed`] if step 3 fails
    pub async fn create(
        &mut self,
        client: &RestClient,
        fields: Value,
    ) -> Result<T, ResourceError> {
        let object = T::DESCRIPTOR.object;

        // Fail before anything is sent when the vault is not configured
        client.http_client(Host::Vault)?;

        let mut body = Map::new();
        body.insert(object.to_string(), fields);
        let token = Token::create(client, Value::Object(body)).await?;

        let token_id = token
            .id()
            .ok_or_else(|| ResourceError::unexpected(Token::DESCRIPTOR.name, "missing 'id'"))?
            .to_string();
        let item_id = token
            .preview_id(object)
            .ok_or_else(|| {
                ResourceError::unexpected(
                    Token::DESCRIPTOR.name,
                    format!("missing '{object}.id' preview"),
                )
            })?
            .to_string();

        let mut attach = Map::new();
        attach.insert(T::ATTACH_FIELD.to_string(), Value::String(token_id.clone()));

        let attached = self
            .parent
            .update(client, Value::Object(attach))
            .await
            .map(|_| ());

        if let Err(e) = attached {
            tracing::warn!(
                token = %token_id,
                parent = %self.parent.entity().location(),
                "Token was created but attaching it to the parent failed: {}",
                e
            );
            return Err(e);
        }

        self.collection
            .retrieve(client, &item_id)
            .await
            .map_err(|e| {
                tracing::warn!(
                    resource = T::DESCRIPTOR.name,
                    id = %item_id,
                    "Item was attached but retrieving it failed: {}",
                    e
                );
                ResourceError::NestedRetrieveFailed {
                    resource: T::DESCRIPTOR.name,
                    id: item_id.clone(),
                    source: Box::new(e),
                }
            })
    }
}

impl<P: Resource, T: VaultBacked> Deref for NestedCollection<'_, P, T> {
    type Target = Collection<T>;

    fn deref(&self) -> &Self::Target {
        &self.collection
    }
}
