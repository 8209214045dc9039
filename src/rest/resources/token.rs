//! Token resource implementation.
//!
//! Tokens are created on the vault host with the public key. A token stands
//! in for a sensitive payload and embeds a preview of the object it will
//! become (e.g., the card, with its eventual id).

use std::ops::Deref;

use serde_json::{Map, Value};

use crate::clients::Host;
use crate::rest::{Addressing, Entity, Nesting, Resource, ResourceDescriptor, ResourceOperation};

/// A single-use vault token.
///
/// # Example
///
/// ```rust,ignore
/// use omise_api::rest::Resource;
/// use omise_api::rest::resources::Token;
///
/// let token = Token::create(&client, serde_json::json!({
///     "card": {
///         "name": "JOHN DOE",
///         "number": "4242424242424242",
///         "expiration_month": 12,
///         "expiration_year": 2030,
///         "security_code": "123"
///     }
/// }))
/// .await?;
///
/// println!("{:?} previews card {:?}", token.id(), token.preview_id("card"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token(Entity);

impl Token {
    /// Returns `true` once the token has been consumed.
    #[must_use]
    pub fn used(&self) -> bool {
        self.attributes().get_bool("used").unwrap_or(false)
    }

    /// Returns the embedded preview of `object` (e.g., `"card"`).
    #[must_use]
    pub fn preview(&self, object: &str) -> Option<&Map<String, Value>> {
        self.attributes().get_object(object)
    }

    /// Returns the id the previewed object will have once attached.
    #[must_use]
    pub fn preview_id(&self, object: &str) -> Option<&str> {
        self.preview(object)
            .and_then(|preview| preview.get("id"))
            .and_then(Value::as_str)
    }

    /// Returns the card preview.
    #[must_use]
    pub fn card(&self) -> Option<&Map<String, Value>> {
        self.preview("card")
    }
}

impl Resource for Token {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        name: "Token",
        object: "token",
        endpoint: "/tokens",
        addressing: Addressing::ById,
        nesting: Nesting::TopLevel,
        host: Host::Vault,
        operations: &[ResourceOperation::Create, ResourceOperation::Retrieve],
    };

    fn from_entity(entity: Entity) -> Self {
        Self(entity)
    }

    fn entity(&self) -> &Entity {
        &self.0
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.0
    }

    fn into_entity(self) -> Entity {
        self.0
    }
}

impl Deref for Token {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
