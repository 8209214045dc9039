//! Card resource implementation.
//!
//! Cards are nested under customers (`/customers/{id}/cards/{id}`). They are
//! never created on the main API directly: card numbers go to the vault, and
//! the resulting token is attached to the customer. Use
//! [`NestedCollection::create`](crate::rest::NestedCollection::create) on
//! [`Customer::cards`](crate::rest::resources::Customer::cards).

use std::ops::Deref;

use crate::clients::Host;
use crate::rest::{
    Addressing, Entity, Nesting, Resource, ResourceDescriptor, ResourceOperation, VaultBacked,
};

/// A customer's card.
///
/// # Example
///
/// ```rust,ignore
/// let mut cards = customer.cards()?;
/// let mut card = cards.retrieve(&client, "card_test_1").await?;
///
/// card.update(&client, serde_json::json!({"name": "JANE DOE"})).await?;
/// println!("{:?} ending {:?}", card.brand(), card.last_digits());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Card(Entity);

impl Card {
    /// The card holder's name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes().get_str("name")
    }

    /// The card brand (e.g., "Visa").
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.attributes().get_str("brand")
    }

    /// The last four digits of the card number.
    #[must_use]
    pub fn last_digits(&self) -> Option<&str> {
        self.attributes().get_str("last_digits")
    }

    /// Expiration month (1-12).
    #[must_use]
    pub fn expiration_month(&self) -> Option<u64> {
        self.attributes().get_u64("expiration_month")
    }

    /// Expiration year.
    #[must_use]
    pub fn expiration_year(&self) -> Option<u64> {
        self.attributes().get_u64("expiration_year")
    }

    /// Fingerprint shared by all cards with the same number.
    #[must_use]
    pub fn fingerprint(&self) -> Option<&str> {
        self.attributes().get_str("fingerprint")
    }
}

impl Resource for Card {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        name: "Card",
        object: "card",
        endpoint: "/cards",
        addressing: Addressing::ById,
        nesting: Nesting::Nested,
        host: Host::Api,
        operations: &[
            ResourceOperation::Retrieve,
            ResourceOperation::List,
            ResourceOperation::Update,
            ResourceOperation::Destroy,
        ],
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

impl VaultBacked for Card {
    const ATTACH_FIELD: &'static str = "card";
}

impl Deref for Card {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
