//! Customer resource implementation.
//!
//! This module provides the [`Customer`] resource. Customers own cards, which
//! are reached through [`Customer::cards`] or [`Customer::load_cards`].
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::rest::{ListParams, Resource};
//! use omise_api::rest::resources::Customer;
//! use serde_json::json;
//!
//! // Create
//! let mut customer = Customer::create(&client, json!({
//!     "email": "john.doe@example.com",
//!     "description": "John Doe (id: 30)"
//! }))
//! .await?;
//!
//! // Update (every attribute is replaced by the server response)
//! customer.update(&client, json!({"description": "VIP"})).await?;
//!
//! // List
//! let customers = Customer::list(&client, Some(ListParams { limit: Some(20), ..Default::default() })).await?;
//!
//! // Destroy
//! customer.destroy(&client).await?;
//! assert!(customer.deleted());
//! ```

use std::ops::Deref;

use crate::clients::{Host, RestClient};
use crate::rest::resources::Card;
use crate::rest::{
    Addressing, Entity, ListParams, NestedCollection, Nesting, Resource, ResourceDescriptor,
    ResourceError, ResourceOperation,
};

/// A customer.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer(Entity);

impl Customer {
    /// The customer's email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.attributes().get_str("email")
    }

    /// The merchant's description of the customer.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.attributes().get_str("description")
    }

    /// Id of the card charged by default.
    #[must_use]
    pub fn default_card(&self) -> Option<&str> {
        self.attributes().get_str("default_card")
    }

    /// The customer's cards, from the list embedded in the customer.
    ///
    /// No request is made. The returned collection borrows the customer
    /// mutably so that [`NestedCollection::create`] can update it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedPayload`] if the embedded list is
    /// malformed.
    pub fn cards(&mut self) -> Result<NestedCollection<'_, Self, Card>, ResourceError> {
        NestedCollection::from_embedded(self, "cards")
    }

    /// The customer's cards, fetched from `/customers/{id}/cards`.
    ///
    /// # Errors
    ///
    /// Same as [`Collection::fetch`](crate::rest::Collection::fetch).
    pub async fn load_cards(
        &mut self,
        client: &RestClient,
        params: Option<ListParams>,
    ) -> Result<NestedCollection<'_, Self, Card>, ResourceError> {
        NestedCollection::load(client, self, params).await
    }
}

impl Resource for Customer {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        name: "Customer",
        object: "customer",
        endpoint: "/customers",
        addressing: Addressing::ById,
        nesting: Nesting::TopLevel,
        host: Host::Api,
        operations: &[
            ResourceOperation::Retrieve,
            ResourceOperation::List,
            ResourceOperation::Create,
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

impl Deref for Customer {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer_json() -> serde_json::Value {
        json!({
            "object": "customer",
            "id": "cust_test_1",
            "livemode": false,
            "location": "/customers/cust_test_1",
            "default_card": "card_test_1",
            "email": "john.doe@example.com",
            "description": "John Doe (id: 30)",
            "created": "2015-01-15T04:03:49Z",
            "cards": {
                "object": "list",
                "from": "1970-01-01T07:00:00+07:00",
                "to": "2015-01-15T11:03:49+07:00",
                "offset": 0,
                "limit": 20,
                "total": 1,
                "order": null,
                "location": "/customers/cust_test_1/cards",
                "data": [{
                    "object": "card",
                    "id": "card_test_1",
                    "livemode": false,
                    "country": "us",
                    "brand": "Visa",
                    "last_digits": "4242",
                    "name": "JOHN DOE",
                    "expiration_month": 12,
                    "expiration_year": 2030
                }]
            }
        })
    }

    #[test]
    fn test_customer_accessors() {
        let customer = Customer::from_value(customer_json(), None).unwrap();

        assert_eq!(customer.id(), Some("cust_test_1"));
        assert_eq!(customer.email(), Some("john.doe@example.com"));
        assert_eq!(customer.description(), Some("John Doe (id: 30)"));
        assert_eq!(customer.default_card(), Some("card_test_1"));
        assert_eq!(customer.location(), "/customers/cust_test_1");
    }

    #[test]
    fn test_cards_come_from_embedded_list() {
        let mut customer = Customer::from_value(customer_json(), None).unwrap();
        let cards = customer.cards().unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards.total(), Some(1));
        assert_eq!(cards.location(), "/customers/cust_test_1/cards");
        assert_eq!(cards.parent().id(), Some("cust_test_1"));

        let card = cards.get(0).unwrap();
        assert_eq!(card.last_digits(), Some("4242"));
        assert_eq!(card.location(), "/customers/cust_test_1/cards/card_test_1");
    }

    #[test]
    fn test_cards_without_embedded_list_is_empty() {
        let mut customer =
            Customer::from_value(json!({"object": "customer", "id": "cust_test_2"}), None).unwrap();
        let cards = customer.cards().unwrap();

        assert!(cards.is_empty());
        assert_eq!(cards.location(), "/customers/cust_test_2/cards");
    }
}
