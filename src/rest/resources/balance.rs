//! Balance resource implementation.
//!
//! The [`Balance`] is a read-only singleton at `/balance`. Amounts are in the
//! smallest unit of the account currency (satangs for THB).

use std::ops::Deref;

use crate::clients::Host;
use crate::rest::{Addressing, Entity, Nesting, Resource, ResourceDescriptor, ResourceOperation};

/// The account balance.
///
/// # Example
///
/// ```rust,ignore
/// use omise_api::rest::Resource;
/// use omise_api::rest::resources::Balance;
///
/// let balance = Balance::retrieve(&client, None, None).await?;
/// println!("{:?} of {:?} available", balance.available(), balance.total());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Balance(Entity);

impl Balance {
    /// Total balance, including funds not yet transferable.
    #[must_use]
    pub fn total(&self) -> Option<i64> {
        self.attributes().get_i64("total")
    }

    /// Funds that can be transferred now.
    ///
    /// Older API versions call this field `transferable`.
    #[must_use]
    pub fn available(&self) -> Option<i64> {
        self.attributes()
            .get_i64("available")
            .or_else(|| self.attributes().get_i64("transferable"))
    }

    /// The balance currency (e.g., "thb").
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.attributes().get_str("currency")
    }
}

impl Resource for Balance {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        name: "Balance",
        object: "balance",
        endpoint: "/balance",
        addressing: Addressing::Singleton,
        nesting: Nesting::TopLevel,
        host: Host::Api,
        operations: &[ResourceOperation::Retrieve],
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

impl Deref for Balance {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
