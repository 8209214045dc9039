//! Account resource implementation.
//!
//! This module provides the [`Account`] resource, the merchant account the
//! secret key belongs to.
//!
//! # Singleton Pattern
//!
//! There is exactly one account per secret key. It lives at `/account` and
//! is retrieved without an id. Two clients with different secret keys
//! retrieve two unrelated accounts.
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::rest::Resource;
//! use omise_api::rest::resources::Account;
//!
//! let account = Account::retrieve(&client, None, None).await?;
//! println!("Account: {:?}", account.email());
//! ```

use std::ops::Deref;

use crate::clients::Host;
use crate::rest::{Addressing, Entity, Nesting, Resource, ResourceDescriptor, ResourceOperation};

/// The merchant account.
#[derive(Clone, Debug, PartialEq)]
pub struct Account(Entity);

impl Account {
    /// The account owner's email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.attributes().get_str("email")
    }

    /// The account's settlement currency (e.g., "thb").
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.attributes().get_str("currency")
    }

    /// The account's country code (e.g., "TH").
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.attributes().get_str("country")
    }

    /// The API version the account defaults to.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.attributes().get_str("api_version")
    }
}

impl Resource for Account {
    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        name: "Account",
        object: "account",
        endpoint: "/account",
        addressing: Addressing::Singleton,
        nesting: Nesting::TopLevel,
        host: Host::Api,
        operations: &[ResourceOperation::Retrieve, ResourceOperation::Update],
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

impl Deref for Account {
    type Target = Entity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
