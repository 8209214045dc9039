//! Omise resource implementations.
//!
//! Each resource is a thin wrapper around [`Entity`](crate::rest::Entity)
//! with a [`ResourceDescriptor`](crate::rest::ResourceDescriptor) and a few
//! typed accessors. Every field the server sends stays reachable through
//! `attributes()`, whether or not an accessor exists for it.
//!
//! # Available Resources
//!
//! | Resource | Path | Operations |
//! |----------|------|------------|
//! | [`Account`] | `/account` | retrieve, update |
//! | [`Balance`] | `/balance` | retrieve |
//! | [`Customer`] | `/customers/{id}` | retrieve, list, create, update, destroy |
//! | [`Card`] | `/customers/{id}/cards/{id}` | retrieve, list, update, destroy; create through the vault |
//! | [`Token`] | vault `/tokens/{id}` | create, retrieve |
//!
//! # Example
//!
//! ```rust,ignore
//! use omise_api::rest::Resource;
//! use omise_api::rest::resources::{Account, Customer};
//!
//! let account = Account::retrieve(&client, None, None).await?;
//! let mut customer = Customer::retrieve(&client, Some("cust_test_1"), None).await?;
//! let cards = customer.cards()?;
//! ```

mod account;
mod balance;
mod card;
mod customer;
mod token;

pub use account::Account;
pub use balance::Balance;
pub use card::Card;
pub use customer::Customer;
pub use token::Token;
