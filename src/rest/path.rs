//! Path building infrastructure for REST resources.
//!
//! This module describes how each resource type is addressed and turns that
//! description into request paths.
//!
//! # Path Resolution
//!
//! A path is `[parent path] + endpoint [+ "/" + id]`:
//!
//! - `/account` (singleton, never takes an id)
//! - `/customers` and `/customers/{id}` (top-level)
//! - `/customers/{customer_id}/cards/{id}` (nested under a customer)
//!
//! Ids are percent-encoded as a single path segment. Parent paths are taken
//! as already resolved.
//!
//! # Example
//!
//! ```rust
//! use omise_api::rest::resolve_path;
//!
//! assert_eq!(resolve_path("/account", None, None), "/account");
//! assert_eq!(resolve_path("/customers", Some("cust_1"), None), "/customers/cust_1");
//! assert_eq!(
//!     resolve_path("/cards", Some("card_1"), Some("/customers/cust_1")),
//!     "/customers/cust_1/cards/card_1"
//! );
//! ```

use crate::clients::{Host, HttpMethod};
use crate::rest::ResourceError;

/// Operations that can be performed on a REST resource.
///
/// Each operation corresponds to a specific HTTP method and URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource (GET /resources/{id} or GET /singleton).
    Retrieve,
    /// List resources (GET /resources).
    List,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PATCH /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Destroy,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Retrieve | Self::List => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Patch,
            Self::Destroy => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Retrieve => "retrieve",
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Destroy => "destroy",
        }
    }

    /// Returns `true` if the operation targets one instance.
    #[must_use]
    pub const fn targets_instance(&self) -> bool {
        matches!(self, Self::Retrieve | Self::Update | Self::Destroy)
    }
}

/// Whether instances of a resource are addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// Instances live at `{endpoint}/{id}`.
    ById,
    /// The resource is the endpoint itself (`/account`); ids are rejected.
    Singleton,
}

/// Whether a resource lives under a parent entity's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    /// The endpoint is at the root of its host.
    TopLevel,
    /// The endpoint is appended to a parent path.
    Nested,
}

/// Static description of a resource type.
///
/// Every resource declares one of these as a constant. It is all the
/// resource layer needs to build paths, pick a host and reject unsupported
/// operations locally.
///
/// # Example
///
/// ```rust
/// use omise_api::rest::{Addressing, Nesting, ResourceDescriptor, ResourceOperation};
/// use omise_api::clients::Host;
///
/// const ACCOUNT: ResourceDescriptor = ResourceDescriptor {
///     name: "Account",
///     object: "account",
///     endpoint: "/account",
///     addressing: Addressing::Singleton,
///     nesting: Nesting::TopLevel,
///     host: Host::Api,
///     operations: &[ResourceOperation::Retrieve, ResourceOperation::Update],
/// };
///
/// assert_eq!(ACCOUNT.path(ResourceOperation::Retrieve, None, None).unwrap(), "/account");
/// assert!(ACCOUNT.path(ResourceOperation::Retrieve, Some("acct_1"), None).is_err());
/// assert!(ACCOUNT.path(ResourceOperation::Destroy, None, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Type name used in errors and logs (e.g., "Customer").
    pub name: &'static str,
    /// Value of the `object` field in payloads (e.g., "customer").
    pub object: &'static str,
    /// Endpoint relative to the host or parent path (e.g., "/customers").
    pub endpoint: &'static str,
    /// Whether instances take an id.
    pub addressing: Addressing,
    /// Whether a parent path is required.
    pub nesting: Nesting,
    /// Which host (and credential) serves this resource.
    pub host: Host,
    /// Operations the resource supports.
    pub operations: &'static [ResourceOperation],
}

impl ResourceDescriptor {
    /// Returns `true` if `operation` is supported.
    #[must_use]
    pub fn supports(&self, operation: ResourceOperation) -> bool {
        self.operations.contains(&operation)
    }

    /// Returns `true` for singleton resources.
    #[must_use]
    pub const fn is_singleton(&self) -> bool {
        matches!(self.addressing, Addressing::Singleton)
    }

    /// Returns `true` for resources that need a parent path.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self.nesting, Nesting::Nested)
    }

    /// Resolves the request path for `operation`.
    ///
    /// Validation runs before any request is built:
    ///
    /// 1. the operation must be supported
    /// 2. singletons must not receive an id
    /// 3. nested resources must receive a parent path
    /// 4. instance operations on id-addressed resources must receive an id
    ///
    /// Collection operations (`List`, `Create`) ignore `id`.
    ///
    /// # Errors
    ///
    /// Returns the matching [`ResourceError`] variant for each failed check.
    pub fn path(
        &self,
        operation: ResourceOperation,
        id: Option<&str>,
        parent: Option<&str>,
    ) -> Result<String, ResourceError> {
        if !self.supports(operation) {
            return Err(ResourceError::UnsupportedOperation {
                resource: self.name,
                operation: operation.as_str(),
            });
        }

        if self.is_singleton() {
            if let Some(id) = id {
                return Err(ResourceError::SingletonAddressedById {
                    resource: self.name,
                    id: id.to_string(),
                });
            }
        }

        if self.is_nested() && parent.is_none() {
            return Err(ResourceError::PathResolutionFailed {
                resource: self.name,
                operation: operation.as_str(),
            });
        }

        let id = if operation.targets_instance() && !self.is_singleton() {
            match id {
                Some(id) if !id.is_empty() => Some(id),
                _ => {
                    return Err(ResourceError::MissingId {
                        resource: self.name,
                        operation: operation.as_str(),
                    })
                }
            }
        } else {
            None
        };

        let parent = if self.is_nested() { parent } else { None };

        Ok(resolve_path(self.endpoint, id, parent))
    }
}

/// Joins a parent path, an endpoint and an optional id into a request path.
///
/// Pure and deterministic. Empty segments at the joins are dropped so
/// `"/customers/"` and `"/cards"` never produce a double slash. The id is
/// percent-encoded; the parent and endpoint are used as given.
#[must_use]
pub fn resolve_path(endpoint: &str, id: Option<&str>, parent: Option<&str>) -> String {
    let mut segments: Vec<String> = [parent, Some(endpoint)]
        .into_iter()
        .flatten()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect();

    if let Some(id) = id {
        segments.push(urlencoding::encode(id).into_owned());
    }

    format!("/{}", segments.join("/"))
}
