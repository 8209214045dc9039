//! Paginated collections of resources.
//!
//! A [`Collection`] is one page of a list endpoint: the decoded items plus
//! the envelope metadata the server sent. Iterating never fetches; moving to
//! another page or fetching a single item is always an explicit call.

use std::slice;

use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::resource::serialize_to_query;
use crate::rest::{Entity, ListParams, Resource, ResourceError, ResourceOperation};

/// One page of resources with the list envelope's metadata.
///
/// The metadata (`total`, `limit`, `offset`, `order`, `from`, `to`) is
/// mirrored from the server, never recomputed. Items are kept in server
/// order, never sorted or deduplicated.
///
/// # Example
///
/// ```rust
/// use omise_api::rest::Collection;
/// use omise_api::rest::resources::Customer;
/// use serde_json::json;
///
/// let page: Collection<Customer> = Collection::from_value(
///     json!({
///         "object": "list",
///         "total": 3,
///         "limit": 2,
///         "offset": 0,
///         "data": [
///             {"object": "customer", "id": "cust_a"},
///             {"object": "customer", "id": "cust_b"}
///         ]
///     }),
///     None,
/// )
/// .unwrap();
///
/// let ids: Vec<_> = page.iter().filter_map(|c| c.id()).collect();
/// assert_eq!(ids, ["cust_a", "cust_b"]);
/// assert_eq!(page.total(), Some(3));
/// assert!(page.has_more());
/// ```
#[derive(Clone, Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    total: Option<u64>,
    limit: Option<u64>,
    offset: Option<u64>,
    order: Option<String>,
    from: Option<String>,
    to: Option<String>,
    location: String,
    parent_path: Option<String>,
}

impl<T: Resource> Collection<T> {
    /// Decodes a list envelope.
    ///
    /// Each item must describe `T`. `parent_path` is required for nested
    /// resources so that items and the collection itself can be addressed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedPayload`] if the envelope is not a
    /// list, has no `data` array, or an item does not describe `T`.
    pub fn from_value(value: Value, parent_path: Option<String>) -> Result<Self, ResourceError> {
        let descriptor = T::DESCRIPTOR;
        let location = descriptor.path(ResourceOperation::List, None, parent_path.as_deref())?;

        let Value::Object(mut envelope) = value else {
            return Err(ResourceError::unexpected(
                descriptor.name,
                "expected a list object",
            ));
        };

        if let Some(object) = envelope.get("object").and_then(Value::as_str) {
            if object != "list" {
                return Err(ResourceError::unexpected(
                    descriptor.name,
                    format!("expected object 'list', got '{object}'"),
                ));
            }
        }

        let Some(Value::Array(data)) = envelope.remove("data") else {
            return Err(ResourceError::unexpected(
                descriptor.name,
                "list is missing its 'data' array",
            ));
        };

        let items = data
            .into_iter()
            .map(|item| {
                Entity::from_value(descriptor, parent_path.clone(), item).map(T::from_entity)
            })
            .collect::<Result<Vec<T>, ResourceError>>()?;

        let number = |name: &str| envelope.get(name).and_then(Value::as_u64);
        let text = |name: &str| {
            envelope
                .get(name)
                .and_then(Value::as_str)
                .map(String::from)
        };

        Ok(Self {
            total: number("total"),
            limit: number("limit"),
            offset: number("offset"),
            order: text("order"),
            from: text("from"),
            to: text("to"),
            items,
            location,
            parent_path,
        })
    }

    /// Fetches one page from the list endpoint.
    ///
    /// # Errors
    ///
    /// Returns a local [`ResourceError`] if `T` cannot be listed this way,
    /// or the transport/API error of the single GET.
    pub async fn fetch(
        client: &RestClient,
        parent_path: Option<&str>,
        params: Option<ListParams>,
    ) -> Result<Self, ResourceError> {
        let descriptor = T::DESCRIPTOR;
        let path = descriptor.path(ResourceOperation::List, None, parent_path)?;

        let query = params
            .map(|p| serialize_to_query(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        tracing::debug!(resource = descriptor.name, path = %path, "Listing resources");

        let response = client.get(descriptor.host, &path, query).await?;
        Self::from_value(response.body, parent_path.map(String::from))
    }

    /// Fetches the page described by [`next_page_params`](Self::next_page_params).
    ///
    /// Returns `Ok(None)` without a request when this is the last page.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch).
    pub async fn next_page(&self, client: &RestClient) -> Result<Option<Self>, ResourceError> {
        match self.next_page_params() {
            Some(params) => Self::fetch(client, self.parent_path(), Some(params))
                .await
                .map(Some),
            None => Ok(None),
        }
    }

    /// Fetches a single item by id with exactly one GET to `{location}/{id}`.
    ///
    /// The id does not need to be on the loaded page; the page is not
    /// consulted or modified.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnsupportedOperation`] without a request if
    /// `T` cannot be retrieved, or the transport/API error of the GET.
    pub async fn retrieve(&self, client: &RestClient, id: &str) -> Result<T, ResourceError> {
        Entity::retrieve(client, T::DESCRIPTOR, self.parent_path(), Some(id), None)
            .await
            .map(T::from_entity)
    }
}

impl<T> Collection<T> {
    /// Iterates the loaded page. Never fetches.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index` on this page.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the loaded items.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the collection, returning its items.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Total number of items across all pages, as reported by the server.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.total
    }

    /// Page size the server applied.
    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Number of items skipped before this page.
    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Sort order the server applied.
    #[must_use]
    pub fn order(&self) -> Option<&str> {
        self.order.as_deref()
    }

    /// Lower creation-time bound the server applied.
    #[must_use]
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    /// Upper creation-time bound the server applied.
    #[must_use]
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Returns the collection path (e.g., `/customers/cust_1/cards`).
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the parent path for nested collections.
    #[must_use]
    pub fn parent_path(&self) -> Option<&str> {
        self.parent_path.as_deref()
    }

    /// Returns `true` if the server reports items beyond this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match (self.total, self.end_offset()) {
            (Some(total), Some(end)) => end < total,
            _ => false,
        }
    }

    /// Parameters for the following page, or `None` on the last page.
    ///
    /// Keeps the server's `limit`, `order`, `from` and `to`. An empty page
    /// never has a successor, since its offset would not advance.
    #[must_use]
    pub fn next_page_params(&self) -> Option<ListParams> {
        if self.items.is_empty() || !self.has_more() {
            return None;
        }

        Some(ListParams {
            limit: self.limit,
            offset: self.end_offset(),
            order: self.order.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        })
    }

    /// Offset just past this page, or `None` if it does not fit in a `u64`.
    fn end_offset(&self) -> Option<u64> {
        let len = u64::try_from(self.items.len()).ok()?;
        self.offset.unwrap_or(0).checked_add(len)
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
