//! Dynamic attribute storage for fetched entities.
//!
//! Every field the server sends is kept, in the order it was sent, whether or
//! not the SDK knows about it. Callers read through typed helpers; writes only
//! happen wholesale after a successful mutating call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The ordered JSON fields of one fetched entity.
///
/// Unknown fields return `None`; nothing panics on a missing or mistyped
/// field.
///
/// # Example
///
/// ```rust
/// use omise_api::rest::AttributeStore;
/// use serde_json::json;
///
/// let store = AttributeStore::from_value(json!({
///     "object": "customer",
///     "id": "cust_test_1",
///     "livemode": false,
///     "created": "2015-01-15T04:03:49Z"
/// }))
/// .unwrap();
///
/// assert_eq!(store.get_str("id"), Some("cust_test_1"));
/// assert_eq!(store.get_bool("livemode"), Some(false));
/// assert!(store.get_datetime("created").is_some());
/// assert!(store.get("unknown").is_none());
/// assert_eq!(store.keys().collect::<Vec<_>>(), ["object", "id", "livemode", "created"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeStore {
    fields: Map<String, Value>,
}

impl AttributeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a JSON value.
    ///
    /// Returns `None` if `value` is not a JSON object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Returns the raw value of `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `field` as a string slice.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns `field` as a signed integer.
    #[must_use]
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    /// Returns `field` as an unsigned integer.
    #[must_use]
    pub fn get_u64(&self, field: &str) -> Option<u64> {
        self.get(field).and_then(Value::as_u64)
    }

    /// Returns `field` as a boolean.
    #[must_use]
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Returns `field` as a nested JSON object.
    #[must_use]
    pub fn get_object(&self, field: &str) -> Option<&Map<String, Value>> {
        self.get(field).and_then(Value::as_object)
    }

    /// Returns `field` as a JSON array.
    #[must_use]
    pub fn get_array(&self, field: &str) -> Option<&Vec<Value>> {
        self.get(field).and_then(Value::as_array)
    }

    /// Parses `field` as an RFC 3339 timestamp.
    #[must_use]
    pub fn get_datetime(&self, field: &str) -> Option<DateTime<Utc>> {
        self.get_str(field)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Returns `true` if the server sent `field`, even as `null`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates field names in server order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the underlying ordered map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a copy of all fields as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Consumes the store, returning the underlying map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    /// Swaps every field for the ones in `fields`.
    pub(crate) fn replace_all(&mut self, fields: Map<String, Value>) {
        self.fields = fields;
    }
}

impl From<Map<String, Value>> for AttributeStore {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card_store() -> AttributeStore {
        AttributeStore::from_value(json!({
            "object": "card",
            "id": "card_test_1",
            "livemode": false,
            "expiration_month": 12,
            "expiration_year": 2030,
            "fingerprint": null,
            "metadata": {"tier": "gold"},
            "tags": ["a", "b"],
            "created": "2015-06-02T05:41:46+07:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(AttributeStore::from_value(json!([1, 2])).is_none());
        assert!(AttributeStore::from_value(json!("card")).is_none());
        assert!(AttributeStore::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_typed_getters() {
        let store = card_store();

        assert_eq!(store.get_str("object"), Some("card"));
        assert_eq!(store.get_u64("expiration_month"), Some(12));
        assert_eq!(store.get_i64("expiration_year"), Some(2030));
        assert_eq!(store.get_bool("livemode"), Some(false));
        assert_eq!(
            store.get_object("metadata").and_then(|m| m.get("tier")),
            Some(&json!("gold"))
        );
        assert_eq!(store.get_array("tags").map(Vec::len), Some(2));
    }

    #[test]
    fn test_mistyped_and_unknown_fields_return_none() {
        let store = card_store();

        assert_eq!(store.get_str("expiration_month"), None);
        assert_eq!(store.get_bool("object"), None);
        assert_eq!(store.get("brand"), None);
        assert_eq!(store.get_datetime("object"), None);
    }

    #[test]
    fn test_null_fields_are_present() {
        let store = card_store();
        assert!(store.contains("fingerprint"));
        assert_eq!(store.get("fingerprint"), Some(&Value::Null));
        assert!(!store.contains("brand"));
    }

    #[test]
    fn test_datetime_is_normalized_to_utc() {
        let store = card_store();
        let created = store.get_datetime("created").unwrap();
        assert_eq!(created.to_rfc3339(), "2015-06-01T22:41:46+00:00");
    }

    #[test]
    fn test_preserves_server_order() {
        let store = card_store();
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys.first(), Some(&"object"));
        assert_eq!(keys.last(), Some(&"created"));
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn test_replace_all_drops_old_fields() {
        let mut store = card_store();
        let replacement = json!({"object": "card", "id": "card_test_1", "name": "JOHN DOE"});
        store.replace_all(replacement.as_object().unwrap().clone());

        assert_eq!(store.len(), 3);
        assert!(!store.contains("expiration_month"));
        assert_eq!(store.get_str("name"), Some("JOHN DOE"));
        assert_eq!(store.to_value(), replacement);
    }

    #[test]
    fn test_serializes_transparently() {
        let store = card_store();
        let serialized = serde_json::to_value(&store).unwrap();
        assert_eq!(serialized, store.to_value());

        let round: AttributeStore = serde_json::from_value(serialized).unwrap();
        assert_eq!(round, store);
    }
}
