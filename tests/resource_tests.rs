//! Integration tests for resource operations.
//!
//! These tests run resources against a mock Omise server and verify
//! addressing, attribute replacement, collections, and error handling.

use base64::{engine::general_purpose::STANDARD, Engine};
use omise_api::rest::resources::{Account, Balance, Customer};
use omise_api::rest::{ListParams, Resource, ResourceError};
use omise_api::{HostUrl, OmiseConfig, RestClient, SecretKey};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server for both hosts.
fn create_test_client(server: &MockServer, secret_key: &str) -> RestClient {
    let config = OmiseConfig::builder()
        .secret_key(SecretKey::new(secret_key).unwrap())
        .api_host(HostUrl::new(server.uri()).unwrap())
        .vault_host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn basic_auth(key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{key}:")))
}

fn customer_json(id: &str, email: &str) -> serde_json::Value {
    json!({
        "object": "customer",
        "id": id,
        "livemode": false,
        "location": format!("/customers/{id}"),
        "email": email,
        "description": "John Doe (id: 30)",
        "metadata": {"tier": "gold"},
        "created": "2015-01-15T04:03:49Z"
    })
}

// ============================================================================
// Singleton Tests
// ============================================================================

#[tokio::test]
async fn test_account_is_retrieved_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "account",
            "id": "acct_test_1",
            "email": "merchant@example.com",
            "currency": "thb",
            "created": "2015-01-15T04:03:49Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let account = Account::retrieve(&client, None, None).await.unwrap();

    assert_eq!(account.email(), Some("merchant@example.com"));
    assert_eq!(account.currency(), Some("thb"));
    assert_eq!(account.id(), None);
    assert_eq!(account.location(), "/account");
}

#[tokio::test]
async fn test_balance_is_retrieved_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "balance",
            "livemode": false,
            "location": "/balance",
            "available": 380470,
            "total": 380470,
            "currency": "thb"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let balance = Balance::retrieve(&client, None, None).await.unwrap();

    assert_eq!(balance.total(), Some(380_470));
    assert_eq!(balance.available(), Some(380_470));
    assert_eq!(balance.currency(), Some("thb"));
}

#[tokio::test]
async fn test_repeated_singleton_retrieves_yield_equal_but_separate_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "account",
            "id": "acct_test_1",
            "email": "merchant@example.com"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let first = Account::retrieve(&client, None, None).await.unwrap();
    let mut second = Account::retrieve(&client, None, None).await.unwrap();

    assert_eq!(first.attributes(), second.attributes());

    // Changing one value leaves the other untouched
    Mock::given(method("PATCH"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "account",
            "id": "acct_test_1",
            "email": "changed@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    second
        .update(&client, json!({"email": "changed@example.com"}))
        .await
        .unwrap();

    assert_eq!(first.email(), Some("merchant@example.com"));
    assert_eq!(second.email(), Some("changed@example.com"));
}

#[tokio::test]
async fn test_singleton_addressed_by_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let result = Account::retrieve(&client, Some("acct_test_1"), None).await;

    match result {
        Err(ResourceError::SingletonAddressedById { resource, id }) => {
            assert_eq!(resource, "Account");
            assert_eq!(id, "acct_test_1");
        }
        other => panic!("Expected SingletonAddressedById, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unsupported_operation_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let result = Balance::list(&client, None).await;

    let error = result.unwrap_err();
    assert!(matches!(
        error,
        ResourceError::UnsupportedOperation {
            resource: "Balance",
            operation: "list"
        }
    ));
    assert!(error.is_local());
}

#[tokio::test]
async fn test_missing_singleton_surfaces_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req_123")
                .set_body_json(json!({
                    "object": "error",
                    "location": "https://www.omise.co/api-errors#not-found",
                    "code": "not_found",
                    "message": "balance was not found"
                })),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let error = Balance::retrieve(&client, None, None).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.request_id(), Some("req_123"));
    let api_error = error.api_error().unwrap();
    assert_eq!(api_error.code.as_deref(), Some("not_found"));
    assert_eq!(api_error.message, "balance was not found");
    assert!(!error.is_local());
}

// ============================================================================
// Multi-account Tests
// ============================================================================

#[tokio::test]
async fn test_two_secret_keys_yield_independent_instances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .and(header("Authorization", basic_auth("skey_test_a").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "account",
            "id": "acct_a",
            "email": "a@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .and(header("Authorization", basic_auth("skey_test_b").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "account",
            "id": "acct_b",
            "email": "b@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let first = create_test_client(&server, "skey_test_a");
    let second = first
        .with_secret_key(SecretKey::new("skey_test_b").unwrap())
        .unwrap();

    let a = Account::retrieve(&first, None, None).await.unwrap();
    let b = Account::retrieve(&second, None, None).await.unwrap();

    assert_eq!(a.email(), Some("a@example.com"));
    assert_eq!(b.email(), Some("b@example.com"));
    assert_ne!(a, b);
}

// ============================================================================
// Instance Operation Tests
// ============================================================================

#[tokio::test]
async fn test_create_posts_fields_to_collection_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/customers"))
        .and(body_json(json!({"email": "john.doe@example.com"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(customer_json("cust_test_1", "john.doe@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let customer = Customer::create(&client, json!({"email": "john.doe@example.com"}))
        .await
        .unwrap();

    assert_eq!(customer.id(), Some("cust_test_1"));
    assert_eq!(customer.location(), "/customers/cust_test_1");
}

#[tokio::test]
async fn test_update_replaces_every_attribute() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/customers/cust_test_1"))
        .and(body_json(json!({"email": "new@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "customer",
            "id": "cust_test_1",
            "email": "new@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let mut customer =
        Customer::from_value(customer_json("cust_test_1", "old@example.com"), None).unwrap();
    assert!(customer.attributes().contains("metadata"));

    customer
        .update(&client, json!({"email": "new@example.com"}))
        .await
        .unwrap();

    assert_eq!(customer.email(), Some("new@example.com"));
    assert!(!customer.attributes().contains("metadata"));
    assert!(!customer.attributes().contains("description"));
}

#[tokio::test]
async fn test_failed_update_leaves_attributes_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/customers/cust_test_1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "object": "error",
            "code": "bad_request",
            "message": "email is invalid"
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let original = customer_json("cust_test_1", "old@example.com");
    let mut customer = Customer::from_value(original.clone(), None).unwrap();

    let error = customer
        .update(&client, json!({"email": "not-an-email"}))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert_eq!(customer.attributes().to_value(), original);
}

#[tokio::test]
async fn test_reload_fetches_current_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/cust_test_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(customer_json("cust_test_1", "reloaded@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let mut customer =
        Customer::from_value(customer_json("cust_test_1", "stale@example.com"), None).unwrap();

    customer.reload(&client).await.unwrap();

    assert_eq!(customer.email(), Some("reloaded@example.com"));
}

#[tokio::test]
async fn test_destroy_marks_entity_deleted() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/customers/cust_test_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "customer",
            "id": "cust_test_1",
            "livemode": false,
            "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let mut customer =
        Customer::from_value(customer_json("cust_test_1", "john@example.com"), None).unwrap();
    assert!(!customer.deleted());

    customer.destroy(&client).await.unwrap();

    assert!(customer.deleted());
    assert_eq!(customer.email(), None);
}

#[tokio::test]
async fn test_ids_are_percent_encoded_in_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/cust%20odd"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(customer_json("cust odd", "odd@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let customer = Customer::retrieve(&client, Some("cust odd"), None)
        .await
        .unwrap();

    assert_eq!(customer.id(), Some("cust odd"));
}

// ============================================================================
// Collection Tests
// ============================================================================

#[tokio::test]
async fn test_list_page_iterates_without_refetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "from": "1970-01-01T00:00:00Z",
            "to": "2015-01-15T04:03:49Z",
            "offset": 0,
            "limit": 2,
            "total": 3,
            "order": "chronological",
            "location": "/customers",
            "data": [
                customer_json("cust_a", "a@example.com"),
                customer_json("cust_b", "b@example.com")
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let params = ListParams {
        limit: Some(2),
        ..Default::default()
    };
    let customers = Customer::list(&client, Some(params)).await.unwrap();

    let first: Vec<_> = customers.iter().filter_map(|c| c.id()).collect();
    let second: Vec<_> = (&customers).into_iter().filter_map(|c| c.id()).collect();
    assert_eq!(first, ["cust_a", "cust_b"]);
    assert_eq!(first, second);

    assert_eq!(customers.total(), Some(3));
    assert_eq!(customers.limit(), Some(2));
    assert_eq!(customers.offset(), Some(0));
    assert_eq!(customers.order(), Some("chronological"));
    assert!(customers.has_more());

    let next = customers.next_page_params().unwrap();
    assert_eq!(next.offset, Some(2));
    assert_eq!(next.limit, Some(2));
}

#[tokio::test]
async fn test_collection_retrieve_makes_exactly_one_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/cust_z"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(customer_json("cust_z", "z@example.com")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let customers: omise_api::Collection<Customer> = omise_api::Collection::from_value(
        json!({"object": "list", "total": 0, "data": []}),
        None,
    )
    .unwrap();

    let customer = customers.retrieve(&client, "cust_z").await.unwrap();

    assert_eq!(customer.email(), Some("z@example.com"));
    assert!(customers.is_empty());
}

#[tokio::test]
async fn test_last_page_has_no_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "skey_test_1");
    let customers: omise_api::Collection<Customer> = omise_api::Collection::from_value(
        json!({
            "object": "list",
            "offset": 2,
            "limit": 2,
            "total": 3,
            "data": [customer_json("cust_c", "c@example.com")]
        }),
        None,
    )
    .unwrap();

    assert!(!customers.has_more());
    assert!(customers.next_page(&client).await.unwrap().is_none());
}
