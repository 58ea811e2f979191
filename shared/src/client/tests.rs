use super::*;
use crate::model::{NewStore, StoreSelection};
use crate::protocol::{ListStoresRequest, LoginRequest, StoreMetricsRequest};
use crate::session::MemoryTokenStore;
use crate::testing::MockTransport;
use futures::executor::block_on;
use serde_json::json;

// =========================================================
// Request building
// =========================================================

#[test]
fn test_no_authorization_without_token() {
    let transport = MockTransport::new();
    let client = transport.client(Session::in_memory());

    let request = client.build_request(HttpMethod::Get, "/stores", None);
    assert_eq!(request.url, "http://localhost:8000/stores");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("Authorization"), None);
}

#[test]
fn test_bearer_token_attached() {
    let transport = MockTransport::new();
    let client = transport.client(Session::new(MemoryTokenStore::with_token("T")));

    let request = client.build_request(HttpMethod::Delete, "/products/p1", None);
    assert_eq!(request.header("authorization"), Some("Bearer T"));
    assert_eq!(request.body, None);
}

#[test]
fn test_debug_redacts_authorization() {
    let transport = MockTransport::new();
    let client = transport.client(Session::new(MemoryTokenStore::with_token("s3cret")));

    let request = client.build_request(HttpMethod::Get, "/stores", None);
    let debug = format!("{request:?}");
    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("s3cret"));
}

// =========================================================
// Raw operations
// =========================================================

#[test]
fn test_post_serializes_body() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"id":"s1"}"#);
    let client = transport.client(Session::in_memory());

    let value = block_on(client.post("/stores", &json!({ "name": "My Store" }))).unwrap();
    assert_eq!(value, json!({ "id": "s1" }));

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.body.as_deref(), Some(r#"{"name":"My Store"}"#));
}

#[test]
fn test_patch_and_delete() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"ok":true}"#).reply(204, "");
    let client = transport.client(Session::in_memory());

    block_on(client.patch("/orders/o1/status", &json!({ "status": "paid" }))).unwrap();
    let deleted = block_on(client.delete("/products/p1")).unwrap();
    assert_eq!(deleted, Value::Null);

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Patch);
    assert_eq!(requests[0].url, "http://localhost:8000/orders/o1/status");
    assert_eq!(requests[1].method, HttpMethod::Delete);
    assert_eq!(requests[1].body, None);
}

#[test]
fn test_non_success_keeps_raw_body() {
    let transport = MockTransport::new();
    transport.reply(401, r#"{"detail":"Invalid credentials"}"#);
    let client = transport.client(Session::in_memory());

    let err = block_on(client.get("/stores")).unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 401,
            body: r#"{"detail":"Invalid credentials"}"#.to_string(),
        }
    );
    assert_eq!(err.display_message(), "Invalid credentials");
}

#[test]
fn test_network_failure_passes_through() {
    let transport = MockTransport::new();
    transport.fail(ApiError::Network("connection refused".into()));
    let client = transport.client(Session::in_memory());

    let err = block_on(client.get("/stores")).unwrap_err();
    assert_eq!(err, ApiError::Network("connection refused".into()));
}

#[test]
fn test_invalid_success_body_is_decode_error() {
    let transport = MockTransport::new();
    transport.reply(200, "<html>");
    let client = transport.client(Session::in_memory());

    assert!(matches!(
        block_on(client.get("/stores")),
        Err(ApiError::Decode(_))
    ));
}

// =========================================================
// Typed endpoints
// =========================================================

#[test]
fn test_login_token_used_by_later_requests() {
    let transport = MockTransport::new();
    transport
        .reply(200, r#"{"access_token":"T","token_type":"bearer"}"#)
        .reply(200, "[]");
    let session = Session::in_memory();
    let client = transport.client(session.clone());

    let token = block_on(client.send(&LoginRequest {
        email: "a@b.com".into(),
        password: "x".into(),
    }))
    .unwrap();
    session.login(&token.access_token).unwrap();

    let stores = block_on(client.send(&ListStoresRequest)).unwrap();
    assert!(stores.is_empty());

    let requests = transport.requests();
    assert_eq!(requests[0].header("Authorization"), None);
    assert_eq!(
        requests[0].body.as_deref(),
        Some(r#"{"email":"a@b.com","password":"x"}"#)
    );
    assert_eq!(requests[1].header("Authorization"), Some("Bearer T"));
}

#[test]
fn test_created_store_appears_in_selector() {
    let transport = MockTransport::new();
    transport
        .reply(201, r#"{"id":"s1"}"#)
        .reply(200, r#"[{"_id":"s1","name":"My Store","slug":"my-store","description":""}]"#);
    let client = transport.client(Session::new(MemoryTokenStore::with_token("T")));

    let created = block_on(client.send(&NewStore {
        name: "My Store".into(),
        slug: "my-store".into(),
        description: String::new(),
    }))
    .unwrap();
    assert_eq!(created.id, "s1");

    let stores = block_on(client.send(&ListStoresRequest)).unwrap();
    let selected = StoreSelection::default_for(None, &stores).unwrap().store;
    assert_eq!(selected.name, "My Store");
    assert_eq!(selected.slug, "my-store");
    assert_eq!(selected.storefront_path(), "/store/my-store");
}

#[test]
fn test_get_request_has_no_body() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"total_sales":19.98,"total_customers":1,"total_orders":1}"#);
    let client = transport.client(Session::in_memory());

    let metrics = block_on(client.send(&StoreMetricsRequest {
        store_id: "s1".into(),
    }))
    .unwrap();
    assert_eq!(metrics.total_orders, 1);

    let request = transport.last_request();
    assert_eq!(request.url, "http://localhost:8000/stores/s1/metrics");
    assert_eq!(request.body, None);
}

#[test]
fn test_typed_decode_mismatch() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"unexpected":true}"#);
    let client = transport.client(Session::in_memory());

    assert!(matches!(
        block_on(client.send(&ListStoresRequest)),
        Err(ApiError::Decode(_))
    ));
}
