//! Integration tests for the HTTP API
//!
//! Requests are driven through the full router (middleware included) with
//! `tower::ServiceExt::oneshot`; no socket is bound.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use records::{NoopDiagnostics, UserRecord};
use serde_json::{json, Value};
use server::error::ErrorResponse;
use server::{build_router, ServerConfig, ServerState};
use store::RecordStore;
use tower::ServiceExt;

fn test_store() -> RecordStore {
    let records: HashMap<i32, UserRecord> = [
        UserRecord::new(1, "John", "NYC", 5551234567, 5.9, true),
        UserRecord::new(2, "Jane", "LA", 5559876543, 5.5, false),
        UserRecord::new(3, "Jim", "NYC", 5550000003, 6.1, true),
    ]
    .into_iter()
    .map(|user| (user.id(), user))
    .collect();
    RecordStore::new(records, Arc::new(NoopDiagnostics))
}

fn test_app() -> Router {
    let state = ServerState::with_store(ServerConfig::default(), test_store());
    build_router(Arc::new(state))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

async fn get(path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request");
    send(test_app(), request).await
}

async fn search(body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    send(test_app(), request).await
}

fn user_ids(body: &Value) -> Vec<i64> {
    body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .map(|user| user["id"].as_i64().expect("id"))
        .collect()
}

#[tokio::test]
async fn test_get_user() {
    let (status, body) = get("/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["fname"], "John");
    assert_eq!(body["city"], "NYC");
    assert_eq!(body["phone"], 5551234567_i64);
    assert_eq!(body["married"], true);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let (status, body) = get("/user/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_value(body).expect("error body");
    assert_eq!(error.error.code, "NOT_FOUND");
    assert_eq!(error.error.message, "User 42 not found");
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    for path in ["/user/abc", "/user/0", "/user/-3"] {
        let (status, body) = get(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_get_users_preserves_order_and_skips_missing() {
    let (status, body) = get("/users/3,1,99,3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user_ids(&body), vec![3, 1]);
}

#[tokio::test]
async fn test_get_users_all_missing_is_empty_list() {
    let (status, body) = get("/users/7,8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": [] }));
}

#[tokio::test]
async fn test_get_users_invalid_id() {
    let (status, body) = get("/users/1,two,3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"]["message"].as_str().expect("message");
    assert!(message.contains("two"), "{message}");
}

#[tokio::test]
async fn test_search_married() {
    let (status, body) = search(json!([
        { "field_name": "married", "field_value": "true" }
    ]))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user_ids(&body), vec![1, 3]);
}

#[tokio::test]
async fn test_search_wrapped_criteria() {
    let (status, body) = search(json!({
        "criterias": [
            { "fieldName": "city", "fieldValue": "NYC" },
            { "fieldName": "height", "fieldValue": "6.1" }
        ]
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user_ids(&body), vec![3]);
}

#[tokio::test]
async fn test_search_no_match() {
    let (status, body) = search(json!([
        { "field_name": "city", "field_value": "NYC" },
        { "field_name": "married", "field_value": "false" }
    ]))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NO_MATCH");
}

#[tokio::test]
async fn test_search_unknown_field() {
    let (status, body) = search(json!([
        { "field_name": "zipcode", "field_value": "10001" }
    ]))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_CRITERIA");
}

#[tokio::test]
async fn test_search_malformed_body() {
    let (status, body) = search(json!({ "city": "NYC" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users/search")
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["records"], 3);
    assert_eq!(body["components"]["store"], "ready");
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some(&b"req-123"[..])
    );

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");
    let response = test_app().oneshot(request).await.expect("response");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_state_loads_store_from_data_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("users.json");
    std::fs::write(
        &path,
        r#"[{"id":5,"fname":"Ann","city":"SF","phone":1,"height":5.0,"married":false}]"#,
    )
    .expect("write");

    let config = ServerConfig {
        data_path: path,
        ..ServerConfig::default()
    };
    let state = ServerState::new(config).expect("state");
    assert_eq!(state.store.ids(), vec![5]);

    let missing = ServerConfig {
        data_path: dir.path().join("absent.json"),
        ..ServerConfig::default()
    };
    assert!(ServerState::new(missing).is_err());
}
