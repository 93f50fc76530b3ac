//! Router-level behavior: root, fallback and body rejections

#[macro_use]
mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::Value;

use common::{create_test_user, test_server};

#[tokio::test]
async fn test_root_welcome_message() {
    let server = test_server();

    let response = server.get("/").await;

    assert_message!(response, StatusCode::OK, "Welcome to My Movies API!");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = test_server();

    let response = server.get("/api/nothing-here").await;

    assert_message!(response, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = test_server();
    let editor = create_test_user(&server, "read-write").await;

    let response = server
        .post("/api/movies")
        .authorization_bearer(&editor.token)
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"title\": "))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_malformed_login_body_is_bad_request() {
    let server = test_server();

    let response = server
        .post("/api/users/login")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"not json"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
