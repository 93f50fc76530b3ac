//! Authentication test helpers
//!
//! Accounts are created through the public endpoints so every test runs
//! the same path a client would.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Register an account and return the response body
pub async fn register(server: &TestServer, username: &str, password: &str, role: &str) -> Value {
    let response = server
        .post("/api/users/register")
        .json(&json!({
            "username": username,
            "password": password,
            "accountType": role
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

/// Log in and return the bearer token
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/users/login")
        .json(&json!({ "username": username, "password": password }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("login response should carry a token")
        .to_string()
}

/// Register a uniquely named user with `role` and log in
pub async fn create_test_user(server: &TestServer, role: &str) -> TestUser {
    let username = format!("user_{}", Uuid::new_v4().simple());
    let password = "test_password_123".to_string();

    let registered = register(server, &username, &password, role).await;
    let token = login(server, &username, &password).await;

    TestUser {
        id: registered["_id"]
            .as_str()
            .expect("register response should carry an id")
            .to_string(),
        username,
        password,
        token,
    }
}
