//! Common test utilities and helpers
//!
//! - Test server over an in-memory document store
//! - Account and token helpers
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;

use std::sync::Arc;

use axum_test::TestServer;
use movieshelf::backend::server::{create_app_with, AppConfig, AppState};
use movieshelf::backend::storage::MemoryDocumentStore;

pub use auth_helpers::*;

/// Secret shared by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration without a database or Google sign-in
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4) // bcrypt minimum cost (bcrypt::MIN_COST is private)
        .build()
        .expect("test configuration should build")
}

/// Fresh app over an empty in-memory store
pub fn test_server() -> TestServer {
    let app = create_app_with(&test_config(), Arc::new(MemoryDocumentStore::new()));
    TestServer::new(app).expect("test server should start")
}

/// Application state over an empty in-memory store, for tests that need to
/// reach the session store or credentials directly
pub fn test_state(config: &AppConfig) -> AppState {
    AppState::new(config, Arc::new(MemoryDocumentStore::new()))
}
