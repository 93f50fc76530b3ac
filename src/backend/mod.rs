//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a document store.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Router assembly and per-route role gates
//! - **`auth`** - Accounts, bearer tokens, Google sign-in, sessions
//! - **`middleware`** - Token verification and role checks
//! - **`storage`** - `DocumentStore` trait, PostgreSQL and in-memory stores
//! - **`error`** - `ApiError` and its JSON response
//! - **`movies`**, **`media_types`**, **`wishlists`**, **`contacts`** - resource handlers
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state, init
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── storage/        - Document persistence
//! ├── error/          - Error types
//! ├── extract.rs      - JSON and path ID extraction
//! ├── movies/
//! ├── media_types/
//! ├── wishlists/
//! └── contacts/
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Document persistence
pub mod storage;

/// Request extractors
pub mod extract;

pub mod movies;
pub mod media_types;
pub mod wishlists;
pub mod contacts;

pub use error::ApiError;
pub use server::{create_app, create_app_with, AppState};
