//! Authentication Module
//!
//! This module handles user accounts, bearer tokens, Google sign-in and
//! cookie sessions.
//!
//! # Architecture
//!
//! - **`users`** - User record and store operations
//! - **`credentials`** - Register/login/update/delete with bcrypt hashes
//! - **`tokens`** - HS256 bearer token issue and verification
//! - **`sessions`** - In-memory cookie sessions for Google sign-in
//! - **`google`** - OAuth 2.0 client (PKCE + CSRF) and userinfo fetch
//! - **`bridge`** - Maps a Google profile to a local user
//! - **`handlers`** - HTTP handlers for `/api/users/*` and `/auth/*`
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, password, account type → user stored with a bcrypt hash
//! 2. **Login**: username, password → credentials verified → bearer token (1 hour)
//! 3. **Protected route**: bearer token verified → role checked against the route
//! 4. **Google**: redirect → callback → user linked or created → session cookie
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless and cannot be revoked; the one-hour expiry bounds
//!   their lifetime
//! - Invalid credentials return 401 with one message for every cause

pub mod bridge;
pub mod credentials;
pub mod error;
pub mod google;
pub mod handlers;
pub mod sessions;
pub mod tokens;
pub mod users;

pub use credentials::Credentials;
pub use error::AuthError;
pub use sessions::SessionStore;
pub use tokens::TokenIssuer;
pub use users::User;
