//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for user and authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Request and response types
//! ├── register.rs     - POST /api/users/register
//! ├── login.rs        - POST /api/users/login, POST /api/users/logout
//! ├── users_admin.rs  - PUT/DELETE /api/users/:id (admin)
//! ├── oauth.rs        - Google sign-in and cookie logout
//! └── check.rs        - /auth/check-auth, /auth/dashboard
//! ```

/// Request and response types
pub mod types;

pub mod register;

pub mod login;

pub mod users_admin;

/// Google sign-in
pub mod oauth;

/// Authentication status
pub mod check;

pub use check::{check_auth, dashboard, CurrentUser};
pub use login::{login, logout};
pub use oauth::{google_callback, google_start};
pub use register::register;
pub use users_admin::{delete_user, update_user};
