//! Middleware Module
//!
//! Request processing middleware:
//!
//! - **`auth`** - bearer token verification, `AuthenticatedUser`
//! - **`roles`** - exact-membership role gate and the `gated` helper used by
//!   the route modules

/// Bearer token authentication
pub mod auth;

/// Role-based authorization
pub mod roles;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use roles::{gated, require_roles, AllowedRoles, ADMINS, EDITORS};
