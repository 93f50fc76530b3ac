//! Route Configuration Module
//!
//! Routes are organized by functionality into focused submodules.
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers, fallback
//! ├── api_routes.rs   - Movies, media types, wishlists, contacts
//! └── auth_routes.rs  - /api/users/* and /auth/*
//! ```
//!
//! # Role Gates
//!
//! Protected methods are wrapped with `middleware::gated` and merged with the
//! open methods of the same path, e.g. `get(list).merge(gated(post(create), ..))`.
//! The gate applies per method; a method a path does not define answers 405.

/// Main router creation
pub mod router;

/// Resource endpoints
pub mod api_routes;

/// Account and sign-in endpoints
pub mod auth_routes;

pub use router::create_router;
