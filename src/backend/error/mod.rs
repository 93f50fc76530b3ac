//! Backend Error Module
//!
//! Error types used by HTTP handlers and their conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse, From impls, panic handler
//! ```
//!
//! Domain errors (`AuthError`, `StoreError`, `SharedError`, `OAuthError`)
//! stay free of HTTP concerns and are mapped to `ApiError` here, so handlers
//! can propagate them with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::handle_panic;
pub use types::ApiError;
