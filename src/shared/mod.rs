//! Shared Module
//!
//! Types with no server dependencies: the role enum, the resource documents
//! and their input shapes, and field validation errors.

/// Shared error types
pub mod error;

/// Resource documents and input payloads
pub mod models;

/// Account roles
pub mod role;

pub use error::{require_text, SharedError};
pub use role::Role;
