//! Movieshelf - Main Library
//!
//! A JSON REST API for a personal movie catalog: movies, media types,
//! wishlists and contacts, with username/password accounts, bearer tokens,
//! role-gated writes and optional Google sign-in.
//!
//! # Module Structure
//!
//! - **`shared`** - Roles, resource documents, validation errors
//! - **`backend`** - Axum server, authentication, document store, handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use movieshelf::backend::server::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app().await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
