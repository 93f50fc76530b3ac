//! Storage Module
//!
//! Document persistence shared by every resource.
//!
//! # Module Structure
//!
//! ```text
//! storage/
//! ├── mod.rs         - Module exports
//! ├── document.rs    - DocumentStore trait and StoreError
//! ├── collection.rs  - Typed Collection<T> wrapper and Document trait
//! ├── memory.rs      - In-memory store
//! └── postgres.rs    - PostgreSQL JSONB store
//! ```
//!
//! Which store backs the server is decided once at startup
//! (`server::config::load_store`).

pub mod collection;
pub mod document;
pub mod memory;
pub mod postgres;

pub use collection::{Collection, Document};
pub use document::{DocumentStore, StoreError};
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
