/**
 * Document Store Abstraction
 *
 * Collections of JSON documents keyed by UUID. Every operation touches a
 * single document, so atomicity is per document only. There are no
 * multi-document transactions.
 *
 * # Implementations
 *
 * - `PgDocumentStore` - PostgreSQL `documents` table with a JSONB body
 * - `MemoryDocumentStore` - in-process map, used without `DATABASE_URL`
 *   and in tests
 */

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by a document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying database failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A document could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A document with this id already exists in the collection
    #[error("Document {id} already exists in {collection}")]
    DuplicateId {
        collection: String,
        id: Uuid,
    },
}

/// Persistence for JSON documents grouped into named collections
///
/// Documents are stored as given; the `_id` field inside the body is kept in
/// sync by the typed `Collection` wrapper, not by the store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a new document, failing if the id is taken
    async fn insert(&self, collection: &str, id: Uuid, body: Value) -> Result<(), StoreError>;

    /// All documents of a collection in insertion order
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError>;

    /// First document whose top-level `field` equals `value`
    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Value>, StoreError>;

    /// Replace a whole document. Returns `false` if it did not exist.
    async fn replace(&self, collection: &str, id: Uuid, body: Value) -> Result<bool, StoreError>;

    /// Remove a document. Returns `false` if it did not exist.
    async fn delete(&self, collection: &str, id: Uuid) -> Result<bool, StoreError>;
}
