//! In-memory document store
//!
//! Collections are kept in insertion order behind a `tokio::sync::RwLock`.
//! Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::storage::document::{DocumentStore, StoreError};

type CollectionRows = Vec<(Uuid, Value)>;

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, CollectionRows>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, id: Uuid, body: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let rows = collections.entry(collection.to_string()).or_default();

        if rows.iter().any(|(existing, _)| *existing == id) {
            return Err(StoreError::DuplicateId {
                collection: collection.to_string(),
                id,
            });
        }

        rows.push((id, body));
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|rows| rows.iter().map(|(_, body)| body.clone()).collect())
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|rows| {
            rows.iter()
                .find(|(existing, _)| *existing == id)
                .map(|(_, body)| body.clone())
        }))
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|rows| {
            rows.iter()
                .find(|(_, body)| body.get(field) == Some(value))
                .map(|(_, body)| body.clone())
        }))
    }

    async fn replace(&self, collection: &str, id: Uuid, body: Value) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(rows) = collections.get_mut(collection) else {
            return Ok(false);
        };

        match rows.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, stored)) => {
                *stored = body;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(rows) = collections.get_mut(collection) else {
            return Ok(false);
        };

        let before = rows.len();
        rows.retain(|(existing, _)| *existing != id);
        Ok(rows.len() != before)
    }
}
