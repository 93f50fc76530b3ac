/**
 * Typed Collections
 *
 * `Collection<T>` binds a `Document` type to its collection name and does the
 * serde conversion between `T` and the store's JSON bodies. Handlers extract
 * a collection straight from `AppState` via `FromRef`.
 */

use std::marker::PhantomData;
use std::sync::Arc;

use axum::extract::FromRef;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::backend::server::state::AppState;
use crate::backend::storage::document::{DocumentStore, StoreError};

/// A type stored in its own collection
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Name of the backing collection
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// Typed view over one collection of a `DocumentStore`
pub struct Collection<T> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Document> Collection<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub async fn insert(&self, document: &T) -> Result<(), StoreError> {
        let body = serde_json::to_value(document)?;
        self.store.insert(T::COLLECTION, document.id(), body).await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        self.store
            .find_all(T::COLLECTION)
            .await?
            .into_iter()
            .map(|body| serde_json::from_value(body).map_err(StoreError::from))
            .collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        match self.store.find_by_id(T::COLLECTION, id).await? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    /// First document whose serialized `field` equals `value`
    ///
    /// `field` is the JSON (camelCase) name, e.g. `"googleId"`.
    pub async fn find_one_by<V: Serialize>(
        &self,
        field: &str,
        value: V,
    ) -> Result<Option<T>, StoreError> {
        let value = serde_json::to_value(value)?;
        match self.store.find_one_by(T::COLLECTION, field, &value).await? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    /// Overwrite a stored document. Returns `false` if it no longer exists.
    pub async fn replace(&self, document: &T) -> Result<bool, StoreError> {
        let body = serde_json::to_value(document)?;
        self.store.replace(T::COLLECTION, document.id(), body).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.store.delete(T::COLLECTION, id).await
    }
}

impl<T: Document> FromRef<AppState> for Collection<T> {
    fn from_ref(app_state: &AppState) -> Self {
        Collection::new(app_state.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::MemoryDocumentStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Shelf {
        #[serde(rename = "_id")]
        id: Uuid,
        shelf_name: String,
    }

    impl Document for Shelf {
        const COLLECTION: &'static str = "shelves";

        fn id(&self) -> Uuid {
            self.id
        }
    }

    fn shelves() -> Collection<Shelf> {
        Collection::new(Arc::new(MemoryDocumentStore::new()))
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let shelves = shelves();
        let shelf = Shelf {
            id: Uuid::new_v4(),
            shelf_name: "Top".into(),
        };
        shelves.insert(&shelf).await.unwrap();

        assert_eq!(shelves.find_by_id(shelf.id).await.unwrap(), Some(shelf));
        assert_eq!(shelves.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_one_by_uses_serialized_field_name() {
        let shelves = shelves();
        let shelf = Shelf {
            id: Uuid::new_v4(),
            shelf_name: "Bottom".into(),
        };
        shelves.insert(&shelf).await.unwrap();

        let found = shelves.find_one_by("shelfName", "Bottom").await.unwrap();
        assert_eq!(found.map(|s| s.id), Some(shelf.id));
    }

    #[tokio::test]
    async fn test_replace_persists_changes() {
        let shelves = shelves();
        let mut shelf = Shelf {
            id: Uuid::new_v4(),
            shelf_name: "Top".into(),
        };
        shelves.insert(&shelf).await.unwrap();

        shelf.shelf_name = "Middle".into();
        assert!(shelves.replace(&shelf).await.unwrap());
        assert_eq!(shelves.find_all().await.unwrap(), vec![shelf]);
    }
}
