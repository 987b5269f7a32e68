//! In-Memory Store
//!
//! A `RecipeStore` backed by an ordered map, used as the test double for
//! handler and router tests; the server binary always runs on `MongoStore`.
//! Each operation runs under one write or read lock, so single-document
//! writes are atomic to readers.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::RecipeUpdate;
use crate::store::{RecipeDocument, RecipeStore};

// == Memory Store ==
/// Document storage kept in process memory.
///
/// `ObjectId`s sort by creation time, so iteration order follows insertion
/// order much like MongoDB's natural order on a fresh collection.
#[derive(Debug)]
pub struct MemoryStore {
    /// Documents keyed by id
    documents: RwLock<BTreeMap<ObjectId, RecipeDocument>>,
    /// When false every call fails as if the engine were unreachable
    available: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(BTreeMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Simulates the engine going down or coming back.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ApiError::Storage("memory store unavailable".to_string()))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn insert_one(&self, mut recipe: RecipeDocument) -> Result<ObjectId> {
        self.check_available()?;

        let id = ObjectId::new();
        recipe.id = Some(id);
        self.documents.write().await.insert(id, recipe);

        debug!("Inserted document {}", id);
        Ok(id)
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<RecipeDocument>> {
        self.check_available()?;
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn find_many(&self, limit: usize) -> Result<Vec<RecipeDocument>> {
        self.check_available()?;
        Ok(self
            .documents
            .read()
            .await
            .values()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_one_and_update(
        &self,
        id: ObjectId,
        changes: &RecipeUpdate,
    ) -> Result<Option<RecipeDocument>> {
        self.check_available()?;

        let mut documents = self.documents.write().await;
        Ok(documents.get_mut(&id).map(|doc| {
            doc.apply(changes);
            doc.clone()
        }))
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64> {
        self.check_available()?;

        let removed = self.documents.write().await.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> Result<()> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;

    fn soup() -> RecipeDocument {
        RecipeDocument::from(Recipe::new("Soup", "a@b.com", "http://x/y.jpg"))
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = MemoryStore::new();
        let id = store.insert_one(soup()).await.unwrap();

        let found = store.find_one(id).await.unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert_eq!(found.name, "Soup");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_ignores_preset_id() {
        let store = MemoryStore::new();
        let preset = ObjectId::new();
        let id = store
            .insert_one(RecipeDocument {
                id: Some(preset),
                ..soup()
            })
            .await
            .unwrap();
        assert_ne!(id, preset);
    }

    #[tokio::test]
    async fn test_find_many_respects_limit_and_order() {
        let store = MemoryStore::new();
        let mut ids = Vec::new();
        for _ in 0..5 {
            ids.push(store.insert_one(soup()).await.unwrap());
        }

        let docs = store.find_many(3).await.unwrap();
        assert_eq!(docs.len(), 3);
        let found: Vec<_> = docs.into_iter().filter_map(|d| d.id).collect();
        assert_eq!(found, ids[..3]);
    }

    #[tokio::test]
    async fn test_find_one_and_update_missing() {
        let store = MemoryStore::new();
        let changes = RecipeUpdate {
            name: Some("Stew".to_string()),
            ..Default::default()
        };
        let result = store
            .find_one_and_update(ObjectId::new(), &changes)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_one_counts() {
        let store = MemoryStore::new();
        let id = store.insert_one(soup()).await.unwrap();

        assert_eq!(store.delete_one(id).await.unwrap(), 1);
        assert_eq!(store.delete_one(id).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let store = MemoryStore::new();
        store.set_available(false);

        assert!(store.ping().await.is_err());
        assert!(matches!(
            store.find_many(10).await,
            Err(ApiError::Storage(_))
        ));

        store.set_available(true);
        assert!(store.ping().await.is_ok());
    }
}
