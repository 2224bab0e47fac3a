//! In-memory Document Store
//!
//! Process-local store for tests and `DOCUMENT_STORE=memory` runs. Cloning
//! the handle shares the underlying collections.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::RawDocument;
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;
use crate::repository::DocumentStore;

/// Collections kept in insertion order
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<RawDocument>>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl DocumentStore for InMemoryDocumentStore {
    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<RawDocument>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(&doc.body))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> StoreResult<Option<RawDocument>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(&doc.body)))
            .cloned())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<RawDocument>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn create(
        &self,
        collection: &str,
        body: Map<String, Value>,
    ) -> StoreResult<RawDocument> {
        let document = RawDocument::new(Uuid::new_v4(), body);

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        tracing::debug!(collection, document_id = %document.id, "Document created");

        Ok(document)
    }

    async fn save(&self, collection: &str, document: &RawDocument) -> StoreResult<RawDocument> {
        let mut collections = self.collections.write().await;

        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == document.id))
            .ok_or_else(|| StoreError::Missing {
                collection: collection.to_string(),
                id: document.id,
            })?;

        slot.body = document.body.clone();

        tracing::debug!(collection, document_id = %document.id, "Document saved");

        Ok(slot.clone())
    }

    async fn find_by_id_and_delete(
        &self,
        collection: &str,
        id: Uuid,
    ) -> StoreResult<Option<RawDocument>> {
        let mut collections = self.collections.write().await;

        let removed = collections.get_mut(collection).and_then(|docs| {
            docs.iter()
                .position(|doc| doc.id == id)
                .map(|index| docs.remove(index))
        });

        if removed.is_some() {
            tracing::debug!(collection, document_id = %id, "Document deleted");
        }

        Ok(removed)
    }
}
