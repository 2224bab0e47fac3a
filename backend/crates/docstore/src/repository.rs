//! Document Store Trait
//!
//! Interface for document persistence. Implementations are in `postgres`
//! and `memory`.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::document::RawDocument;
use crate::error::StoreResult;
use crate::filter::Filter;

/// Document store over named collections
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    /// All documents matching `filter`, in insertion order
    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<RawDocument>>;

    /// First document matching `filter`, in insertion order
    async fn find_one(&self, collection: &str, filter: &Filter)
    -> StoreResult<Option<RawDocument>>;

    /// Document by identifier
    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<RawDocument>>;

    /// Insert a new document; the store assigns its identifier
    async fn create(&self, collection: &str, body: Map<String, Value>)
    -> StoreResult<RawDocument>;

    /// Replace an existing document wholesale
    async fn save(&self, collection: &str, document: &RawDocument) -> StoreResult<RawDocument>;

    /// Remove a document, returning it if it existed
    async fn find_by_id_and_delete(
        &self,
        collection: &str,
        id: Uuid,
    ) -> StoreResult<Option<RawDocument>>;
}
