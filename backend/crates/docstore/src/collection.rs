//! Typed Collections
//!
//! [`Collection`] binds a [`DocumentStore`] to one entity type and converts
//! between [`RawDocument`] and [`Document<T>`] with serde_json.

use std::marker::PhantomData;

use kernel::id::Id;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::document::{Document, RawDocument};
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;
use crate::repository::DocumentStore;

/// An entity persisted as a document
pub trait Model: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the collection holding this entity
    const COLLECTION: &'static str;
}

/// Typed view over one collection of a store
pub struct Collection<'a, S, T> {
    store: &'a S,
    _model: PhantomData<fn() -> T>,
}

impl<'a, S, T> Collection<'a, S, T>
where
    S: DocumentStore,
    T: Model,
{
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _model: PhantomData,
        }
    }

    pub async fn find(&self, filter: &Filter) -> StoreResult<Vec<Document<T>>> {
        self.store
            .find(T::COLLECTION, filter)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn find_one(&self, filter: &Filter) -> StoreResult<Option<Document<T>>> {
        self.store
            .find_one(T::COLLECTION, filter)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn find_by_id(&self, id: &Id<T>) -> StoreResult<Option<Document<T>>> {
        self.store
            .find_by_id(T::COLLECTION, *id.as_uuid())
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn create(&self, data: &T) -> StoreResult<Document<T>> {
        let body = encode(data)?;
        let raw = self.store.create(T::COLLECTION, body).await?;
        decode(raw)
    }

    pub async fn save(&self, document: &Document<T>) -> StoreResult<Document<T>> {
        let raw = RawDocument::new(*document.id.as_uuid(), encode(&document.data)?);
        let saved = self.store.save(T::COLLECTION, &raw).await?;
        decode(saved)
    }

    pub async fn find_by_id_and_delete(&self, id: &Id<T>) -> StoreResult<Option<Document<T>>> {
        self.store
            .find_by_id_and_delete(T::COLLECTION, *id.as_uuid())
            .await?
            .map(decode)
            .transpose()
    }
}

fn encode<T: Model>(data: &T) -> StoreResult<Map<String, Value>> {
    match serde_json::to_value(data).map_err(StoreError::Encode)? {
        Value::Object(body) => Ok(body),
        _ => Err(StoreError::NotAnObject),
    }
}

fn decode<T: Model>(raw: RawDocument) -> StoreResult<Document<T>> {
    let data = serde_json::from_value(Value::Object(raw.body)).map_err(|source| {
        StoreError::Decode {
            collection: T::COLLECTION.to_string(),
            source,
        }
    })?;

    Ok(Document::new(Id::from_uuid(raw.id), data))
}
