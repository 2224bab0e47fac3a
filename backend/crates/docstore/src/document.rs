//! Stored documents, untyped and typed.

use kernel::id::Id;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

/// A document as the store sees it: an identifier plus a JSON object.
///
/// The identifier is kept outside `body`; it is only merged in as `_id` when
/// a typed [`Document`] is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: Uuid,
    pub body: Map<String, Value>,
}

impl RawDocument {
    pub fn new(id: Uuid, body: Map<String, Value>) -> Self {
        Self { id, body }
    }
}

/// A typed document with its store-assigned identifier.
///
/// Serializes as the entity's own fields plus `_id`:
/// `{"_id": "…", "firstName": "Johann", "lastName": "Bach"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document<T> {
    #[serde(rename = "_id")]
    pub id: Id<T>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Document<T> {
    pub fn new(id: Id<T>, data: T) -> Self {
        Self { id, data }
    }
}
