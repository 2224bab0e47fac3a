//! Store Error Types

use thiserror::Error;
use uuid::Uuid;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the document store and its typed collections
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database driver error
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// `save` targeted a document that no longer exists
    #[error("No document found for query {{ _id: \"{id}\" }} in collection \"{collection}\"")]
    Missing { collection: String, id: Uuid },

    /// Typed value could not be turned into JSON
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    /// Stored JSON did not match the expected shape
    #[error("failed to decode document from \"{collection}\": {source}")]
    Decode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// Typed value did not serialize to a JSON object
    #[error("document body must be a JSON object")]
    NotAnObject,
}

impl StoreError {
    /// Whether the failure happened while converting between typed values
    /// and JSON rather than inside the store itself.
    pub fn is_codec(&self) -> bool {
        matches!(
            self,
            StoreError::Encode(_) | StoreError::Decode { .. } | StoreError::NotAnObject
        )
    }
}
