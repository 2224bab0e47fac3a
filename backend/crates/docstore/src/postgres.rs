//! PostgreSQL Document Store
//!
//! All collections share the `documents` table; a document body is a JSONB
//! object and filters are evaluated with JSONB containment (`body @> $2`).

use serde_json::{Map, Value};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::document::RawDocument;
use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;
use crate::repository::DocumentStore;

/// PostgreSQL-backed document store
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DocumentStore for PgDocumentStore {
    async fn find(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<RawDocument>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT document_id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY created_at, document_id
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DocumentRow::into_document).collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> StoreResult<Option<RawDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT document_id, body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY created_at, document_id
            LIMIT 1
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_json()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DocumentRow::into_document))
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<RawDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT document_id, body
            FROM documents
            WHERE collection = $1 AND document_id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DocumentRow::into_document))
    }

    async fn create(
        &self,
        collection: &str,
        body: Map<String, Value>,
    ) -> StoreResult<RawDocument> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (collection, document_id, body)
            VALUES ($1, $2, $3)
            RETURNING document_id, body
            "#,
        )
        .bind(collection)
        .bind(Uuid::new_v4())
        .bind(Json(body))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(collection, document_id = %row.document_id, "Document created");

        Ok(row.into_document())
    }

    async fn save(&self, collection: &str, document: &RawDocument) -> StoreResult<RawDocument> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            UPDATE documents SET
                body = $3,
                updated_at = clock_timestamp()
            WHERE collection = $1 AND document_id = $2
            RETURNING document_id, body
            "#,
        )
        .bind(collection)
        .bind(document.id)
        .bind(Json(&document.body))
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                tracing::debug!(collection, document_id = %r.document_id, "Document saved");
                Ok(r.into_document())
            }
            None => Err(StoreError::Missing {
                collection: collection.to_string(),
                id: document.id,
            }),
        }
    }

    async fn find_by_id_and_delete(
        &self,
        collection: &str,
        id: Uuid,
    ) -> StoreResult<Option<RawDocument>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND document_id = $2
            RETURNING document_id, body
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            tracing::debug!(collection, document_id = %id, "Document deleted");
        }

        Ok(row.map(DocumentRow::into_document))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct DocumentRow {
    document_id: Uuid,
    body: Json<Map<String, Value>>,
}

impl DocumentRow {
    fn into_document(self) -> RawDocument {
        RawDocument::new(self.document_id, self.body.0)
    }
}
