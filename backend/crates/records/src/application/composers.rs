//! Composer Service

use docstore::{Collection, Document, DocumentStore, Filter};

use crate::application::parse_id;
use crate::domain::composer::{Composer, ComposerId};
use crate::error::{RecordsError, RecordsResult};

pub struct ComposerService<'a, S> {
    store: &'a S,
}

impl<'a, S> ComposerService<'a, S>
where
    S: DocumentStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn composers(&self) -> Collection<'a, S, Composer> {
        Collection::new(self.store)
    }

    pub async fn list(&self) -> RecordsResult<Vec<Document<Composer>>> {
        Ok(self.composers().find(&Filter::all()).await?)
    }

    /// Unknown or malformed ids yield `None`, never an error.
    pub async fn get(&self, id: &str) -> RecordsResult<Option<Document<Composer>>> {
        let Some(id) = parse_id::<Composer>(id) else {
            return Ok(None);
        };

        Ok(self.composers().find_by_id(&id).await?)
    }

    pub async fn create(&self, composer: Composer) -> RecordsResult<Document<Composer>> {
        let created = self.composers().create(&composer).await?;

        tracing::info!(composer_id = %created.id, "Composer created");

        Ok(created)
    }

    /// Replace both name fields of an existing composer.
    pub async fn update(&self, id: &str, changes: Composer) -> RecordsResult<Document<Composer>> {
        let mut composer = match parse_id::<Composer>(id) {
            Some(id) => self.composers().find_by_id(&id).await?,
            None => None,
        }
        .ok_or(RecordsError::ComposerNotFound)?;

        composer.data = changes;
        let saved = self.composers().save(&composer).await?;

        tracing::info!(composer_id = %saved.id, "Composer updated");

        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> RecordsResult<Document<Composer>> {
        let id: ComposerId = parse_id(id).ok_or(RecordsError::InvalidComposerId)?;

        let deleted = self
            .composers()
            .find_by_id_and_delete(&id)
            .await?
            .ok_or(RecordsError::InvalidComposerId)?;

        tracing::info!(composer_id = %deleted.id, "Composer deleted");

        Ok(deleted)
    }
}
