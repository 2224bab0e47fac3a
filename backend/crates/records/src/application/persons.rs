//! Person Service

use docstore::{Collection, Document, DocumentStore, Filter};

use crate::domain::person::Person;
use crate::error::RecordsResult;

pub struct PersonService<'a, S> {
    store: &'a S,
}

impl<'a, S> PersonService<'a, S>
where
    S: DocumentStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn persons(&self) -> Collection<'a, S, Person> {
        Collection::new(self.store)
    }

    pub async fn list(&self) -> RecordsResult<Vec<Document<Person>>> {
        Ok(self.persons().find(&Filter::all()).await?)
    }

    pub async fn create(&self, person: Person) -> RecordsResult<Document<Person>> {
        let created = self.persons().create(&person).await?;

        tracing::info!(
            person_id = %created.id,
            roles = created.data.roles.len(),
            dependents = created.data.dependents.len(),
            "Person created"
        );

        Ok(created)
    }
}
