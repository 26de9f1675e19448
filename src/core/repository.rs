use crate::core::{Person, PersonRepository, PersonStream};
use crate::domain::model::seed_persons;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Read-only directory backed by a fixed slice of persons.
///
/// Cloning is cheap and every clone sees the same records. Nothing can mutate them
/// after construction, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct InMemoryPersonRepository {
    persons: Arc<[Person]>,
}

impl InMemoryPersonRepository {
    pub fn seeded() -> Self {
        Self::from_persons(seed_persons())
    }

    pub fn from_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: persons.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.persons
    }
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn get_by_id(&self, id: i32) -> Option<Person> {
        let found = self.persons.iter().find(|p| p.id == id).cloned();
        tracing::debug!(id, found = found.is_some(), "Looked up person by id");
        found
    }

    fn find_all(&self) -> PersonStream {
        tracing::debug!(count = self.persons.len(), "Streaming all persons");
        let persons = Arc::clone(&self.persons);
        stream::iter(0..persons.len())
            .map(move |index| persons[index].clone())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_ids_return_first_match() {
        let repo = InMemoryPersonRepository::from_persons(vec![
            Person::new(7, "Erste", "Eins"),
            Person::new(7, "Zweite", "Zwei"),
        ]);

        let person = repo.get_by_id(7).await.unwrap();
        assert_eq!(person.first_name, "Erste");
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryPersonRepository::from_persons(Vec::new());
        assert!(repo.is_empty());
        assert!(repo.get_by_id(1).await.is_none());
        assert_eq!(repo.find_all().count().await, 0);
    }

    #[test]
    fn test_clones_share_records() {
        let repo = InMemoryPersonRepository::seeded();
        let copy = repo.clone();
        assert_eq!(repo.len(), 3);
        assert!(std::ptr::eq(repo.as_slice(), copy.as_slice()));
    }
}
