use crate::domain::model::Person;
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Multi-value producer over persons. Each call to `find_all` yields a fresh one.
pub type PersonStream = BoxStream<'static, Person>;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// First person whose id equals `id`. A miss is `None`, not an error.
    async fn get_by_id(&self, id: i32) -> Option<Person>;

    fn find_all(&self) -> PersonStream;

    async fn require_by_id(&self, id: i32) -> Result<Person> {
        self.get_by_id(id)
            .await
            .ok_or(DirectoryError::PersonNotFound { id })
    }
}

pub trait ConfigProvider: Send + Sync {
    fn seed_file(&self) -> Option<&str>;
    fn exclude_last_name(&self) -> Option<&str>;
}
