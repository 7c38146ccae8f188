use crate::domain::model::{Document, Property};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Equality filter on a single top-level field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field) == Some(&self.value)
    }
}

/// A single collection in a document database. Iteration order of
/// `find_all` is whatever the backend considers natural.
pub trait DocumentStore: Send + Sync {
    fn find_one(
        &self,
        filter: &Filter,
    ) -> impl std::future::Future<Output = Result<Option<Document>>> + Send;

    fn find_all(&self, limit: usize)
        -> impl std::future::Future<Output = Result<Vec<Document>>> + Send;

    fn delete_all(&self) -> impl std::future::Future<Output = Result<u64>> + Send;

    /// Fails with `DuplicateKey` if any `id` already exists or repeats in `docs`.
    fn insert_many(
        &self,
        docs: Vec<Document>,
    ) -> impl std::future::Future<Output = Result<usize>> + Send;

    fn count(&self) -> impl std::future::Future<Output = Result<u64>> + Send;

    /// Swap the whole collection for `docs`. The default is delete-then-insert,
    /// so readers may observe an empty or partial collection in between.
    /// Backends that can swap in one step override this.
    fn replace_all(
        &self,
        docs: Vec<Document>,
    ) -> impl std::future::Future<Output = Result<usize>> + Send {
        async move {
            self.delete_all().await?;
            self.insert_many(docs).await
        }
    }
}

/// Operations the HTTP layer needs from the catalog.
#[async_trait]
pub trait PropertyCatalog: Send + Sync {
    async fn list_properties(&self) -> Result<Vec<Property>>;
    async fn get_property(&self, id: &str) -> Result<Property>;
    async fn reseed(&self) -> Result<usize>;
}
