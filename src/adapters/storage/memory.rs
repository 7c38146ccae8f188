use crate::core::{Document, DocumentStore, Filter};
use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local collection. Natural order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: Arc<RwLock<Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(docs: Vec<Document>) -> Self {
        Self {
            docs: Arc::new(RwLock::new(docs)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Document>>> {
        self.docs
            .read()
            .map_err(|_| CatalogError::store("memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Document>>> {
        self.docs
            .write()
            .map_err(|_| CatalogError::store("memory store lock poisoned"))
    }
}

fn document_id(doc: &Document) -> Option<&str> {
    doc.get("id").and_then(|v| v.as_str())
}

/// Rejects `incoming` if any id collides with `existing` or repeats within itself.
pub(crate) fn check_unique_ids(existing: &[Document], incoming: &[Document]) -> Result<()> {
    let mut seen: HashSet<&str> = existing.iter().filter_map(document_id).collect();
    for doc in incoming {
        if let Some(id) = document_id(doc) {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateKey { id: id.to_string() });
            }
        }
    }
    Ok(())
}

impl DocumentStore for MemoryStore {
    async fn find_one(&self, filter: &Filter) -> Result<Option<Document>> {
        let docs = self.read()?;
        Ok(docs.iter().find(|doc| filter.matches(doc)).cloned())
    }

    async fn find_all(&self, limit: usize) -> Result<Vec<Document>> {
        let docs = self.read()?;
        Ok(docs.iter().take(limit).cloned().collect())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut docs = self.write()?;
        let removed = docs.len() as u64;
        docs.clear();
        Ok(removed)
    }

    async fn insert_many(&self, new_docs: Vec<Document>) -> Result<usize> {
        let mut docs = self.write()?;
        check_unique_ids(&docs, &new_docs)?;
        let inserted = new_docs.len();
        docs.extend(new_docs);
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.read()?.len() as u64)
    }

    async fn replace_all(&self, new_docs: Vec<Document>) -> Result<usize> {
        check_unique_ids(&[], &new_docs)?;
        let inserted = new_docs.len();
        *self.write()? = new_docs;
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str) -> Document {
        json!({"id": id, "name": format!("Unit {}", id)})
            .as_object()
            .unwrap()
            .clone()
    }

    #[tokio::test]
    async fn test_find_one_by_id() {
        let store = MemoryStore::with_documents(vec![doc("a"), doc("b")]);
        let found = store.find_one(&Filter::eq("id", "b")).await.unwrap();
        assert_eq!(found.unwrap()["name"], "Unit b");
        assert!(store.find_one(&Filter::eq("id", "z")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_respects_limit_and_order() {
        let store = MemoryStore::with_documents((0..10).map(|i| doc(&i.to_string())).collect());
        let docs = store.find_all(3).await.unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_ids() {
        let store = MemoryStore::with_documents(vec![doc("a")]);
        let err = store.insert_many(vec![doc("b"), doc("a")]).await.unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey { id } if id == "a"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_replace() {
        let store = MemoryStore::with_documents(vec![doc("a"), doc("b")]);
        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 0);

        let inserted = store.replace_all(vec![doc("x"), doc("y"), doc("z")]).await.unwrap();
        assert_eq!(inserted, 3);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.insert_many(vec![doc("a")]).await.unwrap();
        assert_eq!(handle.count().await.unwrap(), 1);
    }
}
