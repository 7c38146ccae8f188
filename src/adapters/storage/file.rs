use crate::adapters::storage::memory::check_unique_ids;
use crate::core::{Document, DocumentStore, Filter};
use crate::utils::error::{CatalogError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Collection persisted as a JSON array at
/// `<base_path>/<database>/<collection>.json`. A missing file is an empty
/// collection. Writes go to a sibling temp file and are renamed into place.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(base_path: impl AsRef<Path>, database: &str, collection: &str) -> Self {
        let path = base_path
            .as_ref()
            .join(database)
            .join(format!("{}.json", collection));
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Document>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(CatalogError::store(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&data).map_err(|e| {
            CatalogError::store(format!(
                "collection file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, docs: &[Document]) -> Result<()> {
        let io_err = |e: std::io::Error| {
            CatalogError::store(format!("cannot write {}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(docs)?;
        fs::write(&tmp_path, data).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }

    fn modify<T>(&self, f: impl FnOnce(&mut Vec<Document>) -> Result<T>) -> Result<T> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| CatalogError::store("file store lock poisoned"))?;
        let mut docs = self.load()?;
        let out = f(&mut docs)?;
        self.save(&docs)?;
        Ok(out)
    }
}

impl DocumentStore for JsonFileStore {
    async fn find_one(&self, filter: &Filter) -> Result<Option<Document>> {
        let docs = self.load()?;
        Ok(docs.into_iter().find(|doc| filter.matches(doc)))
    }

    async fn find_all(&self, limit: usize) -> Result<Vec<Document>> {
        let mut docs = self.load()?;
        docs.truncate(limit);
        Ok(docs)
    }

    async fn delete_all(&self) -> Result<u64> {
        self.modify(|docs| {
            let removed = docs.len() as u64;
            docs.clear();
            Ok(removed)
        })
    }

    async fn insert_many(&self, new_docs: Vec<Document>) -> Result<usize> {
        self.modify(|docs| {
            check_unique_ids(docs, &new_docs)?;
            let inserted = new_docs.len();
            docs.extend(new_docs);
            Ok(inserted)
        })
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.load()?.len() as u64)
    }

    async fn replace_all(&self, new_docs: Vec<Document>) -> Result<usize> {
        check_unique_ids(&[], &new_docs)?;
        self.modify(|docs| {
            *docs = new_docs;
            Ok(docs.len())
        })
    }
}
