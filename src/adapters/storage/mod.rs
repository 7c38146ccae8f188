pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::utils::error::{CatalogError, Result};
use std::path::PathBuf;
use url::Url;

/// Where the collection lives, parsed from the configured store URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// `memory://`
    Memory,
    /// `file:///var/lib/kora`
    File(PathBuf),
}

impl StoreLocation {
    pub fn parse(store_url: &str) -> Result<Self> {
        let url = Url::parse(store_url).map_err(|e| CatalogError::InvalidConfigValueError {
            field: "store.url".to_string(),
            value: store_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        match url.scheme() {
            "memory" => Ok(StoreLocation::Memory),
            "file" => url
                .to_file_path()
                .map(StoreLocation::File)
                .map_err(|_| CatalogError::InvalidConfigValueError {
                    field: "store.url".to_string(),
                    value: store_url.to_string(),
                    reason: "file URL must be an absolute path".to_string(),
                }),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: "store.url".to_string(),
                value: store_url.to_string(),
                reason: format!(
                    "Unsupported store scheme: {}. Supported schemes: memory, file",
                    scheme
                ),
            }),
        }
    }
}
