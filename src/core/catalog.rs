use crate::core::seed::SeedFixture;
use crate::domain::model::Property;
use crate::domain::ports::{DocumentStore, Filter, PropertyCatalog};
use crate::domain::schema::{validate_property, validate_property_list};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;

/// Hard cap on `list_properties`. Anything past it is not returned.
pub const MAX_LIST_LIMIT: usize = 1000;

pub struct CatalogService<S: DocumentStore> {
    store: S,
    fixture: SeedFixture,
}

impl<S: DocumentStore> CatalogService<S> {
    pub fn new(store: S, fixture: SeedFixture) -> Self {
        Self { store, fixture }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fixture(&self) -> &SeedFixture {
        &self.fixture
    }

    pub async fn list_properties(&self) -> Result<Vec<Property>> {
        let docs = self.store.find_all(MAX_LIST_LIMIT).await?;
        tracing::debug!("Fetched {} documents from store", docs.len());

        let properties = validate_property_list(&docs).inspect_err(|e| {
            tracing::error!("Stored document failed validation: {}", e);
        })?;
        Ok(properties)
    }

    pub async fn get_property(&self, id: &str) -> Result<Property> {
        let doc = self
            .store
            .find_one(&Filter::eq("id", id))
            .await?
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        let property = validate_property(&doc).inspect_err(|e| {
            tracing::error!("Stored document failed validation: {}", e);
        })?;
        Ok(property)
    }

    /// Replace the whole collection with the seed fixture. Destructive:
    /// anything written to the store by other means is gone afterwards.
    pub async fn reseed(&self) -> Result<usize> {
        tracing::info!(
            "Reseeding store with fixture version {} ({} records)",
            self.fixture.version(),
            self.fixture.len()
        );

        let inserted = self
            .store
            .replace_all(self.fixture.documents().to_vec())
            .await?;

        tracing::info!("Reseed complete, {} records inserted", inserted);
        Ok(inserted)
    }
}

#[async_trait]
impl<S: DocumentStore> PropertyCatalog for CatalogService<S> {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        CatalogService::list_properties(self).await
    }

    async fn get_property(&self, id: &str) -> Result<Property> {
        CatalogService::get_property(self, id).await
    }

    async fn reseed(&self) -> Result<usize> {
        CatalogService::reseed(self).await
    }
}
