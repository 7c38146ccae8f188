use crate::domain::model::{Document, Property};
use crate::domain::schema::validate_property_list;
use crate::utils::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_FIXTURE: &str = include_str!("../../data/seed_properties.json");

#[derive(Debug, Deserialize)]
struct FixtureFile {
    version: String,
    properties: Vec<Document>,
}

/// The fixed dataset written by a reseed. Checked against the schema when it
/// is loaded, so a bad fixture stops the service at startup instead of
/// poisoning the store.
#[derive(Debug, Clone)]
pub struct SeedFixture {
    version: String,
    documents: Vec<Document>,
    properties: Vec<Property>,
}

impl SeedFixture {
    /// Fixture compiled into the binary from `data/seed_properties.json`.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_FIXTURE)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::FixtureError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: FixtureFile =
            serde_json::from_str(content).map_err(|e| CatalogError::FixtureError {
                message: format!("fixture is not valid JSON: {}", e),
            })?;

        let properties = validate_property_list(&file.properties)?;

        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(CatalogError::FixtureError {
                    message: format!("duplicate id '{}' in fixture", property.id),
                });
            }
        }

        Ok(Self {
            version: file.version,
            documents: file.properties,
            properties,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Raw documents in fixture order, as they are written to the store.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Ids whose `type` is outside the recommended vocabulary.
    pub fn unknown_types(&self) -> Vec<(&str, &str)> {
        self.properties
            .iter()
            .filter(|p| p.known_type().is_none())
            .map(|p| (p.id.as_str(), p.property_type.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PropertyStatus;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_fixture_is_valid() {
        let fixture = SeedFixture::embedded().unwrap();
        assert_eq!(fixture.len(), 5);
        assert!(!fixture.version().is_empty());

        let first = &fixture.properties()[0];
        assert_eq!(first.id, "PROP-001");
        assert_eq!(first.status, PropertyStatus::Available);
        assert!(fixture.unknown_types().is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let fixture = SeedFixture::embedded().unwrap();
        let doc = serde_json::Value::Object(fixture.documents()[0].clone());
        let content = serde_json::json!({
            "version": "dup",
            "properties": [doc.clone(), doc]
        })
        .to_string();

        let err = SeedFixture::from_json_str(&content).unwrap_err();
        assert!(matches!(err, CatalogError::FixtureError { .. }));
    }

    #[test]
    fn test_invalid_document_is_rejected() {
        let content = r#"{"version": "bad", "properties": [{"id": "PROP-X"}]}"#;
        let err = SeedFixture::from_json_str(content).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_fixture_from_file_reports_unknown_types() {
        let fixture = SeedFixture::embedded().unwrap();
        let mut doc = fixture.documents()[0].clone();
        doc.insert("type".to_string(), serde_json::json!("Residential"));
        let content = serde_json::json!({"version": "file-1", "properties": [doc]}).to_string();

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let loaded = SeedFixture::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.version(), "file-1");
        assert_eq!(loaded.unknown_types(), vec![("PROP-001", "Residential")]);
    }

    #[test]
    fn test_missing_file() {
        let err = SeedFixture::from_file("/nonexistent/seed.json").unwrap_err();
        assert!(matches!(err, CatalogError::FixtureError { .. }));
    }
}
