use crate::adapters::storage::StoreLocation;
use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_store_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    StoreLocation::parse(url_str)
        .map(|_| ())
        .map_err(|e| match e {
            CatalogError::InvalidConfigValueError { value, reason, .. } => {
                CatalogError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value,
                    reason,
                }
            }
            other => other,
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_store_url() {
        assert!(validate_store_url("store.url", "memory://").is_ok());
        assert!(validate_store_url("store.url", "file:///var/lib/kora").is_ok());
        assert!(validate_store_url("store.url", "").is_err());
        assert!(validate_store_url("store.url", "https://example.com").is_err());

        match validate_store_url("store_url", "ftp://example.com") {
            Err(CatalogError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "store_url")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.seed_fixture", "data/seed.json").is_ok());
        assert!(validate_path("catalog.seed_fixture", "").is_err());
        assert!(validate_path("catalog.seed_fixture", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 8001u16, 1, u16::MAX).is_ok());
        assert!(validate_range("server.port", 0u16, 1, u16::MAX).is_err());
    }
}
