use crate::domain::schema::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Property not found: {id}")]
    NotFound { id: String },

    #[error("Document failed schema validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("Document store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Duplicate property id: {id}")]
    DuplicateKey { id: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Seed fixture error: {message}")]
    FixtureError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Validation,
    Store,
    Configuration,
}

impl CatalogError {
    pub fn store(message: impl Into<String>) -> Self {
        CatalogError::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::NotFound { .. } => ErrorCategory::NotFound,
            CatalogError::Validation(_) | CatalogError::FixtureError { .. } => {
                ErrorCategory::Validation
            }
            CatalogError::StoreUnavailable { .. }
            | CatalogError::DuplicateKey { .. }
            | CatalogError::SerializationError(_) => ErrorCategory::Store,
            CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Message safe to hand to an external caller. Field names and store
    /// internals stay in the logs.
    pub fn user_friendly_message(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Property not found",
            ErrorCategory::Validation => "Internal server error",
            ErrorCategory::Store => "Service unavailable",
            ErrorCategory::Configuration => "Service misconfigured",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::FieldIssue;

    #[test]
    fn test_category_mapping() {
        let not_found = CatalogError::NotFound {
            id: "PROP-999".to_string(),
        };
        assert_eq!(not_found.category(), ErrorCategory::NotFound);
        assert_eq!(not_found.user_friendly_message(), "Property not found");

        let store = CatalogError::store("connection refused");
        assert_eq!(store.category(), ErrorCategory::Store);

        let missing = CatalogError::ConfigError {
            message: "store.url is required".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_validation_message_is_sanitized() {
        let err = CatalogError::from(ValidationError::new(vec![FieldIssue::missing("price")]));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.user_friendly_message().contains("price"));
        assert!(err.to_string().contains("price"));
    }
}
