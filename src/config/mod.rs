#[cfg(feature = "cli")]
pub mod cli;

use crate::adapters::storage::StoreLocation;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_store_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "memory://".to_string(),
            database: "kora_db".to_string(),
            collection: "properties".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Overrides the fixture compiled into the binary.
    pub seed_fixture: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Load the optional file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Replace `${VAR}` with the value of the environment variable.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// `lookup` is `std::env::var` in production and a map in tests.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STORE_URL") {
            self.store.url = url;
        }
        if let Some(database) = lookup("DB_NAME") {
            self.store.database = database;
        }
        if let Some(collection) = lookup("COLLECTION_NAME") {
            self.store.collection = collection;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| CatalogError::InvalidConfigValueError {
                    field: "server.port".to_string(),
                    value: port.clone(),
                    reason: "Port must be an integer between 1 and 65535".to_string(),
                })?;
        }
        if let Some(fixture) = lookup("SEED_FIXTURE") {
            self.catalog.seed_fixture = Some(fixture);
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn store_location(&self) -> Result<StoreLocation> {
        StoreLocation::parse(&self.store.url)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validate_store_url("store.url", &self.store.url)?;
        validate_non_empty_string("store.database", &self.store.database)?;
        validate_non_empty_string("store.collection", &self.store.collection)?;
        if let Some(fixture) = &self.catalog.seed_fixture {
            validate_path("catalog.seed_fixture", fixture)?;
        }

        tracing::debug!("configuration validation passed");
        Ok(())
    }
}
