pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, Command};

pub use adapters::storage::{JsonFileStore, MemoryStore, StoreLocation};
pub use config::ServiceConfig;
pub use core::{catalog::CatalogService, seed::SeedFixture};
pub use domain::model::{Feature, Property, PropertyStatus, PropertyType, ProximityItem};
pub use domain::schema::{validate_property, validate_property_list, ValidationError};
pub use utils::error::{CatalogError, Result};
