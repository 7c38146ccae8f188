pub mod catalog;
pub mod seed;

pub use crate::domain::model::{Document, Property};
pub use crate::domain::ports::{DocumentStore, Filter, PropertyCatalog};
pub use crate::utils::error::Result;
