//! Fixture data provider for ReptileCare.
//!
//! This crate contains:
//! - Embedded seed records (JSON)
//! - Entity definitions (raw seed record mappings) and their conversion into domain models
//! - Read-only repositories over the loaded collections

pub mod catalog;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;

pub use catalog::{Catalog, CatalogSources};
pub use error::CatalogError;
