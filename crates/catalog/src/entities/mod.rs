//! Raw seed record mappings.
//!
//! Entities mirror the JSON seed files field for field. Converting an entity
//! into its domain model is where records are normalized and validated.

pub mod booking;
pub mod daily_report;
pub mod pet;
pub mod service;

pub use booking::BookingEntity;
pub use daily_report::DailyReportEntity;
pub use pet::PetEntity;
pub use service::{AddOnServiceEntity, ServicePackageEntity};

use chrono::{DateTime, Utc};

use crate::error::CatalogError;

/// A seed record with a unique id.
pub trait SeedRecord {
    /// Collection name used in errors, logs and metrics.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

pub(crate) fn parse_timestamp(
    collection: &'static str,
    id: &str,
    value: &str,
) -> Result<DateTime<Utc>, CatalogError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| CatalogError::invalid(collection, id, format!("invalid timestamp {}: {}", value, e)))
}
