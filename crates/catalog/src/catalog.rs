//! Catalog loading.
//!
//! Parses the seed collections, converts every record into its domain model
//! and rejects the whole catalog on the first malformed record.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use domain::models::{AddOnService, Booking, DailyReport, Pet, ServicePackage};

use crate::entities::{
    AddOnServiceEntity, BookingEntity, DailyReportEntity, PetEntity, SeedRecord,
    ServicePackageEntity,
};
use crate::error::CatalogError;
use crate::metrics::LoadTimer;
use crate::repositories::{
    BookingRepository, DailyReportRepository, PetRepository, ServiceCatalogRepository,
};

/// Raw JSON text for every seed collection.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSources<'a> {
    pub pets: &'a str,
    pub bookings: &'a str,
    pub daily_reports: &'a str,
    pub service_packages: &'a str,
    pub add_on_services: &'a str,
}

impl CatalogSources<'static> {
    /// Seed data compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            pets: include_str!("../data/pets.json"),
            bookings: include_str!("../data/bookings.json"),
            daily_reports: include_str!("../data/daily_reports.json"),
            service_packages: include_str!("../data/service_packages.json"),
            add_on_services: include_str!("../data/add_on_services.json"),
        }
    }
}

/// All fixture data, loaded and validated.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub pets: PetRepository,
    pub bookings: BookingRepository,
    pub daily_reports: DailyReportRepository,
    pub services: ServiceCatalogRepository,
}

impl Catalog {
    /// Loads the embedded seed data.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_sources(CatalogSources::embedded())
    }

    pub fn from_sources(sources: CatalogSources<'_>) -> Result<Self, CatalogError> {
        let pets: Arc<[Pet]> = load_collection::<PetEntity, Pet>(sources.pets)?;
        let bookings: Arc<[Booking]> = load_collection::<BookingEntity, Booking>(sources.bookings)?;
        let daily_reports: Arc<[DailyReport]> =
            load_collection::<DailyReportEntity, DailyReport>(sources.daily_reports)?;
        let packages: Arc<[ServicePackage]> =
            load_collection::<ServicePackageEntity, ServicePackage>(sources.service_packages)?;
        let add_ons: Arc<[AddOnService]> =
            load_collection::<AddOnServiceEntity, AddOnService>(sources.add_on_services)?;

        let catalog = Self {
            pets: PetRepository::new(pets),
            bookings: BookingRepository::new(bookings),
            daily_reports: DailyReportRepository::new(daily_reports),
            services: ServiceCatalogRepository::new(packages, add_ons),
        };

        info!(
            pets = catalog.pets.count(),
            bookings = catalog.bookings.count(),
            daily_reports = catalog.daily_reports.count(),
            packages = catalog.services.packages().len(),
            add_ons = catalog.services.add_ons().len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }
}

/// Parses one collection and converts each record, rejecting duplicate ids.
fn load_collection<E, T>(raw: &str) -> Result<Arc<[T]>, CatalogError>
where
    E: DeserializeOwned + SeedRecord,
    T: TryFrom<E, Error = CatalogError>,
{
    let timer = LoadTimer::start(E::COLLECTION);

    let entities: Vec<E> = serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
        collection: E::COLLECTION,
        source,
    })?;

    let mut seen = HashSet::with_capacity(entities.len());
    let mut records = Vec::with_capacity(entities.len());
    for entity in entities {
        if !seen.insert(entity.id().to_string()) {
            return Err(CatalogError::DuplicateId {
                collection: E::COLLECTION,
                id: entity.id().to_string(),
            });
        }
        records.push(T::try_from(entity)?);
    }

    timer.finish(records.len());
    debug!(collection = E::COLLECTION, records = records.len(), "Loaded seed collection");

    Ok(records.into())
}
