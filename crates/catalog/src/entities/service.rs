//! Service package and add-on entities (seed record mapping).

use domain::models::{AddOnService, ServicePackage};
use serde::Deserialize;

use super::SeedRecord;
use crate::error::CatalogError;

/// Seed record for the service packages collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackageEntity {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub duration: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl SeedRecord for ServicePackageEntity {
    const COLLECTION: &'static str = "service_packages";

    fn id(&self) -> &str {
        &self.id
    }
}

impl TryFrom<ServicePackageEntity> for ServicePackage {
    type Error = CatalogError;

    fn try_from(entity: ServicePackageEntity) -> Result<Self, Self::Error> {
        if entity.price < 0 {
            return Err(CatalogError::invalid(
                ServicePackageEntity::COLLECTION,
                entity.id,
                "negative price",
            ));
        }
        Ok(ServicePackage {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            duration: entity.duration,
            features: entity.features,
        })
    }
}

/// Seed record for the add-on services collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnServiceEntity {
    pub id: String,
    pub name: String,
    pub price: i64,
}

impl SeedRecord for AddOnServiceEntity {
    const COLLECTION: &'static str = "add_on_services";

    fn id(&self) -> &str {
        &self.id
    }
}

impl TryFrom<AddOnServiceEntity> for AddOnService {
    type Error = CatalogError;

    fn try_from(entity: AddOnServiceEntity) -> Result<Self, Self::Error> {
        if entity.price < 0 {
            return Err(CatalogError::invalid(
                AddOnServiceEntity::COLLECTION,
                entity.id,
                "negative price",
            ));
        }
        Ok(AddOnService {
            id: entity.id,
            name: entity.name,
            price: entity.price,
        })
    }
}
