//! Care package and add-on catalog repository.

use domain::models::service_package::find_package;
use domain::models::{AddOnService, ServicePackage};
use std::sync::Arc;

/// Repository for the bookable packages and add-ons.
#[derive(Debug, Clone)]
pub struct ServiceCatalogRepository {
    packages: Arc<[ServicePackage]>,
    add_ons: Arc<[AddOnService]>,
}

impl ServiceCatalogRepository {
    pub fn new(
        packages: impl Into<Arc<[ServicePackage]>>,
        add_ons: impl Into<Arc<[AddOnService]>>,
    ) -> Self {
        Self {
            packages: packages.into(),
            add_ons: add_ons.into(),
        }
    }

    pub fn packages(&self) -> &[ServicePackage] {
        &self.packages
    }

    pub fn add_ons(&self) -> &[AddOnService] {
        &self.add_ons
    }

    pub fn find_package(&self, id: &str) -> Option<&ServicePackage> {
        find_package(&self.packages, id)
    }
}
