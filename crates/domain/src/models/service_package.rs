//! Care packages and add-on services.

use serde::{Deserialize, Serialize};

/// A named tier of daily care billed per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    pub id: String,
    pub name: String,
    /// Price per day in rupiah.
    pub price: i64,
    /// Billing label shown next to the price, e.g. "per day".
    pub duration: String,
    pub features: Vec<String>,
}

/// An optional extra billed per day on top of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnService {
    pub id: String,
    pub name: String,
    /// Price per day in rupiah.
    pub price: i64,
}

/// Looks up a package by id.
pub fn find_package<'a>(packages: &'a [ServicePackage], id: &str) -> Option<&'a ServicePackage> {
    packages.iter().find(|package| package.id == id)
}

/// Looks up an add-on by id.
pub fn find_add_on<'a>(add_ons: &'a [AddOnService], id: &str) -> Option<&'a AddOnService> {
    add_ons.iter().find(|add_on| add_on.id == id)
}
