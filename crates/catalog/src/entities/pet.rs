//! Pet entity (seed record mapping).

use domain::models::{Gender, Pet};
use serde::Deserialize;
use shared::validation::validate_weight_grams;

use super::SeedRecord;
use crate::error::CatalogError;

/// Seed record for the pets collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetEntity {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub weight: u32,
    pub gender: String,
    pub color: String,
    #[serde(default)]
    pub special_needs: Vec<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub photo: String,
}

impl SeedRecord for PetEntity {
    const COLLECTION: &'static str = "pets";

    fn id(&self) -> &str {
        &self.id
    }
}

impl PetEntity {
    /// Convert to domain model.
    pub fn into_domain(self) -> Result<Pet, CatalogError> {
        let invalid = |reason: String| CatalogError::invalid(Self::COLLECTION, &self.id, reason);

        validate_weight_grams(self.weight).map_err(|e| invalid(e.to_string()))?;
        let gender = self.gender.parse::<Gender>().map_err(invalid)?;

        Ok(Pet {
            id: self.id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            weight: self.weight,
            gender,
            color: self.color,
            special_needs: self.special_needs,
            medical_history: self.medical_history,
            owner_id: self.owner_id,
            owner_name: self.owner_name,
            owner_phone: self.owner_phone,
            photo: self.photo,
        })
    }
}

impl TryFrom<PetEntity> for Pet {
    type Error = CatalogError;

    fn try_from(entity: PetEntity) -> Result<Self, Self::Error> {
        entity.into_domain()
    }
}
