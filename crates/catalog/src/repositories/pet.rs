//! Pet repository.

use domain::models::Pet;
use domain::services::customer_pets;
use std::sync::Arc;

/// Repository for pet records.
#[derive(Debug, Clone)]
pub struct PetRepository {
    pets: Arc<[Pet]>,
}

impl PetRepository {
    pub fn new(pets: impl Into<Arc<[Pet]>>) -> Self {
        Self { pets: pets.into() }
    }

    pub fn all(&self) -> &[Pet] {
        &self.pets
    }

    pub fn count(&self) -> usize {
        self.pets.len()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == id)
    }

    /// Pets belonging to one owner, in seed order.
    pub fn find_by_owner(&self, owner_id: &str) -> Vec<Pet> {
        customer_pets(&self.pets, owner_id)
    }
}
