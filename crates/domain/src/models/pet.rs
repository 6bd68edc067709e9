//! Pet domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Species choices offered on the booking form (slug, label).
pub const SPECIES_OPTIONS: &[(&str, &str)] = &[
    ("bearded-dragon", "Bearded Dragon"),
    ("ball-python", "Ball Python"),
    ("leopard-gecko", "Leopard Gecko"),
    ("iguana", "Iguana"),
    ("blue-tongue-skink", "Blue Tongue Skink"),
    ("other", "Other"),
];

/// Pet type choices offered by the admin booking filter (slug, label).
pub const PET_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("bearded-dragon", "Bearded Dragon"),
    ("ball-python", "Ball Python"),
    ("leopard-gecko", "Leopard Gecko"),
    ("corn-snake", "Corn Snake"),
    ("blue-tongue-skink", "Blue Tongue Skink"),
];

/// Converts a label such as `"Bearded Dragon"` into `"bearded-dragon"`.
///
/// Runs of whitespace, `_` and `-` collapse into a single dash.
pub fn to_slug(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Biological sex of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(format!(
                "Invalid gender: {}. Must be one of: Male, Female",
                s
            )),
        }
    }
}

/// A reptile known to the facility.
///
/// Owner fields are denormalized onto the pet; there is no separate owner entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Age in whole years.
    pub age: u32,
    /// Weight in grams.
    pub weight: u32,
    pub gender: Gender,
    pub color: String,
    pub special_needs: Vec<String>,
    pub medical_history: Vec<String>,
    pub owner_id: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub photo: String,
}

impl Pet {
    /// Species as a filter slug, e.g. `"ball-python"`.
    pub fn species_slug(&self) -> String {
        to_slug(&self.species)
    }
}
