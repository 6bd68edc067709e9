//! Daily care report domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Observed activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Low,
    Normal,
    High,
}

impl FromStr for Activity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Activity::Low),
            "normal" => Ok(Activity::Normal),
            "high" => Ok(Activity::High),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Low => write!(f, "Low"),
            Activity::Normal => write!(f, "Normal"),
            Activity::High => write!(f, "High"),
        }
    }
}

/// Observed appetite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appetite {
    Poor,
    Normal,
    Good,
}

impl FromStr for Appetite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poor" => Ok(Appetite::Poor),
            "normal" => Ok(Appetite::Normal),
            "good" => Ok(Appetite::Good),
            _ => Err(format!("Unknown appetite: {}", s)),
        }
    }
}

impl fmt::Display for Appetite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appetite::Poor => write!(f, "Poor"),
            Appetite::Normal => write!(f, "Normal"),
            Appetite::Good => write!(f, "Good"),
        }
    }
}

/// Which feeding slots were served.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecord {
    pub morning: bool,
    pub afternoon: bool,
    pub evening: bool,
    pub notes: String,
}

impl FeedingRecord {
    /// Number of slots served, 0 to 3.
    pub fn meals_served(&self) -> usize {
        [self.morning, self.afternoon, self.evening]
            .iter()
            .filter(|served| **served)
            .count()
    }
}

/// Health check results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// Temperature in °C.
    #[validate(range(min = 20.0, max = 45.0, message = "Temperature must be between 20 and 45 °C"))]
    pub temperature: f64,
    pub activity: Activity,
    pub appetite: Appetite,
    pub notes: String,
}

/// Habitat cleaning done that day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningRecord {
    pub habitat: bool,
    pub water: bool,
    pub notes: String,
}

/// One day of care for one pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    pub id: String,
    pub pet_id: String,
    pub date: NaiveDate,
    pub feeding: FeedingRecord,
    pub health: HealthRecord,
    pub cleaning: CleaningRecord,
    pub photos: Vec<String>,
    pub reported_by: String,
    pub created_at: DateTime<Utc>,
}

/// Input captured by the admin daily report form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyReportRequest {
    #[validate(length(min = 1, message = "petId is required"))]
    pub pet_id: String,

    pub date: NaiveDate,

    pub feeding: FeedingRecord,

    #[validate(nested)]
    pub health: HealthRecord,

    pub cleaning: CleaningRecord,

    #[serde(default)]
    pub photos: Vec<String>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub reported_by: String,
}

impl DailyReport {
    /// Builds a report from a validated request.
    pub fn from_request(
        id: impl Into<String>,
        request: CreateDailyReportRequest,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            pet_id: request.pet_id,
            date: request.date,
            feeding: request.feeding,
            health: request.health,
            cleaning: request.cleaning,
            photos: request.photos,
            reported_by: request.reported_by.trim().to_string(),
            created_at,
        }
    }
}
