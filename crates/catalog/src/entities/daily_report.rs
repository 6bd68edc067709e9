//! Daily report entity (seed record mapping).

use domain::models::{
    Activity, Appetite, CleaningRecord, DailyReport, FeedingRecord, HealthRecord,
};
use serde::Deserialize;
use shared::date_range::parse_iso_date;
use shared::validation::validate_temperature;

use super::{parse_timestamp, SeedRecord};
use crate::error::CatalogError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntity {
    pub temperature: f64,
    pub activity: String,
    pub appetite: String,
    #[serde(default)]
    pub notes: String,
}

/// Seed record for the daily reports collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReportEntity {
    pub id: String,
    pub pet_id: String,
    pub date: String,
    pub feeding: FeedingRecord,
    pub health: HealthEntity,
    pub cleaning: CleaningRecord,
    #[serde(default)]
    pub photos: Vec<String>,
    pub reported_by: String,
    pub created_at: String,
}

impl SeedRecord for DailyReportEntity {
    const COLLECTION: &'static str = "daily_reports";

    fn id(&self) -> &str {
        &self.id
    }
}

impl DailyReportEntity {
    /// Convert to domain model.
    pub fn into_domain(self) -> Result<DailyReport, CatalogError> {
        let invalid = |reason: String| CatalogError::invalid(Self::COLLECTION, &self.id, reason);

        let date = parse_iso_date(&self.date).map_err(|e| invalid(e.to_string()))?;
        validate_temperature(self.health.temperature).map_err(|e| invalid(e.to_string()))?;
        let activity = self.health.activity.parse::<Activity>().map_err(invalid)?;
        let appetite = self.health.appetite.parse::<Appetite>().map_err(invalid)?;
        let created_at = parse_timestamp(Self::COLLECTION, &self.id, &self.created_at)?;

        Ok(DailyReport {
            id: self.id,
            pet_id: self.pet_id,
            date,
            feeding: self.feeding,
            health: HealthRecord {
                temperature: self.health.temperature,
                activity,
                appetite,
                notes: self.health.notes,
            },
            cleaning: self.cleaning,
            photos: self.photos,
            reported_by: self.reported_by,
            created_at,
        })
    }
}

impl TryFrom<DailyReportEntity> for DailyReport {
    type Error = CatalogError;

    fn try_from(entity: DailyReportEntity) -> Result<Self, Self::Error> {
        entity.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "id": "report1",
        "petId": "1",
        "date": "2024-01-15",
        "feeding": {"morning": true, "afternoon": false, "evening": true, "notes": "Crickets"},
        "health": {"temperature": 37.5, "activity": "normal", "appetite": "GOOD", "notes": ""},
        "cleaning": {"habitat": true, "water": true, "notes": ""},
        "photos": ["photo1.jpg"],
        "reportedBy": "Dr. Amanda",
        "createdAt": "2024-01-15T18:00:00Z"
    }"#;

    fn entity() -> DailyReportEntity {
        serde_json::from_str(RAW).unwrap()
    }

    #[test]
    fn test_into_domain() {
        let report = entity().into_domain().unwrap();
        assert_eq!(report.health.activity, Activity::Normal);
        assert_eq!(report.health.appetite, Appetite::Good);
        assert_eq!(report.feeding.meals_served(), 2);
    }

    #[test]
    fn test_temperature_out_of_range_rejected() {
        let mut e = entity();
        e.health.temperature = 12.0;
        assert!(e.into_domain().is_err());
    }

    #[test]
    fn test_unknown_activity_rejected() {
        let mut e = entity();
        e.health.activity = "sleepy".to_string();
        assert!(DailyReport::try_from(e).is_err());
    }
}
