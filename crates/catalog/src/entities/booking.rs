//! Booking entity (seed record mapping).

use domain::models::{Booking, BookingStatus};
use serde::Deserialize;
use shared::date_range::parse_iso_date;

use super::{parse_timestamp, SeedRecord};
use crate::error::CatalogError;

/// Seed record for the bookings collection.
///
/// Dates and status stay as text until [`BookingEntity::into_domain`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntity {
    pub id: String,
    pub pet_id: String,
    pub pet_name: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub status: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub total_cost: i64,
    #[serde(default)]
    pub notes: String,
    pub created_at: String,
}

impl SeedRecord for BookingEntity {
    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> &str {
        &self.id
    }
}

impl BookingEntity {
    /// Convert to domain model.
    ///
    /// Rejects unknown statuses, malformed dates, a check-out before the
    /// check-in and negative totals.
    pub fn into_domain(self) -> Result<Booking, CatalogError> {
        let invalid = |reason: String| CatalogError::invalid(Self::COLLECTION, &self.id, reason);

        let status = self.status.parse::<BookingStatus>().map_err(invalid)?;
        let check_in_date = parse_iso_date(&self.check_in_date).map_err(|e| invalid(e.to_string()))?;
        let check_out_date =
            parse_iso_date(&self.check_out_date).map_err(|e| invalid(e.to_string()))?;
        if check_out_date < check_in_date {
            return Err(invalid(format!(
                "check-out {} is before check-in {}",
                check_out_date, check_in_date
            )));
        }
        if self.total_cost < 0 {
            return Err(invalid(format!("negative total cost {}", self.total_cost)));
        }
        let created_at = parse_timestamp(Self::COLLECTION, &self.id, &self.created_at)?;

        Ok(Booking {
            id: self.id,
            pet_id: self.pet_id,
            pet_name: self.pet_name,
            owner_name: self.owner_name,
            owner_phone: self.owner_phone,
            check_in_date,
            check_out_date,
            status,
            services: self.services,
            total_cost: self.total_cost,
            notes: self.notes,
            created_at,
        })
    }
}

impl TryFrom<BookingEntity> for Booking {
    type Error = CatalogError;

    fn try_from(entity: BookingEntity) -> Result<Self, Self::Error> {
        entity.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entity() -> BookingEntity {
        BookingEntity {
            id: "book1".to_string(),
            pet_id: "1".to_string(),
            pet_name: "Draco".to_string(),
            owner_name: "Sarah Johnson".to_string(),
            owner_phone: "+62 812-1111-1111".to_string(),
            check_in_date: "2024-01-15".to_string(),
            check_out_date: "2024-01-22".to_string(),
            status: "In Care".to_string(),
            services: vec!["Daily Care".to_string()],
            total_cost: 875000,
            notes: String::new(),
            created_at: "2024-01-10T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_into_domain() {
        let booking = entity().into_domain().unwrap();
        assert_eq!(booking.status, BookingStatus::InCare);
        assert_eq!(
            booking.check_in_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(booking.duration_days(), 7);
        assert_eq!(booking.created_at.to_rfc3339(), "2024-01-10T10:00:00+00:00");
    }

    #[test]
    fn test_status_variants_normalized() {
        for raw in ["in-care", "IN_CARE", "in care", "InCare"] {
            let mut e = entity();
            e.status = raw.to_string();
            assert_eq!(e.into_domain().unwrap().status, BookingStatus::InCare);
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut e = entity();
        e.status = "Archived".to_string();
        let err = e.into_domain().unwrap_err();
        assert!(err.to_string().starts_with("Invalid bookings record 'book1'"));
    }

    #[test]
    fn test_check_out_before_check_in_rejected() {
        let mut e = entity();
        e.check_out_date = "2024-01-14".to_string();
        assert!(e.into_domain().is_err());
    }

    #[test]
    fn test_malformed_dates_rejected() {
        let mut e = entity();
        e.check_in_date = "15/01/2024".to_string();
        assert!(e.into_domain().is_err());

        let mut e = entity();
        e.created_at = "yesterday".to_string();
        assert!(e.into_domain().is_err());
    }

    #[test]
    fn test_negative_total_rejected() {
        let mut e = entity();
        e.total_cost = -1;
        assert!(Booking::try_from(e).is_err());
    }
}
