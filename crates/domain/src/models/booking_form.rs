//! Booking request form.
//!
//! Holds what a customer typed on the booking page. Submitting produces a
//! Pending booking; nothing is stored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use super::booking::{Booking, BookingStatus};
use super::pet::Gender;
use super::service_package::{find_add_on, find_package, AddOnService, ServicePackage};
use crate::services::pricing::{self, PriceBreakdown};

/// Required fields in the order the form shows them.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "petName",
    "ownerName",
    "ownerPhone",
    "checkInDate",
    "checkOutDate",
    "selectedPackage",
];

/// Why a submission was turned down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormRejected {
    #[error("Please fill in all required fields: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("Check-out date {check_out} is before check-in date {check_in}")]
    DatesReversed {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Unknown care package: {0}")]
    UnknownPackage(String),
}

impl FormRejected {
    /// Form fields the rejection points at.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            FormRejected::Incomplete { missing } => missing.clone(),
            FormRejected::DatesReversed { .. } => vec!["checkOutDate"],
            FormRejected::UnknownPackage(_) => vec!["selectedPackage"],
        }
    }
}

/// Current state of the booking form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub pet_name: String,
    pub pet_species: String,
    pub pet_breed: String,
    pub pet_age: String,
    pub pet_weight: String,
    pub pet_gender: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub owner_name: String,
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub owner_phone: String,
    pub owner_email: String,

    #[validate(required(message = "Check-in date is required"))]
    pub check_in_date: Option<NaiveDate>,
    #[validate(required(message = "Check-out date is required"))]
    pub check_out_date: Option<NaiveDate>,

    #[validate(
        required(message = "A care package must be selected"),
        custom(function = "shared::validation::validate_not_blank")
    )]
    pub selected_package: Option<String>,
    /// Selected add-on ids in the order they were ticked.
    pub additional_services: Vec<String>,

    pub special_instructions: String,
    pub emergency_contact: String,
}

/// Pet details as entered on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDetails {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: Option<u32>,
    pub weight: Option<u32>,
    pub gender: Option<Gender>,
}

/// Result of a successful form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub booking: Booking,
    pub pet: PetDetails,
    pub owner_email: String,
    pub emergency_contact: String,
}

impl BookingForm {
    /// Ticks the add-on if it is not selected, unticks it otherwise.
    pub fn toggle_service(&mut self, service_id: &str) {
        if let Some(pos) = self
            .additional_services
            .iter()
            .position(|id| id == service_id)
        {
            self.additional_services.remove(pos);
        } else {
            self.additional_services.push(service_id.to_string());
        }
    }

    /// Stay length shown next to the date pickers.
    pub fn days_count(&self) -> i64 {
        pricing::duration_days(self.check_in_date, self.check_out_date)
    }

    /// Running total for the summary card.
    pub fn total(&self, packages: &[ServicePackage], add_ons: &[AddOnService]) -> i64 {
        pricing::calculate_total(
            self.check_in_date,
            self.check_out_date,
            self.selected_package.as_deref(),
            &self.additional_services,
            packages,
            add_ons,
        )
    }

    /// Itemized summary card.
    pub fn breakdown(&self, packages: &[ServicePackage], add_ons: &[AddOnService]) -> PriceBreakdown {
        pricing::breakdown(
            self.check_in_date,
            self.check_out_date,
            self.selected_package.as_deref(),
            &self.additional_services,
            packages,
            add_ons,
        )
    }

    /// Names of required fields that are still empty, in form order.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let blank = |value: &str| value.trim().is_empty();
        let present = [
            !blank(&self.pet_name),
            !blank(&self.owner_name),
            !blank(&self.owner_phone),
            self.check_in_date.is_some(),
            self.check_out_date.is_some(),
            self.selected_package.as_deref().is_some_and(|id| !blank(id)),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(field, _)| *field)
            .collect()
    }

    /// Turns the form into a Pending booking.
    ///
    /// The pet has no record yet, so the booking gets a provisional pet id.
    /// Required fields are checked first, then the date order, then the
    /// package id against `packages`.
    pub fn submit(
        &self,
        packages: &[ServicePackage],
        add_ons: &[AddOnService],
        now: DateTime<Utc>,
    ) -> Result<BookingSubmission, FormRejected> {
        let (check_in_date, check_out_date, package_id) = match (
            self.validate(),
            self.check_in_date,
            self.check_out_date,
            self.selected_package.as_deref(),
        ) {
            (Ok(()), Some(check_in), Some(check_out), Some(package_id)) => {
                (check_in, check_out, package_id)
            }
            _ => {
                return Err(FormRejected::Incomplete {
                    missing: self.missing_required_fields(),
                })
            }
        };

        if check_out_date < check_in_date {
            return Err(FormRejected::DatesReversed {
                check_in: check_in_date,
                check_out: check_out_date,
            });
        }

        let package = find_package(packages, package_id)
            .ok_or_else(|| FormRejected::UnknownPackage(package_id.to_string()))?;

        let mut services = Vec::with_capacity(self.additional_services.len() + 1);
        services.push(package.name.clone());
        services.extend(
            self.additional_services
                .iter()
                .filter_map(|id| find_add_on(add_ons, id))
                .map(|add_on| add_on.name.clone()),
        );

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            pet_id: Uuid::new_v4().to_string(),
            pet_name: self.pet_name.trim().to_string(),
            owner_name: self.owner_name.trim().to_string(),
            owner_phone: self.owner_phone.trim().to_string(),
            check_in_date,
            check_out_date,
            status: BookingStatus::Pending,
            services,
            total_cost: self.total(packages, add_ons),
            notes: self.special_instructions.trim().to_string(),
            created_at: now,
        };

        Ok(BookingSubmission {
            booking,
            pet: PetDetails {
                name: self.pet_name.trim().to_string(),
                species: self.pet_species.clone(),
                breed: self.pet_breed.trim().to_string(),
                age: self.pet_age.trim().parse().ok(),
                weight: self.pet_weight.trim().parse().ok(),
                gender: self.pet_gender.parse().ok(),
            },
            owner_email: self.owner_email.trim().to_string(),
            emergency_contact: self.emergency_contact.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn packages() -> Vec<ServicePackage> {
        vec![ServicePackage {
            id: "premium".to_string(),
            name: "Premium Care".to_string(),
            price: 175000,
            duration: "per day".to_string(),
            features: vec![],
        }]
    }

    fn add_ons() -> Vec<AddOnService> {
        vec![
            AddOnService {
                id: "photo-updates".to_string(),
                name: "Daily Photo Updates".to_string(),
                price: 25000,
            },
            AddOnService {
                id: "grooming".to_string(),
                name: "Grooming Service".to_string(),
                price: 75000,
            },
        ]
    }

    fn complete_form() -> BookingForm {
        BookingForm {
            pet_name: "Cleo".to_string(),
            pet_species: "leopard-gecko".to_string(),
            pet_age: "1".to_string(),
            pet_weight: "sixty".to_string(),
            pet_gender: "Female".to_string(),
            owner_name: "Emma Watson".to_string(),
            owner_phone: "+62 812-5555-5555".to_string(),
            check_in_date: Some(date(2024, 2, 1)),
            check_out_date: Some(date(2024, 2, 5)),
            selected_package: Some("premium".to_string()),
            additional_services: vec!["photo-updates".to_string()],
            special_instructions: "Needs calcium".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_service() {
        let mut form = BookingForm::default();
        form.toggle_service("grooming");
        form.toggle_service("photo-updates");
        assert_eq!(form.additional_services, vec!["grooming", "photo-updates"]);

        form.toggle_service("grooming");
        assert_eq!(form.additional_services, vec!["photo-updates"]);
    }

    #[test]
    fn test_days_count_and_total() {
        let form = complete_form();
        assert_eq!(form.days_count(), 4);
        // (175000 + 25000) * 4
        assert_eq!(form.total(&packages(), &add_ons()), 800000);
    }

    #[test]
    fn test_missing_required_fields_in_form_order() {
        let form = BookingForm {
            owner_name: "Emma".to_string(),
            selected_package: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            form.missing_required_fields(),
            vec![
                "petName",
                "ownerPhone",
                "checkInDate",
                "checkOutDate",
                "selectedPackage"
            ]
        );
        assert!(complete_form().missing_required_fields().is_empty());
    }

    #[test]
    fn test_validate_matches_missing_fields() {
        assert!(complete_form().validate().is_ok());

        let mut form = complete_form();
        form.check_out_date = None;
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_submit_incomplete_form_is_rejected() {
        let mut form = complete_form();
        form.owner_phone = String::new();

        let err = form.submit(&packages(), &add_ons(), Utc::now()).unwrap_err();
        assert_eq!(
            err,
            FormRejected::Incomplete {
                missing: vec!["ownerPhone"]
            }
        );
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: ownerPhone"
        );
    }

    #[test]
    fn test_submit_reversed_dates_is_rejected() {
        let mut form = complete_form();
        form.check_in_date = Some(date(2024, 2, 5));
        form.check_out_date = Some(date(2024, 2, 1));

        let err = form.submit(&packages(), &add_ons(), Utc::now()).unwrap_err();
        assert_eq!(
            err,
            FormRejected::DatesReversed {
                check_in: date(2024, 2, 5),
                check_out: date(2024, 2, 1),
            }
        );
        assert_eq!(err.fields(), vec!["checkOutDate"]);
    }

    #[test]
    fn test_submit_same_day_stay_is_accepted() {
        let mut form = complete_form();
        form.check_out_date = form.check_in_date;

        let submission = form.submit(&packages(), &add_ons(), Utc::now()).unwrap();
        assert_eq!(submission.booking.check_in_date, submission.booking.check_out_date);
        assert_eq!(submission.booking.total_cost, 0);
    }

    #[test]
    fn test_submit_unknown_package_is_rejected() {
        let mut form = complete_form();
        form.selected_package = Some("platinum".to_string());

        let err = form.submit(&packages(), &add_ons(), Utc::now()).unwrap_err();
        assert_eq!(err, FormRejected::UnknownPackage("platinum".to_string()));
        assert_eq!(err.fields(), vec!["selectedPackage"]);
        assert_eq!(err.to_string(), "Unknown care package: platinum");

        // Missing fields are reported before the package lookup
        form.pet_name.clear();
        let err = form.submit(&packages(), &add_ons(), Utc::now()).unwrap_err();
        assert!(matches!(err, FormRejected::Incomplete { .. }));
    }

    #[test]
    fn test_submit_produces_pending_booking() {
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 11, 20, 0).unwrap();
        let submission = complete_form().submit(&packages(), &add_ons(), now).unwrap();
        let booking = &submission.booking;

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.pet_name, "Cleo");
        assert_eq!(booking.services, vec!["Premium Care", "Daily Photo Updates"]);
        assert_eq!(booking.total_cost, 800000);
        assert_eq!(booking.notes, "Needs calcium");
        assert_eq!(booking.created_at, now);
        assert!(Uuid::parse_str(&booking.id).is_ok());

        assert_eq!(submission.pet.age, Some(1));
        assert_eq!(submission.pet.weight, None);
        assert_eq!(submission.pet.gender, Some(Gender::Female));
    }

    #[test]
    fn test_submit_ignores_unknown_add_ons() {
        let mut form = complete_form();
        form.toggle_service("massage");
        let submission = form.submit(&packages(), &add_ons(), Utc::now()).unwrap();
        assert_eq!(submission.booking.services.len(), 2);
        assert_eq!(submission.booking.total_cost, 800000);
    }
}
