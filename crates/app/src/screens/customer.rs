//! Customer dashboard.

use std::sync::Arc;

use catalog::Catalog;
use domain::models::{Booking, CustomerProfile, DailyReport, Pet};
use domain::services::{self, DraftEditor, NotificationSink};
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::error::AppError;
use crate::metrics;

/// Serializable view of the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSnapshot {
    pub profile: CustomerProfile,
    pub pets: Vec<Pet>,
    pub active_bookings: Vec<Booking>,
    pub completed_bookings: usize,
    pub bookings: Vec<Booking>,
    pub recent_reports: Vec<DailyReport>,
}

/// One owner's pets, stays and care reports.
pub struct CustomerDashboard {
    pets: Vec<Pet>,
    bookings: Vec<Booking>,
    reports: Vec<DailyReport>,
    profile: DraftEditor<CustomerProfile>,
    sink: Arc<dyn NotificationSink>,
}

impl CustomerDashboard {
    /// Fails with `NotFound` when the owner has no pets on record.
    pub fn new(
        catalog: &Catalog,
        owner_id: &str,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, AppError> {
        let pets = catalog.pets.find_by_owner(owner_id);
        let Some(first) = pets.first() else {
            return Err(AppError::NotFound(format!("Customer {}", owner_id)));
        };

        let profile = CustomerProfile {
            owner_id: owner_id.to_string(),
            name: first.owner_name.clone(),
            phone: first.owner_phone.clone(),
            email: String::new(),
        };

        let bookings =
            services::customer_bookings(catalog.bookings.all(), catalog.pets.all(), owner_id);

        let mut reports: Vec<DailyReport> = pets
            .iter()
            .flat_map(|pet| catalog.daily_reports.find_by_pet(&pet.id))
            .collect();
        reports.sort_by(|a, b| b.date.cmp(&a.date));

        info!(
            owner_id,
            pets = pets.len(),
            bookings = bookings.len(),
            reports = reports.len(),
            "Customer dashboard loaded"
        );

        Ok(Self {
            pets,
            bookings,
            reports,
            profile: DraftEditor::new(profile),
            sink,
        })
    }

    pub fn owner_id(&self) -> &str {
        &self.profile.committed().owner_id
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// In Care or Confirmed stays.
    pub fn active_bookings(&self) -> Vec<Booking> {
        services::active_bookings(&self.bookings)
    }

    pub fn completed_count(&self) -> usize {
        services::completed_count(&self.bookings)
    }

    /// Reports for all of the owner's pets, newest first.
    pub fn reports(&self) -> &[DailyReport] {
        &self.reports
    }

    pub fn reports_for_pet(&self, pet_id: &str) -> Vec<DailyReport> {
        services::reports_for_pet(&self.reports, pet_id)
    }

    pub fn profile(&self) -> &DraftEditor<CustomerProfile> {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut CustomerProfile {
        self.profile.draft_mut()
    }

    /// Commits the profile draft if its name and phone are valid.
    pub fn save_profile(&mut self) -> Result<(), AppError> {
        if let Err(errors) = self.profile.draft().validate() {
            let err = AppError::from(errors);
            warn!(owner_id = %self.owner_id(), error = %err, "Profile not saved");
            self.sink.notify(err.to_notification());
            return Err(err);
        }

        let notification = self.profile.save();
        metrics::record_settings_saved();
        self.sink.notify(notification);
        Ok(())
    }

    pub fn discard_profile(&mut self) {
        self.profile.discard();
    }

    pub fn snapshot(&self) -> CustomerSnapshot {
        CustomerSnapshot {
            profile: self.profile.committed().clone(),
            pets: self.pets.clone(),
            active_bookings: self.active_bookings(),
            completed_bookings: self.completed_count(),
            bookings: self.bookings.clone(),
            recent_reports: self.reports.clone(),
        }
    }
}
