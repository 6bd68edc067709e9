//! Customer booking page.

use std::sync::Arc;

use catalog::repositories::ServiceCatalogRepository;
use chrono::{DateTime, Utc};
use domain::models::{AddOnService, BookingForm, BookingSubmission, FormRejected, ServicePackage};
use domain::services::{Notification, NotificationSink, PriceBreakdown};
use shared::money::format_rupiah;
use tracing::{info, warn};

use crate::error::AppError;
use crate::metrics;

pub const SUBMITTED_TITLE: &str = "Booking Submitted Successfully!";
pub const SUBMITTED_MESSAGE: &str = "We'll contact you within 24 hours to confirm your booking.";
pub const INCOMPLETE_TITLE: &str = "Form Incomplete";
pub const INVALID_TITLE: &str = "Invalid Booking";

/// Booking page state: the form plus the live price summary.
pub struct BookingPage {
    form: BookingForm,
    services: ServiceCatalogRepository,
    sink: Arc<dyn NotificationSink>,
}

impl BookingPage {
    pub fn new(services: ServiceCatalogRepository, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            form: BookingForm::default(),
            services,
            sink,
        }
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    /// Care packages offered on the page.
    pub fn packages(&self) -> &[ServicePackage] {
        self.services.packages()
    }

    pub fn add_ons(&self) -> &[AddOnService] {
        self.services.add_ons()
    }

    pub fn select_package(&mut self, package_id: &str) {
        self.form.selected_package = Some(package_id.to_string());
    }

    /// The ticked package, if its id is in the catalog.
    pub fn selected_package(&self) -> Option<&ServicePackage> {
        self.form
            .selected_package
            .as_deref()
            .and_then(|id| self.services.find_package(id))
    }

    pub fn toggle_service(&mut self, service_id: &str) {
        self.form.toggle_service(service_id);
    }

    pub fn days_count(&self) -> i64 {
        self.form.days_count()
    }

    pub fn total(&self) -> i64 {
        self.form.total(self.packages(), self.add_ons())
    }

    /// Total as shown on the summary card, e.g. `Rp 525.000`.
    pub fn total_label(&self) -> String {
        format_rupiah(self.total())
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.form.breakdown(self.packages(), self.add_ons())
    }

    /// Submits the form. The form keeps its values either way.
    pub fn submit(&self, now: DateTime<Utc>) -> Result<BookingSubmission, AppError> {
        match self.form.submit(self.packages(), self.add_ons(), now) {
            Ok(submission) => {
                info!(
                    booking_id = %submission.booking.id,
                    pet_name = %submission.booking.pet_name,
                    package = self.selected_package().map(|p| p.name.as_str()),
                    total_cost = submission.booking.total_cost,
                    days = submission.booking.duration_days(),
                    "Booking submitted"
                );
                metrics::record_booking_submitted();
                self.sink.notify(
                    Notification::success(SUBMITTED_TITLE).with_message(SUBMITTED_MESSAGE),
                );
                Ok(submission)
            }
            Err(rejected) => {
                warn!(fields = ?rejected.fields(), reason = %rejected, "Booking form rejected");
                metrics::record_booking_rejected();
                let title = match rejected {
                    FormRejected::Incomplete { .. } => INCOMPLETE_TITLE,
                    FormRejected::DatesReversed { .. } | FormRejected::UnknownPackage(_) => {
                        INVALID_TITLE
                    }
                };
                self.sink
                    .notify(Notification::error(title).with_message(rejected.to_string()));
                Err(rejected.into())
            }
        }
    }
}
