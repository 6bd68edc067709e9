//! Admin dashboard.
//!
//! Works on its own copy of the bookings and daily reports, so status
//! changes and new reports never touch the loaded catalog. Every action
//! sends exactly one notification.

use std::sync::Arc;

use catalog::repositories::PetRepository;
use catalog::Catalog;
use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{
    AdminSettings, Booking, BookingStatus, CreateDailyReportRequest, DailyReport,
    DashboardStatistics, ExportPreview, ExportRequest, PetInCare, StatusShare,
};
use domain::services::{
    self, BookingFilter, DraftEditor, ExportConfig, FilterForm, Notification, NotificationSink,
    StatisticsContext,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::error::AppError;
use crate::metrics;

pub const FILTERS_APPLIED: &str = "Filters applied";
pub const FILTERS_CLEARED: &str = "Filters cleared";
pub const STATUS_UPDATED: &str = "Booking status updated";
pub const REPORT_RECORDED: &str = "Daily report recorded";

/// Serializable view of the whole admin screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub facility: String,
    pub reference_date: NaiveDate,
    pub statistics: DashboardStatistics,
    pub status_distribution: Vec<StatusShare>,
    pub priority_bookings: Vec<Booking>,
    pub pets_in_care: Vec<PetInCare>,
    pub bookings: Vec<Booking>,
    pub active_filter: BookingFilter,
    pub export: ExportPreview,
    pub settings: AdminSettings,
}

pub struct AdminDashboard {
    pets: PetRepository,
    bookings: Vec<Booking>,
    reports: Vec<DailyReport>,
    filter_form: FilterForm,
    active_filter: BookingFilter,
    export: ExportConfig,
    settings: DraftEditor<AdminSettings>,
    reference_date: NaiveDate,
    priority_limit: usize,
    customer_satisfaction: f64,
    sink: Arc<dyn NotificationSink>,
}

impl AdminDashboard {
    /// Builds the dashboard for `reference_date`, the day "today" means.
    pub fn new(
        catalog: &Catalog,
        config: &Config,
        reference_date: NaiveDate,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let mut settings = AdminSettings::default();
        settings.facility.name = config.facility.name.clone();
        settings.facility.capacity = config.facility.capacity;

        Self {
            pets: catalog.pets.clone(),
            bookings: catalog.bookings.all().to_vec(),
            reports: catalog.daily_reports.all().to_vec(),
            filter_form: FilterForm::default(),
            active_filter: BookingFilter::default(),
            export: ExportConfig::new(config.export_format()),
            settings: DraftEditor::new(settings),
            reference_date,
            priority_limit: config.dashboard.priority_limit,
            customer_satisfaction: config.facility.customer_satisfaction,
            sink,
        }
    }

    /// Every booking, ignoring the filter.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    // ========================================================================
    // Filter dialog
    // ========================================================================

    pub fn filter_form(&self) -> &FilterForm {
        &self.filter_form
    }

    pub fn filter_form_mut(&mut self) -> &mut FilterForm {
        &mut self.filter_form
    }

    pub fn active_filter(&self) -> &BookingFilter {
        &self.active_filter
    }

    /// Applies the dialog inputs and returns how many bookings are shown.
    pub fn apply_filter(&mut self) -> usize {
        self.active_filter = self.filter_form.to_filter();
        let visible = self.visible_bookings().len();

        info!(
            filter = ?self.active_filter,
            visible,
            total = self.bookings.len(),
            "Booking filter applied"
        );
        metrics::record_filter_applied();
        self.sink.notify(Notification::success(FILTERS_APPLIED));
        visible
    }

    /// Resets the dialog and shows every booking again.
    pub fn clear_filter(&mut self) {
        self.filter_form.clear();
        self.active_filter = BookingFilter::default();
        info!("Booking filter cleared");
        self.sink.notify(Notification::info(FILTERS_CLEARED));
    }

    /// Bookings matching the applied filter, in original order.
    pub fn visible_bookings(&self) -> Vec<Booking> {
        self.active_filter.apply(&self.bookings, self.pets.all())
    }

    // ========================================================================
    // Export dialog
    // ========================================================================

    pub fn export_config(&self) -> &ExportConfig {
        &self.export
    }

    pub fn export_config_mut(&mut self) -> &mut ExportConfig {
        &mut self.export
    }

    /// Builds the export request. No file is written.
    pub fn export(&self, today: NaiveDate) -> ExportRequest {
        let request = self.export.build(today);

        info!(
            data_type = %request.data_type,
            format = %request.format,
            file_name = %request.file_name,
            columns = request.columns.as_ref().map_or(0, Vec::len),
            "Export requested"
        );
        metrics::record_export_requested(request.data_type.as_str(), request.format.as_str());
        self.sink.notify(
            Notification::success("Export ready")
                .with_message(format!("Data exported to {}", request.file_name)),
        );
        request
    }

    // ========================================================================
    // Overview panels
    // ========================================================================

    /// Pending and Confirmed bookings, earliest check-in first.
    pub fn priority_bookings(&self) -> Vec<Booking> {
        services::priority_bookings(&self.bookings, self.priority_limit)
    }

    pub fn pets_in_care(&self) -> Vec<PetInCare> {
        services::pets_in_care(&self.bookings, self.pets.all())
    }

    pub fn status_distribution(&self) -> Vec<StatusShare> {
        services::status_distribution(&self.bookings)
    }

    /// Occupancy uses the saved facility capacity.
    pub fn statistics(&self) -> DashboardStatistics {
        services::dashboard_statistics(
            &self.bookings,
            self.pets.all(),
            StatisticsContext {
                reference_date: self.reference_date,
                capacity: self.settings.committed().facility.capacity,
                customer_satisfaction: self.customer_satisfaction,
            },
        )
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Moves a booking along its lifecycle.
    pub fn update_status(
        &mut self,
        booking_id: &str,
        target: BookingStatus,
    ) -> Result<Booking, AppError> {
        let result = match self.bookings.iter_mut().find(|b| b.id == booking_id) {
            None => Err(AppError::NotFound(format!("Booking {}", booking_id))),
            Some(booking) => {
                let from = booking.status;
                booking
                    .transition_to(target)
                    .map(|()| {
                        info!(booking_id, %from, to = %target, "Booking status changed");
                        booking.clone()
                    })
                    .map_err(AppError::from)
            }
        };

        match result {
            Ok(booking) => {
                metrics::record_status_change(target.slug());
                self.sink.notify(
                    Notification::success(STATUS_UPDATED)
                        .with_message(format!("{} is now {}", booking.pet_name, target)),
                );
                Ok(booking)
            }
            Err(err) => {
                warn!(booking_id, to = %target, error = %err, "Status change rejected");
                self.sink.notify(err.to_notification());
                Err(err)
            }
        }
    }

    /// Validates and stores a daily care report for a known pet.
    pub fn record_daily_report(
        &mut self,
        request: CreateDailyReportRequest,
        now: DateTime<Utc>,
    ) -> Result<DailyReport, AppError> {
        let result = request
            .validate()
            .map_err(AppError::from)
            .and_then(|()| {
                self.pets
                    .find_by_id(&request.pet_id)
                    .map(|_| ())
                    .ok_or_else(|| AppError::NotFound(format!("Pet {}", request.pet_id)))
            });

        if let Err(err) = result {
            warn!(pet_id = %request.pet_id, error = %err, "Daily report rejected");
            self.sink.notify(err.to_notification());
            return Err(err);
        }

        let report = DailyReport::from_request(Uuid::new_v4().to_string(), request, now);
        info!(
            report_id = %report.id,
            pet_id = %report.pet_id,
            date = %report.date,
            meals = report.feeding.meals_served(),
            "Daily report recorded"
        );
        self.reports.push(report.clone());
        self.sink.notify(
            Notification::success(REPORT_RECORDED)
                .with_message(format!("Report for {} saved", report.date.format("%d/%m/%Y"))),
        );
        Ok(report)
    }

    pub fn reports(&self) -> &[DailyReport] {
        &self.reports
    }

    /// Reports for one pet, newest first.
    pub fn reports_for_pet(&self, pet_id: &str) -> Vec<DailyReport> {
        services::reports_for_pet(&self.reports, pet_id)
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn settings(&self) -> &DraftEditor<AdminSettings> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut AdminSettings {
        self.settings.draft_mut()
    }

    pub fn save_settings(&mut self) {
        let changed = self.settings.changed_sections();
        info!(sections = ?changed, "Saving admin settings");
        let notification = self.settings.save();
        metrics::record_settings_saved();
        self.sink.notify(notification);
    }

    pub fn discard_settings(&mut self) {
        self.settings.discard();
    }

    pub fn overview(&self) -> AdminOverview {
        AdminOverview {
            facility: self.settings.committed().facility.name.clone(),
            reference_date: self.reference_date,
            statistics: self.statistics(),
            status_distribution: self.status_distribution(),
            priority_bookings: self.priority_bookings(),
            pets_in_care: self.pets_in_care(),
            bookings: self.visible_bookings(),
            active_filter: self.active_filter.clone(),
            export: self.export.preview(),
            settings: self.settings.committed().clone(),
        }
    }
}
