//! Application wiring.

use std::sync::Arc;

use catalog::Catalog;
use chrono::{NaiveDate, Utc};
use domain::services::NotificationSink;

use crate::config::Config;
use crate::error::AppError;
use crate::screens::{AdminDashboard, BookingPage, CustomerDashboard};

/// Shared configuration, data and notification sink for all screens.
#[derive(Clone)]
pub struct App {
    config: Config,
    catalog: Catalog,
    sink: Arc<dyn NotificationSink>,
}

impl App {
    pub fn new(config: Config, catalog: Catalog, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            config,
            catalog,
            sink,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Configured reference date, or today.
    pub fn reference_date(&self) -> NaiveDate {
        self.config.reference_date(Utc::now().date_naive())
    }

    pub fn booking_page(&self) -> BookingPage {
        BookingPage::new(self.catalog.services.clone(), self.sink.clone())
    }

    /// Dashboard for `owner_id`, or the configured customer when `None`.
    pub fn customer_dashboard(&self, owner_id: Option<&str>) -> Result<CustomerDashboard, AppError> {
        let owner_id = owner_id.unwrap_or(&self.config.dashboard.customer_id);
        CustomerDashboard::new(&self.catalog, owner_id, self.sink.clone())
    }

    pub fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard::new(
            &self.catalog,
            &self.config,
            self.reference_date(),
            self.sink.clone(),
        )
    }
}
