//! Daily report repository.

use domain::models::DailyReport;
use domain::services::reports_for_pet;
use std::sync::Arc;

/// Repository for daily report records.
#[derive(Debug, Clone)]
pub struct DailyReportRepository {
    reports: Arc<[DailyReport]>,
}

impl DailyReportRepository {
    pub fn new(reports: impl Into<Arc<[DailyReport]>>) -> Self {
        Self {
            reports: reports.into(),
        }
    }

    pub fn all(&self) -> &[DailyReport] {
        &self.reports
    }

    pub fn count(&self) -> usize {
        self.reports.len()
    }

    /// Reports for one pet, newest first.
    pub fn find_by_pet(&self, pet_id: &str) -> Vec<DailyReport> {
        reports_for_pet(&self.reports, pet_id)
    }
}
