//! Domain models for ReptileCare.

pub mod booking;
pub mod booking_form;
pub mod daily_report;
pub mod dashboard;
pub mod export;
pub mod pet;
pub mod service_package;
pub mod settings;

pub use booking::{Booking, BookingStatus, StatusTransitionError};
pub use booking_form::{BookingForm, BookingSubmission, FormRejected, PetDetails};
pub use daily_report::{
    Activity, Appetite, CleaningRecord, CreateDailyReportRequest, DailyReport, FeedingRecord,
    HealthRecord,
};
pub use dashboard::{DashboardStatistics, PetInCare, StatusShare};
pub use export::{
    ColumnSelection, ExportColumn, ExportDataType, ExportError, ExportFormat, ExportPreview,
    ExportRequest,
};
pub use pet::{Gender, Pet};
pub use service_package::{AddOnService, ServicePackage};
pub use settings::{AdminSettings, CustomerProfile, SettingsSection};
