//! Domain services for ReptileCare.
//!
//! Services contain business logic that operates on domain models.

pub mod aggregation;
pub mod booking_filter;
pub mod export;
pub mod notification;
pub mod pricing;
pub mod settings_editor;

pub use aggregation::{
    active_bookings, completed_count, customer_bookings, customer_pets, dashboard_statistics,
    pets_in_care, priority_bookings, reports_for_pet, status_distribution, StatisticsContext,
    PRIORITY_LIMIT,
};

pub use booking_filter::{status_options, BookingFilter, FilterBadge, FilterForm, SERVICE_OPTIONS};

pub use export::ExportConfig;

pub use notification::{
    LogNotificationSink, Notification, NotificationSink, RecordingNotificationSink, Severity,
};

pub use pricing::{PriceBreakdown, PriceLine};

pub use settings_editor::{DraftEditor, SETTINGS_SAVED};
