//! Prometheus metrics for screen actions.

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

/// Installs the Prometheus recorder as the global metrics recorder.
///
/// Call once at startup, before anything is recorded. The returned handle
/// renders the text exposition format.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new()
        .set_buckets(&[0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0])?
        .install_recorder()
}

pub fn record_booking_submitted() {
    counter!("bookings_submitted_total").increment(1);
}

pub fn record_booking_rejected() {
    counter!("booking_submissions_rejected_total").increment(1);
}

pub fn record_filter_applied() {
    counter!("filters_applied_total").increment(1);
}

/// Record an export request by data type and file format.
pub fn record_export_requested(data_type: &str, format: &str) {
    counter!(
        "exports_requested_total",
        "data_type" => data_type.to_string(),
        "format" => format.to_string()
    )
    .increment(1);
}

pub fn record_settings_saved() {
    counter!("settings_saved_total").increment(1);
}

/// Record a booking moving into `status`.
pub fn record_status_change(status: &str) {
    counter!("status_changes_total", "status" => status.to_string()).increment(1);
}
