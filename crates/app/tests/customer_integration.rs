//! Integration tests for the customer dashboard.

mod common;

use common::{create_test_app, create_test_app_with, now, sample_report_request};
use domain::models::BookingStatus;
use domain::services::{Severity, SETTINGS_SAVED};
use reptile_care_app::AppError;

#[test]
fn test_configured_customer_dashboard() {
    let (app, sink) = create_test_app();
    let dashboard = app.customer_dashboard(None).unwrap();

    assert_eq!(dashboard.owner_id(), "owner1");
    assert_eq!(dashboard.pets().len(), 1);
    assert_eq!(dashboard.pets()[0].name, "Draco");
    assert!(sink.is_empty());
}

#[test]
fn test_customer_from_config_override() {
    let (app, _) = create_test_app_with(&[("dashboard.customer_id", "owner3")]);
    let dashboard = app.customer_dashboard(None).unwrap();

    assert_eq!(dashboard.pets()[0].name, "Verde");
    assert_eq!(dashboard.completed_count(), 1);
    assert!(dashboard.active_bookings().is_empty());
}

#[test]
fn test_unknown_customer_not_found() {
    let (app, _) = create_test_app();
    let result = app.customer_dashboard(Some("nobody"));

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
fn test_customer_sees_only_own_bookings() {
    let (app, _) = create_test_app();

    for (owner_id, booking_id) in [("owner1", "book1"), ("owner2", "book2"), ("owner5", "book5")] {
        let dashboard = app.customer_dashboard(Some(owner_id)).unwrap();
        let bookings: Vec<&str> = dashboard.bookings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(bookings, vec![booking_id], "owner {}", owner_id);
    }
}

#[test]
fn test_active_bookings_include_in_care_and_confirmed() {
    let (app, _) = create_test_app();

    let owner1 = app.customer_dashboard(Some("owner1")).unwrap();
    assert_eq!(owner1.active_bookings()[0].status, BookingStatus::InCare);

    let owner2 = app.customer_dashboard(Some("owner2")).unwrap();
    assert_eq!(owner2.active_bookings()[0].status, BookingStatus::Confirmed);

    let owner4 = app.customer_dashboard(Some("owner4")).unwrap();
    assert!(owner4.active_bookings().is_empty());
}

#[test]
fn test_reports_newest_first() {
    let (app, _) = create_test_app();
    let dashboard = app.customer_dashboard(Some("owner1")).unwrap();

    let ids: Vec<&str> = dashboard.reports().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["report2", "report1"]);
    assert_eq!(dashboard.reports_for_pet("1").len(), 2);
    assert!(dashboard.reports_for_pet("2").is_empty());
}

#[test]
fn test_customer_reports_come_from_catalog() {
    let (app, _) = create_test_app();
    let mut admin = app.admin_dashboard();
    admin
        .record_daily_report(sample_report_request("1"), now())
        .unwrap();

    // Dashboards read the catalog, which admin actions never modify
    let dashboard = app.customer_dashboard(Some("owner1")).unwrap();
    assert_eq!(dashboard.reports().len(), 2);
}

#[test]
fn test_profile_edit_and_save() {
    let (app, sink) = create_test_app();
    let mut dashboard = app.customer_dashboard(Some("owner2")).unwrap();
    let original_phone = dashboard.profile().committed().phone.clone();

    dashboard.profile_mut().phone = "+62 811-2222-3333".to_string();
    assert!(dashboard.profile().is_dirty());
    assert_eq!(dashboard.profile().committed().phone, original_phone);

    dashboard.save_profile().expect("Valid profile should save");
    assert_eq!(dashboard.profile().committed().phone, "+62 811-2222-3333");
    assert_eq!(sink.len(), 1);
    let notification = sink.last().unwrap();
    assert_eq!(notification.severity, Severity::Success);
    assert_eq!(notification.title, SETTINGS_SAVED);
}

#[test]
fn test_profile_with_blank_name_not_saved() {
    let (app, sink) = create_test_app();
    let mut dashboard = app.customer_dashboard(Some("owner2")).unwrap();

    dashboard.profile_mut().name = String::new();
    let result = dashboard.save_profile();

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(dashboard.profile().committed().name, "Michael Chen");
    assert_eq!(sink.last().unwrap().severity, Severity::Error);
}

#[test]
fn test_profile_discard() {
    let (app, sink) = create_test_app();
    let mut dashboard = app.customer_dashboard(Some("owner2")).unwrap();

    dashboard.profile_mut().name = "Someone Else".to_string();
    dashboard.discard_profile();

    assert!(!dashboard.profile().is_dirty());
    assert_eq!(dashboard.profile().draft().name, "Michael Chen");
    assert!(sink.is_empty());
}

#[test]
fn test_snapshot_serializes() {
    let (app, _) = create_test_app();
    let dashboard = app.customer_dashboard(Some("owner1")).unwrap();
    let json = serde_json::to_value(dashboard.snapshot()).unwrap();

    assert_eq!(json["profile"]["ownerId"], "owner1");
    assert_eq!(json["pets"][0]["name"], "Draco");
    assert_eq!(json["activeBookings"][0]["status"], "In Care");
    assert_eq!(json["completedBookings"], 0);
    assert_eq!(json["recentReports"][0]["id"], "report2");
}
