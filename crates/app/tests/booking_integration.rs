//! Integration tests for the booking page.
//!
//! Covers the live price summary and form submission.

mod common;

use common::{create_test_app, date, fill_booking_form, now, TestOwner};
use domain::models::{BookingStatus, Gender};
use domain::services::Severity;
use reptile_care_app::screens::booking::{
    INCOMPLETE_TITLE, INVALID_TITLE, SUBMITTED_MESSAGE, SUBMITTED_TITLE,
};
use reptile_care_app::AppError;

// ============================================================================
// Price Summary Tests
// ============================================================================

#[test]
fn test_booking_page_lists_catalog_services() {
    let (app, _) = create_test_app();
    let page = app.booking_page();

    assert_eq!(page.packages().len(), 3);
    assert_eq!(page.add_ons().len(), 5);
    assert_eq!(page.packages()[0].id, "basic");
}

#[test]
fn test_total_is_zero_until_dates_and_package_set() {
    let (app, _) = create_test_app();
    let mut page = app.booking_page();

    page.select_package("basic");
    assert_eq!(page.total(), 0);

    page.form_mut().check_in_date = Some(date(2024, 2, 1));
    assert_eq!(page.total(), 0);

    page.form_mut().check_out_date = Some(date(2024, 2, 6));
    assert_eq!(page.days_count(), 5);
    assert_eq!(page.total(), 625_000);
}

#[test]
fn test_total_with_add_ons() {
    let (app, _) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());

    page.toggle_service("video-calls");
    page.toggle_service("medical");
    // (125000 + 50000 + 100000) x 5 days
    assert_eq!(page.total(), 1_375_000);

    let breakdown = page.breakdown();
    assert_eq!(breakdown.days, 5);
    assert_eq!(breakdown.package.as_ref().map(|line| line.subtotal), Some(625_000));
    assert_eq!(breakdown.add_ons.len(), 2);
    assert_eq!(breakdown.total, page.total());
}

#[test]
fn test_unknown_add_on_ignored() {
    let (app, _) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());

    page.toggle_service("massage");
    assert_eq!(page.total(), 625_000);
}

#[test]
fn test_check_out_before_check_in_is_free() {
    let (app, _) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());
    page.form_mut().check_out_date = Some(date(2024, 1, 30));

    assert_eq!(page.days_count(), 0);
    assert_eq!(page.total(), 0);
}

// ============================================================================
// Submission Tests
// ============================================================================

#[test]
fn test_submit_produces_pending_booking() {
    let (app, sink) = create_test_app();
    let mut page = app.booking_page();
    let owner = TestOwner::new();
    fill_booking_form(page.form_mut(), &owner);
    page.toggle_service("photo-updates");

    let submission = page.submit(now()).expect("Submission should succeed");
    let booking = &submission.booking;

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.owner_name, owner.name.trim());
    assert_eq!(booking.owner_phone, owner.phone);
    assert_eq!(booking.total_cost, page.total());
    assert_eq!(booking.services, vec!["Basic Care", "Daily Photo Updates"]);
    assert_eq!(booking.created_at, now());
    assert_eq!(submission.pet.gender, Some(Gender::Male));
    assert_eq!(submission.pet.weight, Some(60));

    assert_eq!(sink.len(), 1);
    let notification = sink.last().unwrap();
    assert_eq!(notification.severity, Severity::Success);
    assert_eq!(notification.title, SUBMITTED_TITLE);
    assert_eq!(notification.message.as_deref(), Some(SUBMITTED_MESSAGE));
}

#[test]
fn test_submissions_get_distinct_ids() {
    let (app, _) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());

    let first = page.submit(now()).unwrap();
    let second = page.submit(now()).unwrap();
    assert_ne!(first.booking.id, second.booking.id);
}

#[test]
fn test_submit_does_not_change_catalog() {
    let (app, _) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());

    page.submit(now()).unwrap();
    assert_eq!(app.catalog().bookings.count(), 5);
}

#[test]
fn test_submit_each_missing_field_rejected() {
    let clears: [(&str, fn(&mut domain::models::BookingForm)); 6] = [
        ("petName", |f| f.pet_name.clear()),
        ("ownerName", |f| f.owner_name = "   ".to_string()),
        ("ownerPhone", |f| f.owner_phone.clear()),
        ("checkInDate", |f| f.check_in_date = None),
        ("checkOutDate", |f| f.check_out_date = None),
        ("selectedPackage", |f| f.selected_package = None),
    ];

    for (field, clear) in clears {
        let (app, sink) = create_test_app();
        let mut page = app.booking_page();
        fill_booking_form(page.form_mut(), &TestOwner::new());
        clear(page.form_mut());

        let result = page.submit(now());
        match result {
            Err(AppError::Validation(message)) => {
                assert!(message.contains(field), "{} missing from '{}'", field, message)
            }
            other => panic!("Expected validation error for {}, got {:?}", field, other.map(|s| s.booking.id)),
        }

        assert_eq!(sink.len(), 1);
        let notification = sink.last().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.title, INCOMPLETE_TITLE);
    }
}

#[test]
fn test_submit_check_out_before_check_in_rejected() {
    let (app, sink) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());
    page.form_mut().check_in_date = Some(date(2024, 2, 5));
    page.form_mut().check_out_date = Some(date(2024, 2, 1));

    let result = page.submit(now());
    assert!(
        matches!(result, Err(AppError::Validation(ref msg)) if msg.contains("before check-in")),
        "unexpected result: {:?}",
        result.map(|s| s.booking.id)
    );

    assert_eq!(sink.len(), 1);
    let notification = sink.last().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.title, INVALID_TITLE);
    // Form keeps the dates so the customer can correct them
    assert_eq!(page.form().check_in_date, Some(date(2024, 2, 5)));
}

#[test]
fn test_submit_unknown_package_rejected() {
    let (app, sink) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());
    page.select_package("platinum");
    assert_eq!(page.total(), 0);

    let result = page.submit(now());
    assert!(matches!(result, Err(AppError::Validation(ref msg)) if msg.contains("platinum")));

    assert_eq!(sink.len(), 1);
    let notification = sink.last().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.title, INVALID_TITLE);
}

#[test]
fn test_optional_fields_not_required() {
    let (app, _) = create_test_app();
    let mut page = app.booking_page();
    fill_booking_form(page.form_mut(), &TestOwner::new());
    page.form_mut().pet_species.clear();
    page.form_mut().pet_age.clear();
    page.form_mut().owner_email.clear();

    assert!(page.submit(now()).is_ok());
}
