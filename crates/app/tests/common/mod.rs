//! Common fixtures for integration tests.
//!
//! Everything runs against the embedded seed catalog with a recording
//! notification sink, so tests can assert on what the user would see.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use std::sync::Arc;

use catalog::Catalog;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use domain::models::{
    Activity, Appetite, BookingForm, CleaningRecord, CreateDailyReportRequest, FeedingRecord,
    HealthRecord,
};
use domain::services::RecordingNotificationSink;
use fake::faker::name::en::Name;
use fake::Fake;
use reptile_care_app::{App, Config};

/// Configuration from the embedded defaults only.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

pub fn test_catalog() -> Catalog {
    Catalog::seeded().expect("Failed to load seed catalog")
}

/// App over the seed catalog plus the sink it reports to.
pub fn create_test_app() -> (App, Arc<RecordingNotificationSink>) {
    create_test_app_with(&[])
}

pub fn create_test_app_with(overrides: &[(&str, &str)]) -> (App, Arc<RecordingNotificationSink>) {
    let config = Config::load_for_test(overrides).expect("Failed to load test config");
    config.validate().expect("Test config must be valid");
    let sink = Arc::new(RecordingNotificationSink::new());
    (App::new(config, test_catalog(), sink.clone()), sink)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed submission time.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 20, 10, 30, 0).unwrap()
}

/// A customer with a random name.
pub struct TestOwner {
    pub name: String,
    pub phone: String,
}

impl TestOwner {
    pub fn new() -> Self {
        let suffix: u32 = (1000..9999).fake();
        Self {
            name: Name().fake(),
            phone: format!("+62 812-3456-{}", suffix),
        }
    }
}

impl Default for TestOwner {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills every required field: Basic Care from 1 to 6 February 2024.
pub fn fill_booking_form(form: &mut BookingForm, owner: &TestOwner) {
    form.pet_name = "Rango".to_string();
    form.pet_species = "Leopard Gecko".to_string();
    form.pet_age = "2".to_string();
    form.pet_weight = "60".to_string();
    form.pet_gender = "male".to_string();
    form.owner_name = owner.name.clone();
    form.owner_phone = owner.phone.clone();
    form.check_in_date = Some(date(2024, 2, 1));
    form.check_out_date = Some(date(2024, 2, 6));
    form.selected_package = Some("basic".to_string());
}

pub fn sample_report_request(pet_id: &str) -> CreateDailyReportRequest {
    CreateDailyReportRequest {
        pet_id: pet_id.to_string(),
        date: date(2024, 1, 20),
        feeding: FeedingRecord {
            morning: true,
            afternoon: true,
            evening: false,
            notes: "Ate crickets".to_string(),
        },
        health: HealthRecord {
            temperature: 33.5,
            activity: Activity::High,
            appetite: Appetite::Good,
            notes: String::new(),
        },
        cleaning: CleaningRecord {
            habitat: true,
            water: true,
            notes: String::new(),
        },
        photos: vec![],
        reported_by: "Dr. Amanda".to_string(),
    }
}
