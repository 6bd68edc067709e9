//! Dashboard aggregation.
//!
//! Read-only views over bookings, pets and daily reports used by the admin
//! and customer dashboards. Inputs are never modified.

use chrono::{Datelike, NaiveDate};

use crate::models::booking::{Booking, BookingStatus};
use crate::models::daily_report::DailyReport;
use crate::models::dashboard::{DashboardStatistics, PetInCare, StatusShare};
use crate::models::pet::Pet;

/// Default number of bookings shown in the priority list.
pub const PRIORITY_LIMIT: usize = 5;

// ============================================================================
// Admin views
// ============================================================================

/// Pending and Confirmed bookings, earliest check-in first.
///
/// Bookings with the same check-in date keep their input order.
pub fn priority_bookings(bookings: &[Booking], limit: usize) -> Vec<Booking> {
    let mut upcoming: Vec<Booking> = bookings
        .iter()
        .filter(|b| matches!(b.status, BookingStatus::Pending | BookingStatus::Confirmed))
        .cloned()
        .collect();
    upcoming.sort_by_key(|b| b.check_in_date);
    upcoming.truncate(limit);
    upcoming
}

/// In Care bookings paired with their pet.
///
/// Bookings whose pet is unknown are left out.
pub fn pets_in_care(bookings: &[Booking], pets: &[Pet]) -> Vec<PetInCare> {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::InCare)
        .filter_map(|booking| {
            pets.iter()
                .find(|pet| pet.id == booking.pet_id)
                .map(|pet| PetInCare {
                    booking: booking.clone(),
                    pet: pet.clone(),
                })
        })
        .collect()
}

/// Count and whole-percent share of every status, in display order.
///
/// Percentages are rounded half away from zero and may not sum to 100.
pub fn status_distribution(bookings: &[Booking]) -> Vec<StatusShare> {
    let total = bookings.len();
    BookingStatus::ALL
        .iter()
        .map(|&status| {
            let count = bookings.iter().filter(|b| b.status == status).count();
            StatusShare {
                status,
                count,
                percentage: percent(count, total),
            }
        })
        .collect()
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// Inputs for [`dashboard_statistics`] that do not come from the data set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsContext {
    /// Any day in the month revenue is reported for.
    pub reference_date: NaiveDate,
    /// Number of enclosures.
    pub capacity: u32,
    /// Externally supplied rating, 0-5.
    pub customer_satisfaction: f64,
}

/// Headline figures for the admin overview.
///
/// Cancelled bookings do not count towards revenue or average stay.
/// Occupancy is the share of capacity taken by In Care bookings, capped at 100.
pub fn dashboard_statistics(
    bookings: &[Booking],
    pets: &[Pet],
    context: StatisticsContext,
) -> DashboardStatistics {
    let in_care = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::InCare)
        .count();

    let billable: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .collect();

    let reference = context.reference_date;
    let monthly_revenue = billable
        .iter()
        .filter(|b| {
            b.check_in_date.year() == reference.year() && b.check_in_date.month() == reference.month()
        })
        .map(|b| b.total_cost)
        .sum();

    let average_stay_duration = if billable.is_empty() {
        0.0
    } else {
        let days: i64 = billable.iter().map(|b| b.duration_days()).sum();
        round_one_decimal(days as f64 / billable.len() as f64)
    };

    let occupancy_rate = if context.capacity == 0 {
        0
    } else {
        percent(in_care, context.capacity as usize).min(100)
    };

    DashboardStatistics {
        total_pets: pets.len(),
        active_bookings: in_care,
        monthly_revenue,
        occupancy_rate,
        average_stay_duration,
        customer_satisfaction: context.customer_satisfaction,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// Customer views
// ============================================================================

/// Pets owned by `owner_id`.
pub fn customer_pets(pets: &[Pet], owner_id: &str) -> Vec<Pet> {
    pets.iter()
        .filter(|pet| pet.owner_id == owner_id)
        .cloned()
        .collect()
}

/// Bookings for any pet owned by `owner_id`.
pub fn customer_bookings(bookings: &[Booking], pets: &[Pet], owner_id: &str) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| {
            pets.iter()
                .any(|pet| pet.id == booking.pet_id && pet.owner_id == owner_id)
        })
        .cloned()
        .collect()
}

/// Bookings that are In Care or Confirmed.
pub fn active_bookings(bookings: &[Booking]) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| matches!(b.status, BookingStatus::InCare | BookingStatus::Confirmed))
        .cloned()
        .collect()
}

pub fn completed_count(bookings: &[Booking]) -> usize {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .count()
}

/// Reports for one pet, newest first.
pub fn reports_for_pet(reports: &[DailyReport], pet_id: &str) -> Vec<DailyReport> {
    let mut result: Vec<DailyReport> = reports
        .iter()
        .filter(|report| report.pet_id == pet_id)
        .cloned()
        .collect();
    result.sort_by(|a, b| b.date.cmp(&a.date));
    result
}
