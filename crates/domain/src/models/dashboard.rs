//! Dashboard read models.

use serde::{Deserialize, Serialize};

use super::booking::{Booking, BookingStatus};
use super::pet::Pet;

/// Headline figures for the admin overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    pub total_pets: usize,
    /// Bookings currently In Care.
    pub active_bookings: usize,
    /// Revenue in rupiah for the reference month.
    pub monthly_revenue: i64,
    /// Facility utilization, 0-100.
    pub occupancy_rate: u32,
    /// Mean stay in days, one decimal.
    pub average_stay_duration: f64,
    /// 0-5 rating, supplied externally.
    pub customer_satisfaction: f64,
}

/// Share of bookings in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusShare {
    pub status: BookingStatus,
    pub count: usize,
    /// Whole percent of all bookings.
    pub percentage: u32,
}

/// An In Care booking together with its pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetInCare {
    pub booking: Booking,
    pub pet: Pet,
}
