//! Booking domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Booking Status Enum
// ============================================================================

/// Status of a boarding booking in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    #[serde(rename = "In Care")]
    InCare,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Every status, in the order dashboards list them.
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::InCare,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    /// Returns the display name used in fixtures and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::InCare => "In Care",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Returns the dash-separated slug used by filter forms.
    pub fn slug(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InCare => "in-care",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Completed and Cancelled bookings never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Check if transition to target status is valid.
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        match (self, target) {
            (BookingStatus::Pending, BookingStatus::Confirmed) => true,
            (BookingStatus::Confirmed, BookingStatus::InCare) => true,
            (BookingStatus::InCare, BookingStatus::Completed) => true,
            // Any non-terminal booking may be cancelled
            (from, BookingStatus::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    /// Accepts any casing and `-`, `_` or space separators ("in-care", "IN_CARE").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "incare" => Ok(BookingStatus::InCare),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!(
                "Invalid booking status: {}. Must be one of: Pending, Confirmed, In Care, Completed, Cancelled",
                s
            )),
        }
    }
}

/// Rejected status change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Booking cannot move from {from} to {to}")]
pub struct StatusTransitionError {
    pub from: BookingStatus,
    pub to: BookingStatus,
}

// ============================================================================
// Core Model
// ============================================================================

/// A boarding booking for one pet.
///
/// Pet and owner fields are copied from the pet for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub pet_id: String,
    pub pet_name: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
    pub services: Vec<String>,
    /// Total price in rupiah.
    pub total_cost: i64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Length of stay in days, never negative.
    pub fn duration_days(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days().max(0)
    }

    /// Returns true if every name in `services` is part of this booking.
    pub fn includes_all_services(&self, services: &[String]) -> bool {
        services.iter().all(|wanted| self.services.contains(wanted))
    }

    /// Moves the booking to `target` if the lifecycle allows it.
    pub fn transition_to(&mut self, target: BookingStatus) -> Result<(), StatusTransitionError> {
        if !self.status.can_transition_to(target) {
            return Err(StatusTransitionError {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
