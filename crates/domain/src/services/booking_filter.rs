//! Admin booking filter.
//!
//! [`FilterForm`] holds what the admin typed into the filter dialog.
//! [`FilterForm::to_filter`] turns it into a typed [`BookingFilter`], dropping
//! anything blank or unparseable, and [`BookingFilter::apply`] narrows a
//! booking list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::date_range::DateRange;
use tracing::{debug, warn};

use crate::models::booking::{Booking, BookingStatus};
use crate::models::pet::{to_slug, Pet, PET_TYPE_OPTIONS};

/// Service names offered as checkboxes in the filter dialog.
pub const SERVICE_OPTIONS: &[&str] = &[
    "Daily Care",
    "Health Monitoring",
    "Photo Updates",
    "Feeding Service",
    "Exercise Time",
    "Special Diet",
    "Night Heating",
];

/// Status choices offered by the filter dialog (slug, label).
pub fn status_options() -> Vec<(&'static str, &'static str)> {
    BookingStatus::ALL
        .iter()
        .map(|status| (status.slug(), status.as_str()))
        .collect()
}

/// Typed booking filter. Every criterion is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    /// Species slug such as `"ball-python"`.
    pub pet_type: Option<String>,
    pub owner_name: Option<String>,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
    pub date_range: Option<DateRange>,
    /// Service names that must all be present on a booking.
    #[serde(default)]
    pub services: Vec<String>,
}

impl BookingFilter {
    /// Returns true when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.pet_type.is_none()
            && self.owner_name_needle().is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.date_range.map_or(true, |range| range.is_unbounded())
            && self.services.is_empty()
    }

    fn owner_name_needle(&self) -> Option<String> {
        self.owner_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns the bookings matching every criterion, in their original order.
    ///
    /// A pet type criterion needs the booking's pet. Bookings whose pet is
    /// missing from `pets` never match it.
    pub fn apply(&self, bookings: &[Booking], pets: &[Pet]) -> Vec<Booking> {
        let owner_needle = self.owner_name_needle();
        let pet_type = self.pet_type.as_deref().map(to_slug);

        let result: Vec<Booking> = bookings
            .iter()
            .filter(|booking| self.status.map_or(true, |status| booking.status == status))
            .filter(|booking| {
                owner_needle
                    .as_deref()
                    .map_or(true, |needle| booking.owner_name.to_lowercase().contains(needle))
            })
            .filter(|booking| self.min_amount.map_or(true, |min| booking.total_cost >= min))
            .filter(|booking| self.max_amount.map_or(true, |max| booking.total_cost <= max))
            .filter(|booking| {
                self.date_range
                    .map_or(true, |range| range.contains(booking.check_in_date))
            })
            .filter(|booking| {
                pet_type.as_deref().map_or(true, |slug| {
                    pets.iter()
                        .find(|pet| pet.id == booking.pet_id)
                        .is_some_and(|pet| pet.species_slug() == slug)
                })
            })
            .filter(|booking| booking.includes_all_services(&self.services))
            .cloned()
            .collect();

        debug!(
            total = bookings.len(),
            matched = result.len(),
            "Applied booking filter"
        );
        result
    }
}

/// A removable chip summarizing one active criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FilterBadge {
    Status(BookingStatus),
    PetType(String),
    OwnerName(String),
    Service(String),
}

impl FilterBadge {
    pub fn label(&self) -> String {
        match self {
            FilterBadge::Status(status) => format!("Status: {}", status),
            FilterBadge::PetType(slug) => {
                let label = PET_TYPE_OPTIONS
                    .iter()
                    .find(|(value, _)| *value == slug.as_str())
                    .map_or(slug.as_str(), |(_, label)| *label);
                format!("Type: {}", label)
            }
            FilterBadge::OwnerName(name) => format!("Owner: {}", name),
            FilterBadge::Service(service) => service.clone(),
        }
    }
}

/// Raw filter dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterForm {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Status slug or display name, blank for any.
    pub status: String,
    pub pet_type: String,
    pub owner_name: String,
    pub min_amount: String,
    pub max_amount: String,
    pub services: Vec<String>,
}

impl FilterForm {
    /// Ticks or unticks a service checkbox.
    pub fn toggle_service(&mut self, service: &str) {
        if let Some(pos) = self.services.iter().position(|s| s == service) {
            self.services.remove(pos);
        } else {
            self.services.push(service.to_string());
        }
    }

    /// Resets every input.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Chips for the active status, pet type, owner name and services.
    pub fn active_badges(&self) -> Vec<FilterBadge> {
        let mut badges = Vec::new();
        if let Some(status) = parse_status(&self.status) {
            badges.push(FilterBadge::Status(status));
        }
        if let Some(pet_type) = non_blank(&self.pet_type) {
            badges.push(FilterBadge::PetType(to_slug(pet_type)));
        }
        if let Some(owner) = non_blank(&self.owner_name) {
            badges.push(FilterBadge::OwnerName(owner.to_string()));
        }
        badges.extend(self.services.iter().cloned().map(FilterBadge::Service));
        badges
    }

    /// Clears the input behind a chip.
    pub fn remove_badge(&mut self, badge: &FilterBadge) {
        match badge {
            FilterBadge::Status(_) => self.status.clear(),
            FilterBadge::PetType(_) => self.pet_type.clear(),
            FilterBadge::OwnerName(_) => self.owner_name.clear(),
            FilterBadge::Service(service) => self.services.retain(|s| s != service),
        }
    }

    /// Builds the typed filter. Blank or unparseable inputs are left out.
    pub fn to_filter(&self) -> BookingFilter {
        let date_range = match DateRange::new(self.date_from, self.date_to) {
            Ok(range) if !range.is_unbounded() => Some(range),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Ignoring date range in booking filter");
                None
            }
        };

        BookingFilter {
            status: parse_status(&self.status),
            pet_type: non_blank(&self.pet_type).map(to_slug),
            owner_name: non_blank(&self.owner_name).map(str::to_string),
            min_amount: parse_amount(&self.min_amount),
            max_amount: parse_amount(&self.max_amount),
            date_range,
            services: self.services.clone(),
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_status(value: &str) -> Option<BookingStatus> {
    let value = non_blank(value)?;
    match value.parse() {
        Ok(status) => Some(status),
        Err(e) => {
            warn!(error = %e, "Ignoring status in booking filter");
            None
        }
    }
}

/// Parses an amount typed as `1500000` or `1.500.000`.
fn parse_amount(value: &str) -> Option<i64> {
    let digits: String = non_blank(value)?
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' ' | '_'))
        .collect();
    digits.parse::<i64>().ok().filter(|amount| *amount >= 0)
}
