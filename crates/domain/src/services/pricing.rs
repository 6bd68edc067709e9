//! Booking price calculator.
//!
//! Prices are per day. A stay is billed for the number of nights between
//! check-in and check-out:
//!
//! `total = package.price × days + Σ add_on.price × days`
//!
//! Any missing input yields a total of zero rather than an error, so the
//! booking page can show a running total while the form is half filled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::service_package::{find_add_on, find_package, AddOnService, ServicePackage};

/// One billed line of the summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLine {
    pub id: String,
    pub name: String,
    pub unit_price: i64,
    pub days: i64,
    pub subtotal: i64,
}

impl PriceLine {
    fn new(id: &str, name: &str, unit_price: i64, days: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            unit_price,
            days,
            subtotal: unit_price * days,
        }
    }
}

/// Itemized price for the booking summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<PriceLine>,
    pub add_ons: Vec<PriceLine>,
    pub total: i64,
}

/// Number of billed days between two dates, never negative.
///
/// Returns 0 when either date is missing.
pub fn duration_days(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => (check_out - check_in).num_days().max(0),
        _ => 0,
    }
}

/// Total price of a stay.
///
/// Returns 0 when a date or the package is missing, the package id is
/// unknown, or the stay is shorter than one day. Unknown add-on ids are
/// skipped.
pub fn calculate_total(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    package_id: Option<&str>,
    add_on_ids: &[String],
    packages: &[ServicePackage],
    add_ons: &[AddOnService],
) -> i64 {
    breakdown(check_in, check_out, package_id, add_on_ids, packages, add_ons).total
}

/// Itemized version of [`calculate_total`].
///
/// When the total would be 0 the breakdown still reports the day count but
/// carries no lines.
pub fn breakdown(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    package_id: Option<&str>,
    add_on_ids: &[String],
    packages: &[ServicePackage],
    add_ons: &[AddOnService],
) -> PriceBreakdown {
    let days = duration_days(check_in, check_out);
    let package = package_id.and_then(|id| find_package(packages, id));

    let package = match package {
        Some(package) if days > 0 => package,
        _ => {
            return PriceBreakdown {
                days,
                ..Default::default()
            }
        }
    };

    let package_line = PriceLine::new(&package.id, &package.name, package.price, days);
    let add_on_lines: Vec<PriceLine> = add_on_ids
        .iter()
        .filter_map(|id| find_add_on(add_ons, id))
        .map(|add_on| PriceLine::new(&add_on.id, &add_on.name, add_on.price, days))
        .collect();

    let total = package_line.subtotal + add_on_lines.iter().map(|line| line.subtotal).sum::<i64>();

    PriceBreakdown {
        days,
        package: Some(package_line),
        add_ons: add_on_lines,
        total,
    }
}
