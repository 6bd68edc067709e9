//! Inclusive calendar date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display format for dates shown to facility staff (day/month/year).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Error type for date range construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Range start {from} is after range end {to}")]
    Inverted { from: NaiveDate, to: NaiveDate },
}

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| DateRangeError::InvalidDate(value.to_string()))
}

/// A date range where either bound may be open.
///
/// Both bounds are inclusive. A range with no bounds matches every date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range, rejecting a start that lies after the end.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self, DateRangeError> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(DateRangeError::Inverted { from, to });
            }
        }
        Ok(Self { from, to })
    }

    /// Creates a range with both bounds set.
    pub fn between(from: NaiveDate, to: NaiveDate) -> Result<Self, DateRangeError> {
        Self::new(Some(from), Some(to))
    }

    /// Returns true when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Returns true if `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    /// Human-readable period, only available when both bounds are set.
    pub fn label(&self) -> Option<String> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(format!(
                "{} - {}",
                from.format(DISPLAY_DATE_FORMAT),
                to.format(DISPLAY_DATE_FORMAT)
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-01-15").unwrap(), date(2024, 1, 15));
        assert_eq!(parse_iso_date(" 2024-02-01 ").unwrap(), date(2024, 2, 1));
        assert!(matches!(
            parse_iso_date("15/01/2024"),
            Err(DateRangeError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = DateRange::between(date(2024, 2, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(DateRangeError::Inverted { .. })));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::between(date(2024, 1, 10), date(2024, 1, 20)).unwrap();
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 9)));
        assert!(!range.contains(date(2024, 1, 21)));
    }

    #[test]
    fn test_half_open_ranges() {
        let from_only = DateRange::new(Some(date(2024, 1, 20)), None).unwrap();
        assert!(from_only.contains(date(2030, 1, 1)));
        assert!(!from_only.contains(date(2024, 1, 19)));

        let to_only = DateRange::new(None, Some(date(2024, 1, 20))).unwrap();
        assert!(to_only.contains(date(2000, 1, 1)));
        assert!(!to_only.contains(date(2024, 1, 21)));
    }

    #[test]
    fn test_unbounded_matches_everything() {
        let range = DateRange::default();
        assert!(range.is_unbounded());
        assert!(range.contains(date(1999, 12, 31)));
    }

    #[test]
    fn test_label() {
        let range = DateRange::between(date(2024, 1, 5), date(2024, 1, 25)).unwrap();
        assert_eq!(range.label().unwrap(), "05/01/2024 - 25/01/2024");
        assert!(DateRange::new(Some(date(2024, 1, 5)), None)
            .unwrap()
            .label()
            .is_none());
    }

    #[test]
    fn test_serialization_skips_open_bounds() {
        let range = DateRange::new(Some(date(2024, 1, 5)), None).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"from":"2024-01-05"}"#);
    }
}
