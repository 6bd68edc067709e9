//! Export request models.
//!
//! An export request describes what the admin asked for. No file is ever
//! written.

use serde::{Deserialize, Serialize};
use shared::date_range::DateRange;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unknown value for one of the export selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Unknown export data type: {0}")]
    UnknownDataType(String),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Unknown export column: {0}")]
    UnknownColumn(String),
}

/// Which dataset is exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportDataType {
    #[default]
    Bookings,
    Pets,
    Reports,
    Financial,
}

impl ExportDataType {
    pub const ALL: [ExportDataType; 4] = [
        ExportDataType::Bookings,
        ExportDataType::Pets,
        ExportDataType::Reports,
        ExportDataType::Financial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportDataType::Bookings => "bookings",
            ExportDataType::Pets => "pets",
            ExportDataType::Reports => "reports",
            ExportDataType::Financial => "financial",
        }
    }

    /// Label shown in the dialog.
    pub fn label(&self) -> &'static str {
        match self {
            ExportDataType::Bookings => "Booking Data",
            ExportDataType::Pets => "Pet Data",
            ExportDataType::Reports => "Daily Reports",
            ExportDataType::Financial => "Financial Report",
        }
    }
}

impl fmt::Display for ExportDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportDataType {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bookings" => Ok(ExportDataType::Bookings),
            "pets" => Ok(ExportDataType::Pets),
            "reports" => Ok(ExportDataType::Reports),
            "financial" => Ok(ExportDataType::Financial),
            _ => Err(ExportError::UnknownDataType(s.to_string())),
        }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Pdf,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Xlsx,
        ExportFormat::Pdf,
        ExportFormat::Json,
    ];

    /// File extension, also the serialized value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "Excel",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Json => "JSON",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "pdf" => Ok(ExportFormat::Pdf),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Booking column that can be included in an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportColumn {
    Id,
    PetName,
    OwnerName,
    OwnerPhone,
    CheckInDate,
    CheckOutDate,
    Status,
    Services,
    TotalCost,
    Notes,
}

impl ExportColumn {
    /// Every column in dialog order.
    pub const ALL: [ExportColumn; 10] = [
        ExportColumn::Id,
        ExportColumn::PetName,
        ExportColumn::OwnerName,
        ExportColumn::OwnerPhone,
        ExportColumn::CheckInDate,
        ExportColumn::CheckOutDate,
        ExportColumn::Status,
        ExportColumn::Services,
        ExportColumn::TotalCost,
        ExportColumn::Notes,
    ];

    /// Column key, matching the booking JSON field name.
    pub fn key(&self) -> &'static str {
        match self {
            ExportColumn::Id => "id",
            ExportColumn::PetName => "petName",
            ExportColumn::OwnerName => "ownerName",
            ExportColumn::OwnerPhone => "ownerPhone",
            ExportColumn::CheckInDate => "checkInDate",
            ExportColumn::CheckOutDate => "checkOutDate",
            ExportColumn::Status => "status",
            ExportColumn::Services => "services",
            ExportColumn::TotalCost => "totalCost",
            ExportColumn::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportColumn::Id => "Booking ID",
            ExportColumn::PetName => "Pet Name",
            ExportColumn::OwnerName => "Owner Name",
            ExportColumn::OwnerPhone => "Phone Number",
            ExportColumn::CheckInDate => "Check-in Date",
            ExportColumn::CheckOutDate => "Check-out Date",
            ExportColumn::Status => "Status",
            ExportColumn::Services => "Services",
            ExportColumn::TotalCost => "Total Cost",
            ExportColumn::Notes => "Notes",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ExportColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportColumn {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ExportColumn::ALL
            .iter()
            .copied()
            .find(|column| column.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ExportError::UnknownColumn(s.to_string()))
    }
}

/// Which booking columns are ticked in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelection {
    selected: [bool; 10],
}

impl Default for ColumnSelection {
    /// Everything except notes.
    fn default() -> Self {
        let mut selected = [true; 10];
        selected[ExportColumn::Notes.index()] = false;
        Self { selected }
    }
}

impl ColumnSelection {
    /// A selection with nothing ticked.
    pub fn none() -> Self {
        Self {
            selected: [false; 10],
        }
    }

    pub fn is_selected(&self, column: ExportColumn) -> bool {
        self.selected[column.index()]
    }

    pub fn set(&mut self, column: ExportColumn, selected: bool) {
        self.selected[column.index()] = selected;
    }

    /// Flips a single column.
    pub fn toggle(&mut self, column: ExportColumn) {
        let slot = &mut self.selected[column.index()];
        *slot = !*slot;
    }

    /// Clears everything when all columns are ticked, otherwise ticks all.
    pub fn toggle_all(&mut self) {
        let target = !self.all_selected();
        self.selected = [target; 10];
    }

    /// Ticked columns in dialog order.
    pub fn selected(&self) -> Vec<ExportColumn> {
        ExportColumn::ALL
            .iter()
            .copied()
            .filter(|column| self.is_selected(*column))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    pub fn all_selected(&self) -> bool {
        self.selected.iter().all(|s| *s)
    }
}

/// Final export request produced by the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub data_type: ExportDataType,
    pub format: ExportFormat,
    pub date_range: DateRange,
    /// Only present for booking exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ExportColumn>>,
    pub file_name: String,
}

/// Summary shown at the bottom of the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPreview {
    pub data_type_label: String,
    pub format_label: String,
    pub column_count: usize,
    /// Only present when both dates are chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}
