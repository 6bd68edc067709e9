//! Export dialog configuration.
//!
//! [`ExportConfig`] is the dialog state; [`ExportConfig::build`] turns it
//! into an [`ExportRequest`] naming the file that would be produced.

use chrono::NaiveDate;
use serde::Serialize;
use shared::date_range::DateRange;

pub use crate::models::export::ColumnSelection;
use crate::models::export::{
    ExportColumn, ExportDataType, ExportFormat, ExportPreview, ExportRequest,
};

/// File names embed the export date in ISO form.
const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current choices in the export dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    pub data_type: ExportDataType,
    pub format: ExportFormat,
    pub date_range: DateRange,
    #[serde(skip)]
    pub columns: ColumnSelection,
}

impl ExportConfig {
    /// Booking export in `format` with the default column selection.
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn with_data_type(mut self, data_type: ExportDataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_columns(mut self, columns: ColumnSelection) -> Self {
        self.columns = columns;
        self
    }

    /// Toggles a single column.
    pub fn toggle_column(&mut self, column: ExportColumn) {
        self.columns.toggle(column);
    }

    /// Select-all checkbox.
    pub fn toggle_all_columns(&mut self) {
        self.columns.toggle_all();
    }

    /// Column choice only applies to booking exports.
    pub fn uses_columns(&self) -> bool {
        self.data_type == ExportDataType::Bookings
    }

    /// `{type}_{YYYY-MM-DD}.{format}`, e.g. `bookings_2024-01-20.csv`.
    pub fn file_name(&self, today: NaiveDate) -> String {
        format!(
            "{}_{}.{}",
            self.data_type.as_str(),
            today.format(FILE_DATE_FORMAT),
            self.format.as_str()
        )
    }

    pub fn build(&self, today: NaiveDate) -> ExportRequest {
        ExportRequest {
            data_type: self.data_type,
            format: self.format,
            date_range: self.date_range,
            columns: self.uses_columns().then(|| self.columns.selected()),
            file_name: self.file_name(today),
        }
    }

    pub fn preview(&self) -> ExportPreview {
        ExportPreview {
            data_type_label: self.data_type.label().to_string(),
            format_label: self.format.label().to_string(),
            column_count: self.columns.selected_count(),
            period: self.date_range.label(),
        }
    }
}
