use catalog::CatalogError;
use domain::models::{ExportError, FormRejected, StatusTransitionError};
use domain::services::Notification;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidTransition(#[from] StatusTransitionError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl AppError {
    /// Short title for the error notification a screen shows.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "Not found",
            AppError::Validation(_) => "Validation failed",
            AppError::InvalidTransition(_) => "Status change not allowed",
            AppError::Catalog(_) => "Data unavailable",
            AppError::Config(_) => "Configuration error",
        }
    }

    /// Error notification describing this failure.
    pub fn to_notification(&self) -> Notification {
        let message = match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };
        Notification::error(self.title()).with_message(message)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| ValidationDetail {
                    field: field.to_string(),
                    message: e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        // Nested structs report their own field errors.
        for (field, kind) in errors.errors() {
            if let validator::ValidationErrorsKind::Struct(nested) = kind {
                for (nested_field, nested_errors) in nested.field_errors() {
                    details.extend(nested_errors.iter().map(|e| ValidationDetail {
                        field: format!("{}.{}", field, nested_field),
                        message: e
                            .message
                            .clone()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{}.{} is invalid", field, nested_field)),
                    }));
                }
            }
        }

        let message = if details.len() == 1 {
            details[0].message.clone()
        } else {
            format!("{} validation errors", details.len())
        };

        AppError::Validation(message)
    }
}

impl From<FormRejected> for AppError {
    fn from(err: FormRejected) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Validation(err.to_string())
    }
}
