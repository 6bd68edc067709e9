use chrono::NaiveDate;
use domain::models::ExportFormat;
use serde::Deserialize;
use shared::date_range::parse_iso_date;
use shared::validation::validate_satisfaction;

use crate::logging::LogFormat;

/// Defaults shipped with the binary; `config/default.toml` at the workspace root.
const DEFAULTS: &str = include_str!("../../../config/default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub facility: FacilityConfig,
    pub dashboard: DashboardConfig,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty`, `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Parsed `format`, pretty if unrecognized.
    pub fn log_format(&self) -> LogFormat {
        self.format.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacilityConfig {
    pub name: String,

    /// Number of enclosures, used for the occupancy rate.
    #[serde(default = "default_capacity")]
    pub capacity: u32,

    /// Rating shown on the admin overview, 0-5.
    #[serde(default)]
    pub customer_satisfaction: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// ISO date the dashboards are computed for; today when unset.
    #[serde(default)]
    pub reference_date: Option<String>,

    /// Owner shown by the customer dashboard.
    pub customer_id: String,

    #[serde(default = "default_priority_limit")]
    pub priority_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_export_format")]
    pub default_format: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_capacity() -> u32 {
    50
}
fn default_priority_limit() -> usize {
    domain::services::PRIORITY_LIMIT
}
fn default_export_format() -> String {
    "csv".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from defaults, files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. embedded config/default.toml
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with RC__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RC").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration from the embedded defaults plus `overrides`.
    ///
    /// Ignores files and environment. Validation is left to the caller.
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULTS, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.logging
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigValidationError::InvalidValue(format!("logging.format: {}", e)))?;

        if self.facility.capacity == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "facility.capacity cannot be 0".to_string(),
            ));
        }

        if let Err(e) = validate_satisfaction(self.facility.customer_satisfaction) {
            return Err(ConfigValidationError::InvalidValue(format!(
                "facility.customer_satisfaction: {}",
                e
            )));
        }

        if self.dashboard.priority_limit == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "dashboard.priority_limit cannot be 0".to_string(),
            ));
        }

        if self.dashboard.customer_id.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "dashboard.customer_id must be set".to_string(),
            ));
        }

        if let Some(raw) = self.dashboard.reference_date.as_deref() {
            parse_iso_date(raw).map_err(|e| {
                ConfigValidationError::InvalidValue(format!("dashboard.reference_date: {}", e))
            })?;
        }

        self.export
            .default_format
            .parse::<ExportFormat>()
            .map_err(|e| ConfigValidationError::InvalidValue(format!("export.default_format: {}", e)))?;

        Ok(())
    }

    /// Reference date for dashboards, falling back to `today`.
    pub fn reference_date(&self, today: NaiveDate) -> NaiveDate {
        self.dashboard
            .reference_date
            .as_deref()
            .and_then(|raw| parse_iso_date(raw).ok())
            .unwrap_or(today)
    }

    /// Default export format, CSV if the configured one is unknown.
    pub fn export_format(&self) -> ExportFormat {
        self.export.default_format.parse().unwrap_or_default()
    }
}
