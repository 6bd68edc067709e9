//! Common validation utilities.

use validator::ValidationError;

/// Lowest body/basking temperature accepted in a health record, in °C.
pub const MIN_TEMPERATURE_CELSIUS: f64 = 20.0;

/// Highest body/basking temperature accepted in a health record, in °C.
pub const MAX_TEMPERATURE_CELSIUS: f64 = 45.0;

/// Upper bound of the customer satisfaction scale.
pub const MAX_SATISFACTION: f64 = 5.0;

lazy_static::lazy_static! {
    /// Phone numbers: optional leading `+`, digits separated by spaces or dashes.
    pub static ref PHONE_REGEX: regex::Regex =
        regex::Regex::new(r"^\+?[0-9][0-9 \-]{5,19}$").unwrap();
}

/// Validates that a text field contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a phone number such as `+62 812-1111-1111`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone.trim()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone number must contain only digits, spaces or dashes".into());
        Err(err)
    }
}

/// Validates that a temperature reading is plausible for a reptile.
pub fn validate_temperature(celsius: f64) -> Result<(), ValidationError> {
    if (MIN_TEMPERATURE_CELSIUS..=MAX_TEMPERATURE_CELSIUS).contains(&celsius) {
        Ok(())
    } else {
        let mut err = ValidationError::new("temperature_range");
        err.message = Some("Temperature must be between 20 and 45 °C".into());
        Err(err)
    }
}

/// Validates that a weight in grams is positive.
pub fn validate_weight_grams(grams: u32) -> Result<(), ValidationError> {
    if grams > 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("weight_range");
        err.message = Some("Weight must be greater than 0 grams".into());
        Err(err)
    }
}

/// Validates a customer satisfaction score on the 0-5 scale.
pub fn validate_satisfaction(score: f64) -> Result<(), ValidationError> {
    if (0.0..=MAX_SATISFACTION).contains(&score) {
        Ok(())
    } else {
        let mut err = ValidationError::new("satisfaction_range");
        err.message = Some("Satisfaction must be between 0 and 5".into());
        Err(err)
    }
}
