//! Input validation for user-supplied temperatures
//!
//! Turns untrusted text into a [`Temperature`] before any arithmetic runs.

use crate::temperature::Temperature;
use serde_json::Value;

/// Reasons a temperature input is rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Masukkan nilai temperatur")]
    EmptyInput,

    #[error("Masukkan angka yang valid")]
    NotANumber,
}

/// Parse raw text into a temperature.
///
/// Surrounding whitespace is ignored. Anything the standard `f64` parser
/// accepts is accepted, except values that parse to infinity or NaN. No range
/// check is applied, so values below absolute zero pass.
pub fn validate(raw: &str) -> Result<Temperature, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Temperature::Real(value)),
        _ => Err(ValidationError::NotANumber),
    }
}

/// Coerce an untyped JSON field into the text handed to [`validate`].
///
/// A missing field becomes the empty string. Strings pass through and numbers
/// keep their JSON spelling. Any other value is rendered as JSON, which the
/// validator then rejects.
pub fn temperature_text(field: Option<&Value>) -> String {
    match field {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
