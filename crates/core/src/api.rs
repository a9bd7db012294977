//! JSON API models and request processing
//!
//! Pure functions behind the HTTP endpoints. The shell hands the request's
//! `Content-Type` and raw body to [`process_convert_request`], and maps the
//! outcome to a status code through [`ApiError::status_code`].
//!
//! Untyped JSON fields are rendered with their JSON text when they show up in
//! a message, so a `null` selector is reported as `'null'`.

use crate::convert::{convert, ConversionSelector};
use crate::validate::{temperature_text, validate};
use serde::Serialize;
use serde_json::Value;

pub const SERVICE_NAME: &str = "Temperature Converter API";
pub const SERVICE_VERSION: &str = "1.0.0";

/// Successful `/convert` response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    pub result: f64,
    pub formatted_result: String,
    pub input_temperature: f64,
    pub conversion_type: String,
}

/// Failed `/convert` response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Body returned for unknown endpoints when the client speaks JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub error: String,
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self {
            error: "Endpoint not found".to_string(),
        }
    }
}

/// `/health` response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Failure of an API request
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Caller input was rejected by validation or conversion.
    #[error("{0}")]
    BadRequest(String),

    /// The request could not be processed at all.
    #[error("Error dalam konversi: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string())
    }
}

/// Run a `/convert` request body through validation and conversion.
///
/// `temperature` may be a string or a number; `conversion_type` must be one of
/// the selector labels. A body that is not a JSON object, or an array/object
/// selector, is an internal error. A conversion that overflows is rejected.
pub fn process_convert(body: &Value) -> Result<ConvertResponse, ApiError> {
    let Value::Object(fields) = body else {
        return Err(ApiError::Internal(format!(
            "expected a JSON object, got {}",
            json_type_name(body)
        )));
    };

    let temperature = validate(&temperature_text(fields.get("temperature")))
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let conversion_type = match fields.get("conversion_type") {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => {
            return Err(ApiError::Internal(format!(
                "conversion_type must be a scalar, got {}",
                json_type_name(other)
            )));
        }
        Some(other) => other.to_string(),
    };

    let converted =
        convert(temperature, &conversion_type).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(ConvertResponse {
        success: true,
        result: converted.result,
        formatted_result: converted.formatted,
        input_temperature: temperature.value(),
        conversion_type,
    })
}

/// Decode a raw request body and process it.
pub fn process_convert_bytes(body: &[u8]) -> Result<ConvertResponse, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Internal(e.to_string()))?;
    process_convert(&value)
}

/// Process a `/convert` request as received over HTTP.
///
/// The body is only decoded when `content_type` names JSON; anything else,
/// including a missing header, is an internal error.
pub fn process_convert_request(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<ConvertResponse, ApiError> {
    if !content_type.is_some_and(is_json_content_type) {
        return Err(ApiError::Internal(
            "Unsupported Media Type: request Content-Type was not 'application/json'".to_string(),
        ));
    }

    process_convert_bytes(body)
}

/// Labels served by `/api/conversions`, in display order.
pub fn conversion_options() -> Vec<&'static str> {
    ConversionSelector::labels()
}

/// Whether a `Content-Type` header value names a JSON body.
///
/// Accepts `application/json` and `application/*+json`, ignoring parameters
/// such as `charset` and letter case.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
