//! Temperature conversion between Celsius, Fahrenheit, Kelvin and Reamur
//!
//! Six fixed conversions are supported, each identified by a
//! [`ConversionSelector`]. Conversion is a closed `match` over the selector;
//! the selector's wire label is only consulted when parsing untrusted input.

use crate::temperature::Temperature;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_MULTIPLIER: f64 = 9.0 / 5.0;
const FAHRENHEIT_OFFSET: f64 = 32.0;
const REAMUR_MULTIPLIER: f64 = 4.0 / 5.0;

/// Error returned when a conversion cannot be performed
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Conversion type '{0}' not supported")]
    UnsupportedConversion(String),

    /// The converted value does not fit in a finite double.
    #[error("Hasil konversi di luar jangkauan")]
    OutOfRange,
}

/// A temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Reamur,
}

impl TemperatureUnit {
    /// Symbol appended to a number when displaying a value in this unit.
    ///
    /// Kelvin carries its own leading space (`373.15 K`).
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => " K",
            TemperatureUnit::Reamur => "°Re",
        }
    }
}

/// One of the six supported (source, target) unit pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionSelector {
    CelsiusToFahrenheit,
    CelsiusToKelvin,
    CelsiusToReamur,
    FahrenheitToCelsius,
    KelvinToCelsius,
    ReamurToCelsius,
}

impl ConversionSelector {
    /// All selectors, in the order they are offered to users.
    pub const ALL: [ConversionSelector; 6] = [
        ConversionSelector::CelsiusToFahrenheit,
        ConversionSelector::CelsiusToKelvin,
        ConversionSelector::CelsiusToReamur,
        ConversionSelector::FahrenheitToCelsius,
        ConversionSelector::KelvinToCelsius,
        ConversionSelector::ReamurToCelsius,
    ];

    pub fn all() -> &'static [ConversionSelector] {
        &Self::ALL
    }

    /// Label used on the wire and in the form page.
    pub fn label(self) -> &'static str {
        match self {
            ConversionSelector::CelsiusToFahrenheit => "Celcius ke Fahrenheit",
            ConversionSelector::CelsiusToKelvin => "Celcius ke Kelvin",
            ConversionSelector::CelsiusToReamur => "Celcius ke Reamur",
            ConversionSelector::FahrenheitToCelsius => "Fahrenheit ke Celcius",
            ConversionSelector::KelvinToCelsius => "Kelvin ke Celcius",
            ConversionSelector::ReamurToCelsius => "Reamur ke Celcius",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.label()).collect()
    }

    pub fn source(self) -> TemperatureUnit {
        match self {
            ConversionSelector::CelsiusToFahrenheit
            | ConversionSelector::CelsiusToKelvin
            | ConversionSelector::CelsiusToReamur => TemperatureUnit::Celsius,
            ConversionSelector::FahrenheitToCelsius => TemperatureUnit::Fahrenheit,
            ConversionSelector::KelvinToCelsius => TemperatureUnit::Kelvin,
            ConversionSelector::ReamurToCelsius => TemperatureUnit::Reamur,
        }
    }

    pub fn target(self) -> TemperatureUnit {
        match self {
            ConversionSelector::CelsiusToFahrenheit => TemperatureUnit::Fahrenheit,
            ConversionSelector::CelsiusToKelvin => TemperatureUnit::Kelvin,
            ConversionSelector::CelsiusToReamur => TemperatureUnit::Reamur,
            ConversionSelector::FahrenheitToCelsius
            | ConversionSelector::KelvinToCelsius
            | ConversionSelector::ReamurToCelsius => TemperatureUnit::Celsius,
        }
    }

    /// Apply the conversion formula. No intermediate rounding.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ConversionSelector::CelsiusToFahrenheit => {
                value * FAHRENHEIT_MULTIPLIER + FAHRENHEIT_OFFSET
            }
            ConversionSelector::CelsiusToKelvin => value + KELVIN_OFFSET,
            ConversionSelector::CelsiusToReamur => value * REAMUR_MULTIPLIER,
            ConversionSelector::FahrenheitToCelsius => {
                (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_MULTIPLIER
            }
            ConversionSelector::KelvinToCelsius => value - KELVIN_OFFSET,
            ConversionSelector::ReamurToCelsius => value / REAMUR_MULTIPLIER,
        }
    }
}

impl FromStr for ConversionSelector {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|selector| selector.label() == s)
            .ok_or_else(|| ConversionError::UnsupportedConversion(s.to_string()))
    }
}

impl fmt::Display for ConversionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ConversionSelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Converted value in the target unit.
    pub result: f64,
    /// Human-readable line, e.g. `25.0°C = 77.00°F`.
    pub formatted: String,
}

/// Convert a value using a selector given by its wire label.
///
/// Fails when the selector is unknown or when a finite input overflows to a
/// non-finite result (e.g. `1.7e308` Celsius to Fahrenheit).
pub fn convert(
    value: impl Into<Temperature>,
    selector: &str,
) -> Result<ConversionResult, ConversionError> {
    let selector = selector.parse::<ConversionSelector>()?;
    let converted = convert_with(value, selector);

    if !converted.result.is_finite() {
        return Err(ConversionError::OutOfRange);
    }

    Ok(converted)
}

/// Convert a value using an already-parsed selector.
///
/// The result is not range-checked; see [`convert`].
pub fn convert_with(
    value: impl Into<Temperature>,
    selector: ConversionSelector,
) -> ConversionResult {
    let input = value.into();
    let result = selector.apply(input.value());

    ConversionResult {
        result,
        formatted: format_result(input, result, selector),
    }
}

/// Build the `"{input}{source} = {result:.2}{target}"` display line.
pub fn format_result(input: Temperature, result: f64, selector: ConversionSelector) -> String {
    format!(
        "{input}{} = {result:.2}{}",
        selector.source().symbol(),
        selector.target().symbol()
    )
}
