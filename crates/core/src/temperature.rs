//! Temperature values and their literal rendering
//!
//! A [`Temperature`] carries no unit. The unit is implied by whichever side of a
//! conversion the value sits on. The only thing it remembers besides the number
//! is whether it came from an integer or a float, because that changes how the
//! input literal is echoed back in a formatted result (`0°C` vs `25.0°C`).

use std::fmt;

/// A temperature magnitude without a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Temperature {
    /// Produced from an integer, renders without a fractional part.
    Whole(i64),
    /// Produced from a float, renders with at least one fractional digit.
    Real(f64),
}

impl Temperature {
    /// Numeric value as a double.
    pub fn value(self) -> f64 {
        match self {
            Temperature::Whole(n) => n as f64,
            Temperature::Real(x) => x,
        }
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Temperature::Real(value)
    }
}

impl From<i64> for Temperature {
    fn from(value: i64) -> Self {
        Temperature::Whole(value)
    }
}

impl From<i32> for Temperature {
    fn from(value: i32) -> Self {
        Temperature::Whole(i64::from(value))
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Whole(n) => write!(f, "{n}"),
            Temperature::Real(x) => f.write_str(&float_literal(*x)),
        }
    }
}

/// Render a float with the shortest round-trip digits.
///
/// Whole numbers keep a trailing `.0`. Scientific notation with a signed,
/// two-digit exponent is used when the decimal exponent is 16 or more, or
/// below -4 (`1e+16`, `1.5e-05`).
pub fn float_literal(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "2.5e1".
    let scientific = format!("{:e}", x.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return x.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let sign = if x.is_sign_negative() { "-" } else { "" };

    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if !(-4 < point && point <= 16) {
        let (head, tail) = digits.split_at(1);
        let fraction = if tail.is_empty() {
            String::new()
        } else {
            format!(".{tail}")
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{head}{fraction}e{exponent_sign}{:02}", exponent.unsigned_abs())
    } else if point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let point = point as usize;
        if point >= digits.len() {
            format!("{digits}{}.0", "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    };

    format!("{sign}{body}")
}
