//! Temperature conversion.
//!
//! Every cross-unit conversion goes through Celsius: the input is first
//! brought to Celsius, then taken to the destination unit. Each conversion
//! is therefore at most two arithmetic steps away from the pivot.

pub mod format;
pub mod traits;

pub use format::format_temperature;
pub use traits::{Converter, TemperatureConvertible};

use crate::core::TemperatureUnit;
use crate::error::ConversionError;
use regex::Regex;
use std::sync::LazyLock;

/// Optional sign, digits, optional fraction. No exponent, no whitespace.
#[allow(clippy::expect_used)]
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("literal pattern compiles")
});

/// Converts a textual temperature from one unit to another.
///
/// When `from == to` the parsed value is returned as-is, with no unit
/// arithmetic applied.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidInput`] if `value` is not a finite
/// decimal number.
///
/// # Examples
///
/// ```
/// use tempconv::{TemperatureUnit, convert};
///
/// let c = convert("212", TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius).unwrap();
/// assert_eq!(c, 100.0);
/// assert!(convert("abc", TemperatureUnit::Celsius, TemperatureUnit::Kelvin).is_err());
/// ```
pub fn convert(
    value: &str,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<f64, ConversionError> {
    let parsed = parse_temperature(value)?;
    if from == to {
        return Ok(parsed);
    }
    Ok(from_celsius(to_celsius(parsed, from), to))
}

/// Whether [`convert`] would accept `value`.
#[must_use]
pub fn is_valid_temperature(value: &str) -> bool {
    parse_temperature(value).is_ok()
}

/// Parses a finite decimal temperature.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidInput`] for anything else, including
/// values that overflow to infinity.
pub fn parse_temperature(value: &str) -> Result<f64, ConversionError> {
    let invalid = || ConversionError::InvalidInput {
        value: value.to_string(),
    };
    if !DECIMAL.is_match(value) {
        return Err(invalid());
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(invalid)
}

fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    }
}

fn from_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value * 9.0 / 5.0) + 32.0,
        TemperatureUnit::Kelvin => value + 273.15,
    }
}
