//! Converter trait definition.
//!
//! Presentation code depends on [`TemperatureConvertible`] rather than on the
//! free functions, so a front end can be exercised with a substitute.

use crate::core::TemperatureUnit;
use crate::error::ConversionError;

/// Conversion and display formatting of temperatures.
///
/// # Examples
///
/// ```
/// use tempconv::{Converter, TemperatureConvertible, TemperatureUnit};
///
/// let converter = Converter;
/// let k = converter.convert("0", TemperatureUnit::Celsius, TemperatureUnit::Kelvin).unwrap();
/// assert_eq!(converter.format_temperature(k, 1), "273.2");
/// ```
pub trait TemperatureConvertible {
    /// Converts `value` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidInput`] when `value` is not a number.
    fn convert(
        &self,
        value: &str,
        from: TemperatureUnit,
        to: TemperatureUnit,
    ) -> Result<f64, ConversionError>;

    /// Renders `value` with `decimal_places` fraction digits.
    fn format_temperature(&self, value: f64, decimal_places: usize) -> String;
}

/// The standard Celsius-pivot converter. Carries no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter;

impl TemperatureConvertible for Converter {
    fn convert(
        &self,
        value: &str,
        from: TemperatureUnit,
        to: TemperatureUnit,
    ) -> Result<f64, ConversionError> {
        super::convert(value, from, to)
    }

    fn format_temperature(&self, value: f64, decimal_places: usize) -> String {
        super::format_temperature(value, decimal_places)
    }
}
