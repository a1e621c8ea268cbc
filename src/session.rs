//! Interactive conversion session.
//!
//! A [`Session`] holds the state a front end needs between user actions:
//! the raw input text, the selected units, the display precision, the last
//! error, and the conversion history. It is independent of any particular
//! front end; the CLI's `session` command drives one from stdin.

use crate::converter::{Converter, TemperatureConvertible, is_valid_temperature};
use crate::core::{ConversionRecord, DEFAULT_HISTORY_CAPACITY, HistoryBuffer, TemperatureUnit};
use crate::error::{Error, Result};
use serde::Serialize;

/// Decimal places shown when nothing else is configured.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Largest selectable number of decimal places.
pub const MAX_DECIMAL_PLACES: usize = 4;

/// Error shown when saving an unparseable input.
pub const SAVE_ERROR_MESSAGE: &str = "Please enter a valid temperature.";

/// Settings a session starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    /// Fraction digits in displayed results (0 to [`MAX_DECIMAL_PLACES`]).
    pub decimal_places: usize,
    /// Number of saved conversions kept.
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Checks that every setting is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the precision exceeds
    /// [`MAX_DECIMAL_PLACES`] or the history capacity is zero.
    pub fn validate(&self) -> Result<()> {
        check_decimal_places(self.decimal_places)?;
        if self.history_capacity == 0 {
            return Err(Error::Config {
                message: "history size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn check_decimal_places(places: usize) -> Result<()> {
    if places > MAX_DECIMAL_PLACES {
        return Err(Error::Config {
            message: format!(
                "decimal places must be between 0 and {MAX_DECIMAL_PLACES}, got {places}"
            ),
        });
    }
    Ok(())
}

/// Validation state of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputState {
    /// Nothing entered yet.
    Empty,
    /// The input parses as a temperature.
    Valid,
    /// The input does not parse.
    Invalid,
}

/// State of one interactive conversion session.
#[derive(Debug)]
pub struct Session<C = Converter> {
    converter: C,
    input: String,
    from_unit: TemperatureUnit,
    to_unit: TemperatureUnit,
    decimal_places: usize,
    history: HistoryBuffer,
    error_message: Option<String>,
}

impl Session<Converter> {
    /// Creates a session using the standard converter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` is out of range.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_converter(config, Converter)
    }
}

impl<C: TemperatureConvertible> Session<C> {
    /// Creates a session around a specific converter.
    ///
    /// Starts with empty input, converting Celsius to Fahrenheit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` is out of range.
    pub fn with_converter(config: SessionConfig, converter: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            converter,
            input: String::new(),
            from_unit: TemperatureUnit::Celsius,
            to_unit: TemperatureUnit::Fahrenheit,
            decimal_places: config.decimal_places,
            history: HistoryBuffer::with_capacity(config.history_capacity),
            error_message: None,
        })
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Source unit.
    #[must_use]
    pub const fn from_unit(&self) -> TemperatureUnit {
        self.from_unit
    }

    /// Selects the source unit.
    pub const fn set_from_unit(&mut self, unit: TemperatureUnit) {
        self.from_unit = unit;
    }

    /// Destination unit.
    #[must_use]
    pub const fn to_unit(&self) -> TemperatureUnit {
        self.to_unit
    }

    /// Selects the destination unit.
    pub const fn set_to_unit(&mut self, unit: TemperatureUnit) {
        self.to_unit = unit;
    }

    /// Exchanges the source and destination units.
    pub const fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    /// Fraction digits in displayed results.
    #[must_use]
    pub const fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    /// Changes the display precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `places` exceeds [`MAX_DECIMAL_PLACES`].
    pub fn set_decimal_places(&mut self, places: usize) -> Result<()> {
        check_decimal_places(places)?;
        self.decimal_places = places;
        Ok(())
    }

    /// Whether the input is empty, valid, or invalid.
    #[must_use]
    pub fn input_state(&self) -> InputState {
        if self.input.is_empty() {
            InputState::Empty
        } else if is_valid_temperature(&self.input) {
            InputState::Valid
        } else {
            InputState::Invalid
        }
    }

    /// The live converted value, formatted.
    ///
    /// Empty input converts as `"0"`. Invalid input shows `"0"` and does not
    /// set an error; errors only surface through [`Self::save_conversion`].
    #[must_use]
    pub fn converted_display(&self) -> String {
        let input = if self.input.is_empty() {
            "0"
        } else {
            &self.input
        };
        self.converter
            .convert(input, self.from_unit, self.to_unit)
            .map_or_else(
                |_| "0".to_string(),
                |value| self.converter.format_temperature(value, self.decimal_places),
            )
    }

    /// Whether saving is currently offered.
    #[must_use]
    pub fn can_save(&self) -> bool {
        !self.input.is_empty()
    }

    /// Converts the input and stores the result in the history.
    ///
    /// On failure the session's error message is set to
    /// [`SAVE_ERROR_MESSAGE`] and the conversion error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the input is not a number.
    pub fn save_conversion(&mut self) -> Result<ConversionRecord> {
        let value = match self
            .converter
            .convert(&self.input, self.from_unit, self.to_unit)
        {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(input = %self.input, "rejected save of invalid input");
                self.error_message = Some(SAVE_ERROR_MESSAGE.to_string());
                return Err(err.into());
            }
        };

        let result = self.converter.format_temperature(value, self.decimal_places);
        let record =
            ConversionRecord::new(self.input.clone(), self.from_unit, self.to_unit, result);
        tracing::debug!(summary = %record.summary(), "saved conversion");

        self.error_message = None;
        self.history.add_record(record.clone());
        Ok(record)
    }

    /// The saved conversions.
    #[must_use]
    pub const fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Mutable access to the history, e.g. to subscribe observers.
    pub const fn history_mut(&mut self) -> &mut HistoryBuffer {
        &mut self.history
    }

    /// Empties the history.
    pub fn clear_history(&mut self) {
        self.history.clear_history();
    }

    /// The error from the last failed save, if not yet dismissed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Clears the pending error message.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }
}
