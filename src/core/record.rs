//! Saved conversion records.

use crate::core::TemperatureUnit;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One completed, saved conversion.
///
/// Records are immutable once built. The timestamp is captured at
/// construction and the identifier is a fresh random UUID.
///
/// # Examples
///
/// ```
/// use tempconv::core::{ConversionRecord, TemperatureUnit};
///
/// let record = ConversionRecord::new(
///     "100".to_string(),
///     TemperatureUnit::Celsius,
///     TemperatureUnit::Fahrenheit,
///     "212.00".to_string(),
/// );
/// assert_eq!(record.summary(), "100 °C → 212.00 °F");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRecord {
    id: Uuid,
    input_value: String,
    from_unit: TemperatureUnit,
    to_unit: TemperatureUnit,
    result: String,
    timestamp: DateTime<Utc>,
}

impl ConversionRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `input_value` - The text the user entered, kept verbatim.
    /// * `from_unit` - Source unit.
    /// * `to_unit` - Destination unit.
    /// * `result` - Formatted converted value.
    #[must_use]
    pub fn new(
        input_value: String,
        from_unit: TemperatureUnit,
        to_unit: TemperatureUnit,
        result: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            input_value,
            from_unit,
            to_unit,
            result,
            timestamp: Utc::now(),
        }
    }

    /// Unique identifier of this record.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The original input text.
    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// Source unit.
    #[must_use]
    pub const fn from_unit(&self) -> TemperatureUnit {
        self.from_unit
    }

    /// Destination unit.
    #[must_use]
    pub const fn to_unit(&self) -> TemperatureUnit {
        self.to_unit
    }

    /// Formatted result.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Creation instant.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// One-line rendering, e.g. `"100 °C → 212.00 °F"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} → {} {}",
            self.input_value,
            self.from_unit.abbreviation(),
            self.result,
            self.to_unit.abbreviation()
        )
    }

    /// Short local time of creation (`HH:MM`).
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }

    /// Caption line, e.g. `"Converted at 14:05"`.
    #[must_use]
    pub fn converted_at(&self) -> String {
        format!("Converted at {}", self.formatted_timestamp())
    }
}
