//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{ConversionRecord, HistoryBuffer, TemperatureUnit};
use crate::error::Error;
use crate::session::{InputState, Session};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// A one-shot conversion result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionOutput<'a> {
    /// Input text as given.
    pub input: &'a str,
    /// Source unit.
    pub from: TemperatureUnit,
    /// Destination unit.
    pub to: TemperatureUnit,
    /// Unformatted converted value.
    pub value: f64,
    /// Converted value with the requested precision.
    pub result: String,
}

/// Formats a one-shot conversion.
#[must_use]
pub fn format_conversion(conversion: &ConversionOutput<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "{} {} = {} {}\n",
            conversion.input,
            conversion.from.abbreviation(),
            conversion.result,
            conversion.to.abbreviation()
        ),
        OutputFormat::Json => format_json(conversion),
    }
}

/// Formats the list of supported units.
#[must_use]
pub fn format_units(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "{:<12} Symbol", "Unit");
            output.push_str(&"-".repeat(19));
            output.push('\n');
            for unit in TemperatureUnit::ALL {
                let _ = writeln!(output, "{:<12} {}", unit.name(), unit.abbreviation());
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct UnitOutput {
                unit: TemperatureUnit,
                name: &'static str,
                symbol: &'static str,
            }
            let units: Vec<_> = TemperatureUnit::ALL
                .iter()
                .map(|&unit| UnitOutput {
                    unit,
                    name: unit.name(),
                    symbol: unit.abbreviation(),
                })
                .collect();
            format_json(&units)
        }
    }
}

/// Formats a saved record.
#[must_use]
pub fn format_saved(record: &ConversionRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Saved: {}\n", record.summary()),
        OutputFormat::Json => format_json(record),
    }
}

/// Formats the conversion history, newest first.
#[must_use]
pub fn format_history(history: &HistoryBuffer, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if history.is_empty() {
                return "No conversion history yet\n".to_string();
            }
            let mut output = String::new();
            let _ = writeln!(
                output,
                "Conversion History ({}/{}):",
                history.len(),
                history.capacity()
            );
            for (i, record) in history.records().iter().enumerate() {
                let _ = writeln!(output, "{:>3}. {}", i + 1, record.summary());
                let _ = writeln!(output, "     {}", record.converted_at());
            }
            output
        }
        OutputFormat::Json => format_json(&history.records()),
    }
}

/// Formats the current state of a session.
#[must_use]
pub fn format_session_state(session: &Session, format: OutputFormat) -> String {
    let input = if session.input().is_empty() {
        "0"
    } else {
        session.input()
    };
    match format {
        OutputFormat::Text => {
            let mut output = format!(
                "{} {} = {} {}",
                input,
                session.from_unit().abbreviation(),
                session.converted_display(),
                session.to_unit().abbreviation()
            );
            if session.input_state() == InputState::Invalid {
                output.push_str("  (not a valid temperature)");
            }
            output.push('\n');
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct StateOutput<'a> {
                input: &'a str,
                input_state: InputState,
                from: TemperatureUnit,
                to: TemperatureUnit,
                decimal_places: usize,
                result: String,
                history_len: usize,
            }
            format_json(&StateOutput {
                input: session.input(),
                input_state: session.input_state(),
                from: session.from_unit(),
                to: session.to_unit(),
                decimal_places: session.decimal_places(),
                result: session.converted_display(),
                history_len: session.history().len(),
            })
        }
    }
}

/// Formats a short confirmation message.
#[must_use]
pub fn format_message(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{message}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct MessageOutput<'a> {
                message: &'a str,
            }
            format_json(&MessageOutput { message })
        }
    }
}

/// Formats an error.
///
/// Text output is the bare message; conversion errors use the end-user
/// wording. JSON output carries the message and the error kind.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    let message = match error {
        Error::Conversion(err) => err.user_message().to_string(),
        other => other.to_string(),
    };
    format_error_with_message(error, &message, format)
}

/// Formats an error with a caller-supplied message, such as a session alert.
///
/// The error still decides the JSON `kind`.
#[must_use]
pub fn format_error_with_message(error: &Error, message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => message.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput<'a> {
                error: &'a str,
                kind: &'static str,
            }
            serde_json::to_string(&ErrorOutput {
                error: message,
                kind: error.kind(),
            })
            .unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut output = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CommandError, ConversionError};
    use crate::session::SessionConfig;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_conversion() {
        let conversion = ConversionOutput {
            input: "100",
            from: TemperatureUnit::Celsius,
            to: TemperatureUnit::Fahrenheit,
            value: 212.0,
            result: "212.00".to_string(),
        };
        assert_eq!(
            format_conversion(&conversion, OutputFormat::Text),
            "100 °C = 212.00 °F\n"
        );
        let json = format_conversion(&conversion, OutputFormat::Json);
        assert!(json.contains("\"result\": \"212.00\""));
        assert!(json.contains("\"to\": \"fahrenheit\""));
    }

    #[test]
    fn test_format_units() {
        let text = format_units(OutputFormat::Text);
        assert!(text.contains("Celsius      °C"));
        assert!(text.contains("Kelvin       K"));

        let json = format_units(OutputFormat::Json);
        assert!(json.contains("\"symbol\": \"°F\""));
    }

    #[test]
    fn test_format_history_empty() {
        let history = HistoryBuffer::new();
        assert_eq!(
            format_history(&history, OutputFormat::Text),
            "No conversion history yet\n"
        );
        assert_eq!(format_history(&history, OutputFormat::Json), "[]\n");
    }

    #[test]
    fn test_format_history_entries() {
        let mut history = HistoryBuffer::new();
        history.add_record(ConversionRecord::new(
            "0".to_string(),
            TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin,
            "273.15".to_string(),
        ));
        let text = format_history(&history, OutputFormat::Text);
        assert!(text.starts_with("Conversion History (1/10):\n"));
        assert!(text.contains("  1. 0 °C → 273.15 K\n"));
        assert!(text.contains("Converted at "));
    }

    #[test]
    fn test_format_session_state() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        assert_eq!(
            format_session_state(&session, OutputFormat::Text),
            "0 °C = 32.00 °F\n"
        );
        session.set_input("oops");
        let text = format_session_state(&session, OutputFormat::Text);
        assert!(text.contains("oops °C = 0 °F"));
        assert!(text.contains("not a valid temperature"));

        let json = format_session_state(&session, OutputFormat::Json);
        assert!(json.contains("\"input_state\": \"invalid\""));
    }

    #[test]
    fn test_format_error() {
        let err: Error = ConversionError::InvalidInput {
            value: "x".to_string(),
        }
        .into();
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "Please enter a valid number for the temperature."
        );
        let json = format_error(&err, OutputFormat::Json);
        assert!(json.contains("\"kind\":\"invalid_input\""));

        let err: Error = CommandError::UnknownCommand("zap".to_string()).into();
        assert_eq!(
            format_error(&err, OutputFormat::Text),
            "command error: unknown command: zap"
        );
    }

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("History cleared", OutputFormat::Text), "History cleared\n");
        assert!(format_message("ok", OutputFormat::Json).contains("\"message\": \"ok\""));
    }
}
