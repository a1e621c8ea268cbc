//! Error types for tempconv operations.
//!
//! The converter has a single failure mode, [`ConversionError::InvalidInput`].
//! The remaining types cover the command-line and session layers built on top
//! of it, all rolled up into [`Error`] using `thiserror`.

use thiserror::Error;

/// Result type alias for tempconv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Temperature conversion errors.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// CLI and session command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// I/O errors (reading session input, writing output).
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Short machine-readable name of the error kind, used in JSON output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Conversion(ConversionError::InvalidInput { .. }) => "invalid_input",
            Self::Command(_) => "command",
            Self::Io(_) => "io",
            Self::Config { .. } => "config",
        }
    }
}

/// Errors raised by the converter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The temperature text is not a finite decimal number.
    #[error("invalid temperature: {value:?}")]
    InvalidInput {
        /// The rejected input, verbatim.
        value: String,
    },
}

impl ConversionError {
    /// Message suitable for showing to an end user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Please enter a valid number for the temperature.",
        }
    }
}

/// CLI and session command errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown session command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Unit name that matches none of the supported scales.
    #[error("unknown temperature unit: {0}")]
    UnknownUnit(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(format!("serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_display() {
        let err = ConversionError::InvalidInput {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid temperature: \"abc\"");
        assert_eq!(
            err.user_message(),
            "Please enter a valid number for the temperature."
        );
    }

    #[test]
    fn test_error_from_conversion() {
        let err: Error = ConversionError::InvalidInput {
            value: String::new(),
        }
        .into();
        assert!(matches!(err, Error::Conversion(_)));
        assert_eq!(err.kind(), "invalid_input");
        assert_eq!(err.to_string(), "conversion error: invalid temperature: \"\"");
    }

    #[test]
    fn test_command_error_variants() {
        let err = CommandError::UnknownCommand("frobnicate".to_string());
        assert_eq!(err.to_string(), "unknown command: frobnicate");

        let err = CommandError::InvalidArgument("places 9".to_string());
        assert!(err.to_string().contains("invalid argument"));

        let err = CommandError::MissingArgument("unit".to_string());
        assert_eq!(err.to_string(), "missing required argument: unit");

        let err = CommandError::UnknownUnit("rankine".to_string());
        assert_eq!(err.to_string(), "unknown temperature unit: rankine");
    }

    #[test]
    fn test_error_from_command() {
        let err: Error = CommandError::MissingArgument("value".to_string()).into();
        assert!(matches!(err, Error::Command(_)));
        assert_eq!(err.kind(), "command");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), "io");
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<i32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().contains("serialization failed"));
    }

    #[test]
    fn test_error_config() {
        let err = Error::Config {
            message: "decimal places must be between 0 and 4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "configuration error: decimal places must be between 0 and 4"
        );
        assert_eq!(err.kind(), "config");
    }
}
