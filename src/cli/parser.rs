//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::{DEFAULT_HISTORY_CAPACITY, TemperatureUnit};
use crate::error::Result;
use crate::session::{DEFAULT_DECIMAL_PLACES, SessionConfig};
use clap::{Parser, Subcommand};

/// tempconv: convert temperatures between Celsius, Fahrenheit and Kelvin.
///
/// Runs one-shot conversions, or an interactive session that keeps a
/// bounded history of saved conversions.
#[derive(Parser, Debug)]
#[command(name = "tempconv")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// Decimal places in results (0-4).
    #[arg(
        short,
        long,
        global = true,
        env = "TEMPCONV_PLACES",
        default_value_t = DEFAULT_DECIMAL_PLACES
    )]
    pub places: usize,

    /// Number of saved conversions kept during a session.
    #[arg(
        long,
        global = true,
        env = "TEMPCONV_HISTORY_SIZE",
        default_value_t = DEFAULT_HISTORY_CAPACITY
    )]
    pub history_size: usize,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a temperature.
    Convert {
        /// Temperature value, e.g. 98.6 or -40.
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Source unit (c, f, k, or the full name).
        #[arg(short, long, default_value = "celsius")]
        from: TemperatureUnit,

        /// Destination unit (c, f, k, or the full name).
        #[arg(short, long, default_value = "fahrenheit")]
        to: TemperatureUnit,
    },

    /// List the supported units.
    Units,

    /// Start an interactive session reading commands from stdin.
    ///
    /// Type `help` inside the session for the command list.
    Session,
}

impl Cli {
    /// Builds the session configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any setting is out of range.
    pub fn session_config(&self) -> Result<SessionConfig> {
        let config = SessionConfig {
            decimal_places: self.places,
            history_capacity: self.history_size,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::CommandFactory;

    fn cli(places: usize, history_size: usize) -> Cli {
        Cli {
            verbose: false,
            format: "text".to_string(),
            places,
            history_size,
            command: Commands::Units,
        }
    }

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["tempconv", "convert", "-40", "--from", "c", "--to", "f"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Convert {
                ref value,
                from: TemperatureUnit::Celsius,
                to: TemperatureUnit::Fahrenheit,
            } if value == "-40"
        ));
    }

    #[test]
    fn test_parse_convert_defaults() {
        let cli = Cli::try_parse_from(["tempconv", "convert", "0"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Convert {
                from: TemperatureUnit::Celsius,
                to: TemperatureUnit::Fahrenheit,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        let result = Cli::try_parse_from(["tempconv", "convert", "1", "--to", "rankine"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_config_default() {
        let config = cli(DEFAULT_DECIMAL_PLACES, DEFAULT_HISTORY_CAPACITY)
            .session_config()
            .unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_session_config_out_of_range() {
        assert!(matches!(
            cli(5, 10).session_config(),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            cli(2, 0).session_config(),
            Err(Error::Config { .. })
        ));
    }
}
