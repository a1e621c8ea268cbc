//! CLI command implementations.
//!
//! Contains the logic for each CLI command.

use crate::cli::interactive::run_session;
use crate::cli::output::{ConversionOutput, OutputFormat, format_conversion, format_units};
use crate::cli::parser::{Cli, Commands};
use crate::converter::{convert, format_temperature};
use crate::core::TemperatureUnit;
use crate::error::Result;
use crate::session::{Session, SessionConfig};
use std::io;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success. The `session` command streams its
/// output directly and returns an empty string.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the command fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let config = cli.session_config()?;

    match &cli.command {
        Commands::Convert { value, from, to } => cmd_convert(value, *from, *to, &config, format),
        Commands::Units => Ok(format_units(format)),
        Commands::Session => cmd_session(config, format),
    }
}

fn cmd_convert(
    value: &str,
    from: TemperatureUnit,
    to: TemperatureUnit,
    config: &SessionConfig,
    format: OutputFormat,
) -> Result<String> {
    let converted = convert(value, from, to)?;
    let result = format_temperature(converted, config.decimal_places);
    tracing::debug!(value, %from, %to, %result, "converted");

    Ok(format_conversion(
        &ConversionOutput {
            input: value,
            from,
            to,
            value: converted,
            result,
        },
        format,
    ))
}

fn cmd_session(config: SessionConfig, format: OutputFormat) -> Result<String> {
    let mut session = Session::new(config)?;
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut session, stdin.lock(), &mut stdout, format)?;
    Ok(String::new())
}
