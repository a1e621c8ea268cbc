//! Line-oriented driver for an interactive [`Session`].
//!
//! Each input line is one command. A line starting with a number (or a sign
//! or decimal point) sets the input, optionally followed by the source and
//! destination units. Errors are written to the output and the session
//! continues; only `quit`, `exit`, or end of input stop it.

use crate::cli::output::{
    OutputFormat, format_error, format_error_with_message, format_history, format_message,
    format_saved, format_session_state, format_units,
};
use crate::core::TemperatureUnit;
use crate::error::{CommandError, Error, Result};
use crate::session::Session;
use std::io::{BufRead, Write};

/// Help text listing the session commands.
pub const HELP: &str = "\
Commands:
  <value> [from] [to]   set the temperature (and optionally the units)
  input <text>          set the input text verbatim
  from <unit>           set the source unit
  to <unit>             set the destination unit
  swap                  exchange source and destination units
  places <0-4>          set the number of decimal places
  show                  show the current conversion
  save                  save the current conversion to history
  history               list saved conversions, newest first
  clear                 clear the history
  units                 list the supported units
  help                  show this help
  quit | exit           leave the session
";

/// What the driver should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print the text (possibly empty) and read the next line.
    Continue(String),
    /// Stop the session.
    Quit,
}

/// Runs a session until `quit` or end of input.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
/// Command errors are reported on `output` and do not end the session.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        match execute_line(session, &line, format) {
            Ok(LineOutcome::Continue(text)) => output.write_all(text.as_bytes())?,
            Ok(LineOutcome::Quit) => break,
            Err(err) => {
                // A pending session alert replaces the generic wording, and
                // showing it dismisses it.
                let mut text = match session.error_message() {
                    Some(alert) => format_error_with_message(&err, alert, format),
                    None => format_error(&err, format),
                };
                session.dismiss_error();
                text.push('\n');
                if format == OutputFormat::Text {
                    text.insert_str(0, "Error: ");
                }
                output.write_all(text.as_bytes())?;
            }
        }
        output.flush()?;
    }
    tracing::debug!(saved = session.history().len(), "session ended");
    Ok(())
}

/// Executes a single session command.
///
/// # Errors
///
/// Returns an error for unknown commands, bad arguments, or a failed save.
/// A failed save leaves the session's error message set until it is shown.
pub fn execute_line(
    session: &mut Session,
    line: &str,
    format: OutputFormat,
) -> Result<LineOutcome> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Ok(LineOutcome::Continue(String::new()));
    };
    let args: Vec<&str> = tokens.collect();
    tracing::trace!(command = head, ?args, "session command");

    let text = match head.to_lowercase().as_str() {
        "quit" | "exit" => return Ok(LineOutcome::Quit),
        "help" | "?" => HELP.to_string(),
        "units" => format_units(format),
        "show" => format_session_state(session, format),
        "history" => format_history(session.history(), format),
        "clear" => {
            session.clear_history();
            format_message("History cleared", format)
        }
        "swap" => {
            session.swap_units();
            format_session_state(session, format)
        }
        "from" => {
            session.set_from_unit(single_unit(&args, "unit")?);
            format_session_state(session, format)
        }
        "to" => {
            session.set_to_unit(single_unit(&args, "unit")?);
            format_session_state(session, format)
        }
        "places" => {
            let places = single_arg(&args, "places")?;
            let places = places
                .parse::<usize>()
                .map_err(|_| CommandError::InvalidArgument(format!("places {places}")))?;
            session.set_decimal_places(places)?;
            format_session_state(session, format)
        }
        "input" => {
            let rest = line.trim_start();
            let text = rest[head.len()..].trim();
            session.set_input(text);
            format_session_state(session, format)
        }
        "save" => format_saved(&session.save_conversion()?, format),
        _ if looks_numeric(head) => {
            let (from, to) = match args.as_slice() {
                [] => (None, None),
                [from] => (Some(parse_unit(from)?), None),
                [from, to] => (Some(parse_unit(from)?), Some(parse_unit(to)?)),
                [_, _, extra, ..] => {
                    return Err(CommandError::InvalidArgument((*extra).to_string()).into());
                }
            };
            session.set_input(head);
            if let Some(from) = from {
                session.set_from_unit(from);
            }
            if let Some(to) = to {
                session.set_to_unit(to);
            }
            format_session_state(session, format)
        }
        _ => return Err(CommandError::UnknownCommand(head.to_string()).into()),
    };
    Ok(LineOutcome::Continue(text))
}

fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
}

fn single_arg<'a>(args: &[&'a str], name: &str) -> Result<&'a str> {
    match args {
        [] => Err(CommandError::MissingArgument(name.to_string()).into()),
        [arg] => Ok(*arg),
        [_, extra, ..] => Err(CommandError::InvalidArgument((*extra).to_string()).into()),
    }
}

fn single_unit(args: &[&str], name: &str) -> Result<TemperatureUnit> {
    parse_unit(single_arg(args, name)?)
}

fn parse_unit(s: &str) -> Result<TemperatureUnit> {
    s.parse::<TemperatureUnit>().map_err(Error::from)
}
