//! # tempconv
//!
//! Temperature conversion between Celsius, Fahrenheit and Kelvin.
//!
//! Conversions route through Celsius as the pivot unit. Results are rendered
//! as fixed-point text, and saved conversions are kept in a bounded,
//! newest-first history.
//!
//! ## Features
//!
//! - **Converter**: [`convert`] and [`format_temperature`], plus the
//!   [`TemperatureConvertible`] trait for front ends
//! - **History**: [`HistoryBuffer`], capped at ten records by default, with
//!   synchronous change notification
//! - **Session**: [`Session`], the state behind an interactive front end
//! - **CLI**: the `tempconv` binary

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod cli;
pub mod converter;
pub mod core;
pub mod error;
pub mod session;

// Re-export commonly used types at crate root
pub use error::{CommandError, ConversionError, Error, Result};

// Re-export core domain types
pub use crate::core::{
    ConversionRecord, DEFAULT_HISTORY_CAPACITY, HistoryBuffer, SubscriptionId, TemperatureUnit,
};

// Re-export converter functions
pub use converter::{
    Converter, TemperatureConvertible, convert, format_temperature, is_valid_temperature,
    parse_temperature,
};

// Re-export session types
pub use session::{DEFAULT_DECIMAL_PLACES, InputState, MAX_DECIMAL_PLACES, Session, SessionConfig};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
