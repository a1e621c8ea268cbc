//! CLI layer for tempconv.
//!
//! Provides the command-line interface using clap: one-shot conversions,
//! a unit listing, and an interactive session driven from stdin.

pub mod commands;
pub mod interactive;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
