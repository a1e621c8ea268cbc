//! Core domain models for tempconv.
//!
//! Temperature units, saved conversion records, and the bounded history
//! that holds them. These are pure in-memory types with no I/O.

pub mod history;
pub mod record;
pub mod unit;

pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryBuffer, SubscriptionId};
pub use record::ConversionRecord;
pub use unit::TemperatureUnit;
