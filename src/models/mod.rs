//! Data models shared across the application.

pub mod snapshot;

pub use snapshot::{parse_numeric_prefix, StatsSnapshot};
