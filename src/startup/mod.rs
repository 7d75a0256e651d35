//! Startup configuration.

pub mod config;

pub use config::{Config, DEFAULT_ENDPOINT, DEFAULT_LISTEN, POLL_INTERVAL_MS, STATS_PATH};
