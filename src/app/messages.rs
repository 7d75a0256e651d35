//! AppMessage enum for async communication within the application.

use crate::models::StatsSnapshot;

/// Messages received from async operations (poll cycles).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A poll cycle completed and produced a snapshot
    Snapshot(StatsSnapshot),
    /// A poll cycle failed (transport or decode); carries the rendered error
    PollFailed(String),
}
