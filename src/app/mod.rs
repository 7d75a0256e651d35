//! Application state and snapshot application.
//!
//! The app owns the metric rows. Poll results arrive as [`AppMessage`]s on
//! an mpsc channel and are applied here, which makes the row state
//! single-writer: however many poll cycles are in flight, their results are
//! serialized through this channel and the latest arrival wins.

pub mod messages;

pub use messages::AppMessage;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::warn;

use crate::error::RenderError;
use crate::models::{parse_numeric_prefix, StatsSnapshot};
use crate::view_state::{RowId, StatRow};

/// Project a snapshot onto the rows currently present.
///
/// Dispatches on each row's [`RowId`]:
/// - `CpuTemp` - text cell gets `cpu_temp` verbatim.
/// - `CpuUsage` - gauge width from `cpu_usage`'s numeric prefix, readout
///   is `cpu_usage` verbatim.
/// - `Memory` - gauge width from `memory_percent`'s numeric prefix,
///   readout is `memory_used + " / " + memory_total`.
/// - anything else - no-op. Rows this component does not understand are
///   left alone by design.
///
/// Failures are scoped per row: the returned errors identify rows that
/// could not be updated; every other row has been.
pub fn apply_snapshot(rows: &mut [StatRow], snapshot: &StatsSnapshot) -> Vec<RenderError> {
    let mut errors = Vec::new();

    for row in rows.iter_mut() {
        let result = match &row.id {
            RowId::CpuTemp => row.set_text(&snapshot.cpu_temp),
            RowId::CpuUsage => update_gauge(row, &snapshot.cpu_usage, &snapshot.cpu_usage),
            RowId::Memory => {
                let readout = snapshot.memory_display();
                update_gauge(row, &snapshot.memory_percent, &readout)
            }
            // Unrecognized rows are ignored, not an error
            RowId::Custom(_) => Ok(()),
        };
        if let Err(e) = result {
            errors.push(e);
        }
    }

    errors
}

/// Update a gauge row from a percentage label.
///
/// When the label has no numeric prefix the readout still updates (best
/// effort, visually degraded) and the row reports an error; the bar keeps
/// its previous width.
fn update_gauge(row: &mut StatRow, percent_label: &str, readout: &str) -> Result<(), RenderError> {
    match parse_numeric_prefix(percent_label) {
        Some(percent) => row.set_gauge(percent, readout),
        None => {
            row.set_gauge_text(readout)?;
            Err(RenderError::UnparseableValue {
                row: row.id.clone(),
                value: percent_label.to_string(),
            })
        }
    }
}

/// Application state for the dashboard.
pub struct App {
    /// Metric rows, in display order. Created once at startup; the poller
    /// only ever mutates their cells.
    pub rows: Vec<StatRow>,
    /// Producer hostname from the latest snapshot, if it sends one.
    pub hostname: Option<String>,
    /// Producer platform description from the latest snapshot.
    pub platform: Option<String>,
    /// When the last successful cycle landed.
    pub last_updated: Option<DateTime<Utc>>,
    /// Whether the most recent cycle succeeded.
    pub connected: bool,
    /// Count of failed cycles since startup.
    pub poll_failures: u64,
    /// Rendered error of the most recent failed cycle.
    pub last_error: Option<String>,
    /// Redraw flag for the render loop.
    pub needs_redraw: bool,
    /// Quit flag for the run loop.
    pub should_quit: bool,
    /// Sender handed to async tasks.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver; taken by the run loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the app with the standard three metric rows.
    pub fn new() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            rows: Self::default_rows(),
            hostname: None,
            platform: None,
            last_updated: None,
            connected: false,
            poll_failures: 0,
            last_error: None,
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// The rows the dashboard ships with.
    pub fn default_rows() -> Vec<StatRow> {
        vec![
            StatRow::text(RowId::CpuTemp, "CPU Temperature:"),
            StatRow::gauge(RowId::CpuUsage, "CPU Usage:"),
            StatRow::gauge(RowId::Memory, "Memory:"),
        ]
    }

    /// Look up a row by id.
    pub fn row(&self, id: &RowId) -> Option<&StatRow> {
        self.rows.iter().find(|row| &row.id == id)
    }

    /// Handle a message from an async task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Snapshot(snapshot) => {
                if snapshot.hostname.is_some() {
                    self.hostname = snapshot.hostname.clone();
                }
                if snapshot.platform.is_some() {
                    self.platform = snapshot.platform.clone();
                }

                for error in apply_snapshot(&mut self.rows, &snapshot) {
                    warn!(row = ?error.row(), "row update failed: {}", error);
                }

                self.last_updated = Some(Utc::now());
                self.connected = true;
                self.last_error = None;
                self.mark_dirty();
            }
            AppMessage::PollFailed(error) => {
                self.poll_failures += 1;
                self.connected = false;
                self.last_error = Some(error);
                self.mark_dirty();
            }
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Ask the run loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::RowCell;

    fn sample_snapshot() -> StatsSnapshot {
        StatsSnapshot {
            cpu_temp: "45°C".to_string(),
            cpu_usage: "12%".to_string(),
            memory_percent: "60%".to_string(),
            memory_used: "2.1GB".to_string(),
            memory_total: "8GB".to_string(),
            hostname: None,
            platform: None,
            architecture: None,
        }
    }

    fn gauge_of(row: &StatRow) -> (Option<f64>, &str) {
        match &row.cell {
            RowCell::Gauge { percent, text } => (*percent, text.as_str()),
            RowCell::Text { .. } => panic!("expected gauge cell on {:?}", row.id),
        }
    }

    fn text_of(row: &StatRow) -> &str {
        match &row.cell {
            RowCell::Text { value } => value.as_str(),
            RowCell::Gauge { .. } => panic!("expected text cell on {:?}", row.id),
        }
    }

    #[test]
    fn test_apply_snapshot_scenario() {
        // The end-to-end mapping: 45°C / 12% / 60% / 2.1GB / 8GB
        let mut rows = App::default_rows();
        let errors = apply_snapshot(&mut rows, &sample_snapshot());
        assert!(errors.is_empty());

        assert_eq!(text_of(&rows[0]), "45°C");
        assert_eq!(gauge_of(&rows[1]), (Some(12.0), "12%"));
        assert_eq!(gauge_of(&rows[2]), (Some(60.0), "2.1GB / 8GB"));
    }

    #[test]
    fn test_apply_snapshot_is_idempotent() {
        let mut once = App::default_rows();
        let mut twice = App::default_rows();
        let snapshot = sample_snapshot();

        apply_snapshot(&mut once, &snapshot);
        apply_snapshot(&mut twice, &snapshot);
        apply_snapshot(&mut twice, &snapshot);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_snapshot_ignores_custom_rows() {
        let mut rows = App::default_rows();
        rows.push(StatRow::gauge(
            RowId::Custom("disk".to_string()),
            "Disk:",
        ));
        let before = rows[3].clone();

        let errors = apply_snapshot(&mut rows, &sample_snapshot());
        assert!(errors.is_empty());
        assert_eq!(rows[3], before);
    }

    #[test]
    fn test_apply_snapshot_bad_percent_degrades_one_row() {
        let mut rows = App::default_rows();

        // Seed a prior width, then feed an unparseable CPU percentage
        apply_snapshot(&mut rows, &sample_snapshot());
        let mut snapshot = sample_snapshot();
        snapshot.cpu_usage = "N/A".to_string();

        let errors = apply_snapshot(&mut rows, &snapshot);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].row(), &RowId::CpuUsage);

        // Degraded row: readout updated, bar width retained
        assert_eq!(gauge_of(&rows[1]), (Some(12.0), "N/A"));
        // Other rows still updated
        assert_eq!(gauge_of(&rows[2]), (Some(60.0), "2.1GB / 8GB"));
    }

    #[test]
    fn test_apply_snapshot_live_row_enumeration() {
        // Rows removed between cycles are naturally dropped from updates
        let mut rows = App::default_rows();
        rows.remove(0); // No CpuTemp row anymore

        let errors = apply_snapshot(&mut rows, &sample_snapshot());
        assert!(errors.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(gauge_of(&rows[0]), (Some(12.0), "12%"));
    }

    #[test]
    fn test_handle_snapshot_message() {
        let mut app = App::new();
        app.handle_message(AppMessage::Snapshot(sample_snapshot()));

        assert!(app.connected);
        assert!(app.last_updated.is_some());
        assert!(app.last_error.is_none());
        assert_eq!(app.poll_failures, 0);
        assert!(app.needs_redraw);
        assert_eq!(text_of(app.row(&RowId::CpuTemp).unwrap()), "45°C");
    }

    #[test]
    fn test_handle_poll_failed_leaves_rows_untouched() {
        let mut app = App::new();
        app.handle_message(AppMessage::Snapshot(sample_snapshot()));
        let rows_before = app.rows.clone();

        app.handle_message(AppMessage::PollFailed("transport error".to_string()));

        assert_eq!(app.rows, rows_before);
        assert!(!app.connected);
        assert_eq!(app.poll_failures, 1);
        assert_eq!(app.last_error.as_deref(), Some("transport error"));
    }

    #[test]
    fn test_handle_snapshot_adopts_hostname() {
        let mut app = App::new();
        let mut snapshot = sample_snapshot();
        snapshot.hostname = Some("raspberrypi".to_string());

        app.handle_message(AppMessage::Snapshot(snapshot));
        assert_eq!(app.hostname.as_deref(), Some("raspberrypi"));

        // A later snapshot without a hostname keeps the known one
        app.handle_message(AppMessage::Snapshot(sample_snapshot()));
        assert_eq!(app.hostname.as_deref(), Some("raspberrypi"));
    }

    #[test]
    fn test_last_write_wins() {
        // Two overlapping cycles resolve in arrival order
        let mut app = App::new();
        let slow = sample_snapshot();
        let mut fast = sample_snapshot();
        fast.cpu_usage = "90%".to_string();

        app.handle_message(AppMessage::Snapshot(fast));
        app.handle_message(AppMessage::Snapshot(slow));

        let (percent, text) = gauge_of(app.row(&RowId::CpuUsage).unwrap());
        assert_eq!(percent, Some(12.0));
        assert_eq!(text, "12%");
    }

    #[test]
    fn test_quit_and_dirty_flags() {
        let mut app = App::new();
        app.needs_redraw = false;
        app.mark_dirty();
        assert!(app.needs_redraw);

        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
