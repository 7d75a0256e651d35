//! UI rendering.
//!
//! Entry point is [`render`], which lays the screen out as header, metric
//! rows, footer and delegates to the dashboard components.

pub mod dashboard;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

/// Render the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height < 4 {
        // Not enough room for anything but the rows
        dashboard::rows::render(frame, area, &app.rows);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Metric rows
            Constraint::Length(1), // Footer
        ])
        .split(area);

    dashboard::header::render(frame, chunks[0], app);
    dashboard::rows::render(frame, chunks[1], &app.rows);
    dashboard::footer::render(frame, chunks[2], app);
}
