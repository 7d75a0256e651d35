//! Dashboard footer component
//!
//! One dim line: key hints, poll cadence, last update, and failure count
//! when any cycle has failed.

use chrono::{DateTime, Utc};
use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::theme;

/// Render the footer line.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let paragraph = Paragraph::new(Span::styled(
        footer_text(app, Utc::now()),
        Style::default().fg(theme::COLOR_DIM),
    ));
    frame.render_widget(paragraph, area);
}

/// Build the footer text. Split out for testing.
pub fn footer_text(app: &App, now: DateTime<Utc>) -> String {
    let mut parts = vec!["q quit".to_string()];

    match app.last_updated {
        Some(at) => {
            let secs = (now - at).num_seconds().max(0);
            parts.push(format!("updated {}s ago", secs));
        }
        None => parts.push("waiting for first update".to_string()),
    }

    if app.poll_failures > 0 {
        parts.push(format!("{} failed polls", app.poll_failures));
    }
    if let Some(error) = &app.last_error {
        parts.push(error.clone());
    }

    parts.join(" \u{00B7} ")
}
