//! Dashboard header component
//!
//! Renders the connection indicator, title, and producer identity
//! (hostname / platform) when the endpoint reports them.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme;

/// Render the dashboard header.
///
/// Layout: `● pidash · raspberrypi` on the first line, the platform
/// description dimmed on the second when known.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let (dot, dot_color) = if app.connected {
        ("\u{25CF}", theme::COLOR_OK)
    } else {
        ("\u{25CB}", theme::COLOR_ERROR)
    };

    let mut title = vec![
        Span::styled(dot, Style::default().fg(dot_color)),
        Span::raw(" "),
        Span::styled("pidash", Style::default().fg(theme::COLOR_ACCENT)),
    ];
    if let Some(hostname) = &app.hostname {
        title.push(Span::styled(
            format!(" \u{00B7} {}", hostname),
            Style::default().fg(theme::COLOR_DIM),
        ));
    }

    let mut lines = vec![Line::from(title)];
    if area.height >= 2 {
        if let Some(platform) = &app.platform {
            lines.push(Line::from(Span::styled(
                platform.clone(),
                Style::default().fg(theme::COLOR_DIM),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}
