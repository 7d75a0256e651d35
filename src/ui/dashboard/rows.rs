//! Metric row rendering.
//!
//! Each [`StatRow`] renders into its own bordered block: text cells as a
//! plain readout, gauge cells as a ratatui `Gauge` whose fill width comes
//! from the row's percent and whose label is the formatted readout.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::ui::theme;
use crate::view_state::{RowCell, StatRow};

/// Terminal rows each metric block occupies (content + borders).
pub const ROW_HEIGHT: u16 = 3;

/// Render the metric rows top to bottom.
///
/// Rows that do not fit the area are dropped from the bottom rather than
/// squeezed.
pub fn render(frame: &mut Frame, area: Rect, rows: &[StatRow]) {
    if area.height < ROW_HEIGHT || rows.is_empty() {
        return;
    }

    let visible = (area.height / ROW_HEIGHT).min(rows.len() as u16);
    let constraints: Vec<Constraint> = (0..visible).map(|_| Constraint::Length(ROW_HEIGHT)).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, chunk) in rows.iter().zip(chunks.iter()) {
        render_row(frame, *chunk, row);
    }
}

/// Render one metric row into its block.
fn render_row(frame: &mut Frame, area: Rect, row: &StatRow) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title(format!(" {} ", row.label.trim_end_matches(':')));

    match &row.cell {
        RowCell::Text { value } => {
            let text = if value.is_empty() { "\u{2014}" } else { value };
            let paragraph = Paragraph::new(text.to_string())
                .style(Style::default().fg(theme::COLOR_ACCENT))
                .block(block);
            frame.render_widget(paragraph, area);
        }
        RowCell::Gauge { percent, text } => {
            let ratio = bar_ratio(*percent);
            let label = if text.is_empty() {
                "\u{2014}".to_string()
            } else {
                text.clone()
            };
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(theme::gauge_color(percent.unwrap_or(0.0))))
                .ratio(ratio)
                .label(label);
            frame.render_widget(gauge, area);
        }
    }
}

/// Convert a row percent to a gauge ratio, clamped to [0, 1].
///
/// The stored percent is kept faithful to the payload; clamping happens
/// only here, at render time.
pub fn bar_ratio(percent: Option<f64>) -> f64 {
    (percent.unwrap_or(0.0) / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_ratio_in_range() {
        assert_eq!(bar_ratio(Some(0.0)), 0.0);
        assert_eq!(bar_ratio(Some(12.0)), 0.12);
        assert_eq!(bar_ratio(Some(60.0)), 0.6);
        assert_eq!(bar_ratio(Some(100.0)), 1.0);
    }

    #[test]
    fn test_bar_ratio_clamps_out_of_range() {
        assert_eq!(bar_ratio(Some(150.0)), 1.0);
        assert_eq!(bar_ratio(Some(-10.0)), 0.0);
    }

    #[test]
    fn test_bar_ratio_unset_is_empty() {
        assert_eq!(bar_ratio(None), 0.0);
    }
}
