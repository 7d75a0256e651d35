//! Color theme constants for the dashboard UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Healthy/connected indicator - green
pub const COLOR_OK: Color = Color::LightGreen;

/// Degraded state - yellow
pub const COLOR_WARN: Color = Color::Yellow;

/// Failure state - red
pub const COLOR_ERROR: Color = Color::Red;

/// Gauge fill for a usage percentage.
///
/// Green up to 70%, yellow up to 90%, red above.
pub fn gauge_color(percent: f64) -> Color {
    if percent > 90.0 {
        COLOR_ERROR
    } else if percent > 70.0 {
        COLOR_WARN
    } else {
        COLOR_OK
    }
}
