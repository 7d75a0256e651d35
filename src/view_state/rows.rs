//! Metric rows and their writable cells.
//!
//! A row is a display target owned by the application: it exists before the
//! poller runs and persists for the application's lifetime. Snapshot
//! application locates rows by their stable [`RowId`] — never by the display
//! label, which is free to change — and mutates only the cell contents.

use crate::error::RenderError;

/// Stable identifier for a metric row.
///
/// Dispatch keys on this id rather than on the rendered label text, so
/// relabeling a row (or localizing it) cannot break the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    /// CPU temperature, rendered as plain text.
    CpuTemp,
    /// CPU usage, rendered as a gauge.
    CpuUsage,
    /// Memory usage, rendered as a gauge.
    Memory,
    /// A row this component does not understand. Snapshot application
    /// leaves these untouched; they are the extension point for rows
    /// driven by other code.
    Custom(String),
}

/// The writable portion of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowCell {
    /// A single text readout.
    Text {
        /// Current display text. Empty until the first snapshot lands.
        value: String,
    },
    /// A fractional-width bar plus a formatted text readout.
    Gauge {
        /// Bar width in percent. `None` until a snapshot with a parseable
        /// value lands; kept at its previous value when a later snapshot
        /// fails to parse.
        percent: Option<f64>,
        /// Formatted readout shown on the bar.
        text: String,
    },
}

/// One metric row: a stable id, a display label, and a writable cell.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    /// Stable identifier used for dispatch.
    pub id: RowId,
    /// Display label, e.g. `"CPU Temperature:"`. Display-only.
    pub label: String,
    /// The writable cell.
    pub cell: RowCell,
}

impl StatRow {
    /// Create a text row.
    pub fn text(id: RowId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            cell: RowCell::Text {
                value: String::new(),
            },
        }
    }

    /// Create a gauge row.
    pub fn gauge(id: RowId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            cell: RowCell::Gauge {
                percent: None,
                text: String::new(),
            },
        }
    }

    /// Write a text value into the row's text cell.
    pub fn set_text(&mut self, value: &str) -> Result<(), RenderError> {
        match &mut self.cell {
            RowCell::Text { value: cell } => {
                *cell = value.to_string();
                Ok(())
            }
            RowCell::Gauge { .. } => Err(RenderError::CellMismatch {
                row: self.id.clone(),
            }),
        }
    }

    /// Write a bar width and readout into the row's gauge cell.
    pub fn set_gauge(&mut self, percent: f64, text: &str) -> Result<(), RenderError> {
        match &mut self.cell {
            RowCell::Gauge {
                percent: cell_pct,
                text: cell_text,
            } => {
                *cell_pct = Some(percent);
                *cell_text = text.to_string();
                Ok(())
            }
            RowCell::Text { .. } => Err(RenderError::CellMismatch {
                row: self.id.clone(),
            }),
        }
    }

    /// Write only the readout of a gauge cell, leaving the bar width at its
    /// previous value. Used when the driving field has no numeric prefix.
    pub fn set_gauge_text(&mut self, text: &str) -> Result<(), RenderError> {
        match &mut self.cell {
            RowCell::Gauge {
                text: cell_text, ..
            } => {
                *cell_text = text.to_string();
                Ok(())
            }
            RowCell::Text { .. } => Err(RenderError::CellMismatch {
                row: self.id.clone(),
            }),
        }
    }
}
