//! View-only state for the dashboard rows.
//!
//! These types can be rendered by UI components without access to the App,
//! and mutated by snapshot application without knowledge of the UI.

pub mod rows;

pub use rows::{RowCell, RowId, StatRow};
