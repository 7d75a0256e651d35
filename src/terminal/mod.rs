//! Terminal lifecycle management.

pub mod panic;
pub mod setup;

pub use panic::install_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode};
