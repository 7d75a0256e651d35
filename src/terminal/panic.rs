//! Panic hook that restores the terminal before reporting.
//!
//! Without this a panic inside the draw loop leaves the user's shell in
//! raw mode on the alternate screen.

use std::io;

use super::setup::leave_tui_mode;

/// Install a panic hook that restores the terminal, then delegates to the
/// previously installed hook.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode(&mut io::stdout());
        original_hook(panic_info);
    }));
}
