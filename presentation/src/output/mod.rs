//! Output formatting

pub mod console;

/// Turn off ANSI colors when the config disables them.
pub fn configure_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
