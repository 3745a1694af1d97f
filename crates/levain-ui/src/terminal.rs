//! Terminal detection.

use std::env;

/// Returns `true` if stdout is connected to a terminal.
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Whether ANSI colour should be used when nothing forces a choice.
///
/// - `NO_COLOR` (any value) disables colour
/// - `CLICOLOR=0` or `TERM=dumb` disables colour
/// - `CLICOLOR_FORCE` (any value) enables colour off a TTY
/// - otherwise colour follows TTY detection
pub fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }
    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }
    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }
    is_tty()
}
