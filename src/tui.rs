//! Terminal setup and teardown.
//!
//! Raw-mode/alternate-screen plumbing shared by the splash and the demo
//! loop. A panic hook restores the terminal before the panic is reported,
//! so a crash never leaves the shell in raw mode.

use std::io::{self, Stdout};

use crossterm::tty::IsTty;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

/// Terminal type used throughout the crate.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Returns `true` when stdout is an interactive terminal.
///
/// Splash and demo screens are skipped in non-interactive environments
/// (pipes, CI).
#[must_use]
pub fn is_interactive() -> bool {
    io::stdout().is_tty()
}

/// Enters raw mode and the alternate screen, returning the terminal.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    set_panic_hook();
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

/// Leaves the alternate screen and disables raw mode.
///
/// # Errors
///
/// Returns an error if the terminal cannot be restored.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}
