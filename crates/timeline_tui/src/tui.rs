//! Terminal setup and the event loop.

use std::io;
use std::panic;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::app::{App, AppAction};
use crate::config::TuiConfig;
use crate::logging::init_file_logging;
use crate::ui;

/// Raw mode and the alternate screen, restored on drop.
///
/// Dropping also runs while a panic unwinds, so every exit from
/// [`run_tui`] leaves the terminal usable.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on a failure drops the guard and undoes raw mode.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal();
    }
}

/// Leaves raw mode and the alternate screen. Each step runs even if the
/// other fails.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        error!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %err, "Failed to leave alternate screen");
    }
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on success, on error and on panic.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    init_file_logging(config)?;
    info!(sort_order = %config.sort_order(), "Starting tic-tac-toe TUI");

    // Restore before the panic message is printed, or it lands on the
    // alternate screen and disappears.
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.sort_order());
    let res = run_app(&mut terminal, &mut app, poll_event);

    drop(terminal);
    drop(guard);
    // Back to the default hook; the terminal is already restored.
    drop(panic::take_hook());

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len() - 1, "TUI closed");
    res
}

fn poll_event() -> io::Result<Option<Event>> {
    if event::poll(Duration::from_millis(100))? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Draws and dispatches key presses until the app quits or `next_event`
/// fails. `Ok(None)` from `next_event` means no input yet.
#[instrument(skip_all)]
fn run_app<B, F>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: F) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    F: FnMut() -> io::Result<Option<Event>>,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Some(Event::Key(key)) = next_event()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                return Ok(());
            }
        }
    }
}
