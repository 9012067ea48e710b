//! Terminal front end: event loop, input mapping and drawing.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, Control};
pub use input::{Command, Focus, command_for, move_cursor};
pub use layout::ScreenLayout;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::RewindConfig;

/// Runs the game in the terminal until the user quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal
/// on exit even when the loop fails.
#[instrument(skip_all)]
pub fn run_tui(config: &RewindConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = RawModeGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.initial_sort());
    let tick = Duration::from_millis(*config.tick_ms());
    let res = run_app(&mut terminal, app, tick);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Leaves raw mode and the alternate screen when dropped.
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Draw, wait for an event, apply it; repeat until quit.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick: Duration) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, &app);
        })?;
        app.resize(area);

        if event::poll(tick)? && app.handle_event(event::read()?) == Control::Quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_drop_without_raw_mode_is_harmless() {
        // Never entered raw mode: restoring must neither fail nor panic.
        drop(RawModeGuard);
        assert!(!crossterm::terminal::is_raw_mode_enabled().unwrap_or(false));
    }
}
