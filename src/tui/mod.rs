//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, status_line};
pub use input::{Command, command_for, move_cursor};

use crate::config::Config;
use crate::cue::{CueSink, sink_for};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the game in the terminal until the player quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all, fields(title = %config.ui().title()))]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = restore_on_err(enter_screen, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let mut app = App::new(
        config.ui().title().clone(),
        sink_for(config.sound()),
        config.sound().quit_linger(),
    );

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Switches to the alternate screen and builds the ratatui terminal.
fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

/// Runs `setup`, calling `restore` before returning if it fails.
fn restore_on_err<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    let res = setup();
    if let Err(err) = &res {
        error!(error = ?err, "Terminal setup failed, restoring");
        restore();
    }
    res
}

/// Draw, wait for a key, apply it. One command at a time.
fn run_loop<S: CueSink>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = command_for(key)
        {
            app.handle(command);
        }
    }
    Ok(())
}
