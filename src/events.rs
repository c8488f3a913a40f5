//! Event handling for user input and keyboard navigation.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::App;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events with a timeout, so the replay keeps advancing while
/// no key is pressed.
///
/// # Errors
///
/// This function may return errors from polling or reading terminal events.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Applies a single key press.
///
/// `q` and `Esc` quit, `r` restarts the replay from the first step and the space bar freezes or
/// resumes it.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('r') => app.animation_manager.reset(),
        KeyCode::Char(' ') => app.paused = !app.paused,
        _ => {}
    }
}
