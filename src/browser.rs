//! Modal directory browser.
//!
//! The state machine in `browser::model` knows nothing about the terminal;
//! [`run_modal`] wraps it in a blocking draw/read loop that always hands
//! control back to the caller, whether the user picked something or not.

mod model;
mod view;

use std::io::Stdout;
use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

pub use model::{BrowseOptions, BrowserAction, DirBrowser, Entry, EntryKind, Transition, list_entries};
pub(crate) use view::window_start;

/// Map a key press to a browser action.
pub fn action_for(key: &KeyEvent) -> Option<BrowserAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(BrowserAction::Cancel)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(BrowserAction::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(BrowserAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(BrowserAction::Down),
        KeyCode::Backspace => Some(BrowserAction::Parent),
        KeyCode::Enter => Some(BrowserAction::Open),
        KeyCode::Char(' ') => Some(BrowserAction::Choose),
        _ => None,
    }
}

/// Run the browser until the user chooses a path or cancels.
///
/// Blocks on key reads; the caller's tick loop is suspended meanwhile.
pub fn run_modal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    start: &Path,
    options: BrowseOptions,
) -> std::io::Result<Option<PathBuf>> {
    let mut browser = DirBrowser::new(start, options);
    tracing::debug!("browser opened at {:?}", browser.current_dir());

    loop {
        terminal.draw(|f| view::draw(f, &browser))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = action_for(&key) else {
            continue;
        };

        match browser.apply(action) {
            Transition::Continue => {}
            Transition::Chosen(path) => {
                tracing::info!("browser chose {:?}", path);
                return Ok(Some(path));
            }
            Transition::Cancelled => return Ok(None),
        }
    }
}
