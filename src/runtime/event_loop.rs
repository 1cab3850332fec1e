use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::PlaybackEngine;
use crate::config::{self, LastDir};
use crate::input::{self, Command};
use crate::library;
use crate::runtime::session::{Flow, Session};
use crate::runtime::startup;
use crate::ui;

/// Main terminal event loop: polls input, ticks the session, redraws and
/// sleeps out the rest of the tick. Returns `Ok(())` when quit is requested.
pub fn run<E: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session<E>,
    settings: &config::Settings,
    last_dir: &LastDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    loop {
        let started = Instant::now();
        let command = poll_command()?;

        match session.tick(started, command) {
            Flow::Quit => return Ok(()),
            Flow::Browse => browse(terminal, session, settings, last_dir)?,
            Flow::Continue => {}
        }

        terminal.draw(|f| ui::draw(f, &session.view()))?;

        if let Some(rest) = tick.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

/// At most one key, without waiting.
fn poll_command() -> std::io::Result<Option<Command>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(input::command_for(&key)),
        _ => Ok(None),
    }
}

fn browse<E: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    session: &mut Session<E>,
    settings: &config::Settings,
    last_dir: &LastDir,
) -> std::io::Result<()> {
    if let Some(path) = startup::choose(terminal, last_dir, &settings.browser)? {
        let catalog = library::build(std::slice::from_ref(&path), &settings.library, session.tags());
        session.replace_catalog(catalog, Instant::now());
    }
    session.leave_modal(Instant::now());
    terminal.clear()
}
