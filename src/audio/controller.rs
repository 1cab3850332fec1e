//! The command surface between the session and the engine.
//!
//! Each operation updates the session state to match what it asked the engine
//! to do. Engine failures are returned untouched so the loop can report them;
//! in that case the session keeps its previous track and position.

use std::time::Duration;

use crate::app::App;
use crate::library::{Catalog, Track};

use super::types::{EngineError, EngineEvent, PlaybackEngine};

/// Picks a track index in `0..len` for shuffle. `len` is never zero.
pub type ShufflePicker = fn(usize) -> usize;

fn random_index(len: usize) -> usize {
    rand::random_range(0..len)
}

pub struct Controller<E: PlaybackEngine> {
    engine: E,
    pick: ShufflePicker,
}

impl<E: PlaybackEngine> Controller<E> {
    pub fn new(engine: E) -> Self {
        Self::with_picker(engine, random_index)
    }

    pub fn with_picker(engine: E, pick: ShufflePicker) -> Self {
        Self { engine, pick }
    }

    #[cfg(test)]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn is_busy(&self) -> bool {
        self.engine.is_busy()
    }

    pub fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.engine.poll_events()
    }

    /// Start `track` from the top.
    pub fn play(&mut self, app: &mut App, track: &Track) -> Result<(), EngineError> {
        self.engine.load_and_play(&track.path, Duration::ZERO)?;
        app.reset_position();
        Ok(())
    }

    /// Play catalog entry `index` and point both the cursor and the
    /// now-playing marker at it.
    pub fn play_index(
        &mut self,
        app: &mut App,
        catalog: &Catalog,
        index: usize,
    ) -> Result<(), EngineError> {
        let Some(track) = catalog.get(index) else {
            return Ok(());
        };
        self.play(app, track)?;
        app.current_index = index;
        app.selection_index = index;
        Ok(())
    }

    pub fn play_selected(&mut self, app: &mut App, catalog: &Catalog) -> Result<(), EngineError> {
        self.play_index(app, catalog, app.selection_index)
    }

    pub fn next(&mut self, app: &mut App, catalog: &Catalog) -> Result<(), EngineError> {
        if catalog.is_empty() {
            return Ok(());
        }
        let next = (app.current_index + 1) % catalog.len();
        self.play_index(app, catalog, next)
    }

    pub fn previous(&mut self, app: &mut App, catalog: &Catalog) -> Result<(), EngineError> {
        if catalog.is_empty() {
            return Ok(());
        }
        let len = catalog.len();
        let prev = (app.current_index % len + len - 1) % len;
        self.play_index(app, catalog, prev)
    }

    pub fn pause(&mut self, app: &mut App) {
        self.engine.pause();
        app.paused = true;
    }

    pub fn resume(&mut self, app: &mut App) {
        self.engine.unpause();
        app.paused = false;
    }

    pub fn toggle_pause(&mut self, app: &mut App, catalog: &Catalog) {
        if catalog.is_empty() {
            return;
        }
        if app.paused {
            self.resume(app);
        } else {
            self.pause(app);
        }
    }

    pub fn stop(&mut self, app: &mut App) {
        self.engine.stop();
        app.reset_position();
    }

    /// Restart the current track `delta_secs` away from the tracked position.
    ///
    /// The engine has no in-place seek, so this reloads from an offset. The
    /// target is never negative and is not clamped to the track length; going
    /// past the end lets the track finish normally.
    pub fn seek(
        &mut self,
        app: &mut App,
        catalog: &Catalog,
        delta_secs: i64,
    ) -> Result<(), EngineError> {
        let Some(track) = catalog.get(app.current_index) else {
            return Ok(());
        };

        let step = Duration::from_secs(delta_secs.unsigned_abs());
        let target = if delta_secs < 0 {
            app.elapsed.saturating_sub(step)
        } else {
            app.elapsed + step
        };

        self.engine.load_and_play(&track.path, target)?;
        app.elapsed = target;
        // Restarting from an offset always resumes.
        if app.paused {
            self.engine.pause();
        }
        Ok(())
    }

    pub fn set_volume(&mut self, app: &mut App, volume: f32) {
        let volume = if volume.is_nan() {
            app.volume
        } else {
            volume.clamp(0.0, 1.0)
        };
        app.volume = volume;
        self.engine.set_volume(volume);
    }

    /// Nudge the volume by `step`, snapped to whole percents.
    pub fn adjust_volume(&mut self, app: &mut App, step: f32) {
        let target = ((app.volume + step) * 100.0).round() / 100.0;
        self.set_volume(app, target);
    }

    /// Handle one engine-reported completion.
    pub fn on_track_finished(&mut self, app: &mut App, catalog: &Catalog) -> Result<(), EngineError> {
        if catalog.is_empty() {
            return Ok(());
        }

        if app.repeat {
            // Same track again; the cursor stays wherever the user left it.
            return match catalog.get(app.current_index) {
                Some(track) => self.play(app, track),
                None => Ok(()),
            };
        }

        let len = catalog.len();
        let next = if app.shuffle {
            (self.pick)(len) % len
        } else {
            (app.current_index + 1) % len
        };
        self.play_index(app, catalog, next)
    }

    pub fn shutdown(&mut self) {
        self.engine.stop();
        self.engine.shutdown();
    }
}
