use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::app::App;
use crate::audio::{Controller, EngineError, EngineEvent, PlaybackEngine};
use crate::config::Settings;
use crate::input::Command;
use crate::library::{Catalog, TagReader};
use crate::ui::View;

/// What the event loop should do after a tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Browse,
    Quit,
}

/// The running player: session state, the current catalog and the engine
/// behind its controller.
pub struct Session<E: PlaybackEngine> {
    pub app: App,
    catalog: Catalog,
    controller: Controller<E>,
    tags: Box<dyn TagReader>,
    tag_lines: Vec<String>,
    tag_path: Option<PathBuf>,
    last_tick: Instant,
    seek_seconds: i64,
    volume_step: f32,
    status_ttl: Duration,
    input_guard: Duration,
    visualizer_height: u16,
}

impl<E: PlaybackEngine> Session<E> {
    pub fn new(
        controller: Controller<E>,
        catalog: Catalog,
        tags: Box<dyn TagReader>,
        settings: &Settings,
        now: Instant,
    ) -> Self {
        Self {
            app: App::from_settings(&settings.playback, &settings.ui),
            catalog,
            controller,
            tags,
            tag_lines: Vec::new(),
            tag_path: None,
            last_tick: now,
            seek_seconds: i64::try_from(settings.playback.seek_seconds).unwrap_or(i64::MAX),
            volume_step: settings.playback.volume_step,
            status_ttl: Duration::from_millis(settings.ui.status_ttl_ms),
            input_guard: Duration::from_millis(settings.ui.input_guard_ms),
            visualizer_height: settings.ui.visualizer_height,
        }
    }

    /// Enter the running state: apply the volume and start the first track.
    pub fn start(&mut self, now: Instant) {
        let volume = self.app.volume;
        self.controller.set_volume(&mut self.app, volume);
        let result = self.controller.play_index(&mut self.app, &self.catalog, 0);
        self.report(result, now);
        self.last_tick = now;
        self.refresh_tags();
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tags(&self) -> &dyn TagReader {
        self.tags.as_ref()
    }

    #[cfg(test)]
    pub fn controller(&self) -> &Controller<E> {
        &self.controller
    }

    #[cfg(test)]
    pub fn controller_mut(&mut self) -> &mut Controller<E> {
        &mut self.controller
    }

    /// One pass of the loop body, minus drawing and sleeping.
    pub fn tick(&mut self, now: Instant, command: Option<Command>) -> Flow {
        let delta = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if !self.app.paused && self.controller.is_busy() {
            self.app.advance_clock(delta);
        }
        self.app.expire_status(now);

        for event in self.controller.poll_events() {
            match event {
                EngineEvent::TrackFinished => {
                    let result = self.controller.on_track_finished(&mut self.app, &self.catalog);
                    self.report(result, now);
                }
            }
        }

        let flow = match command {
            Some(cmd) if !self.app.input_blocked(now) => self.dispatch(cmd, now),
            Some(cmd) => {
                tracing::trace!("dropped {:?} inside input guard", cmd);
                Flow::Continue
            }
            None => Flow::Continue,
        };

        self.refresh_tags();
        flow
    }

    pub fn dispatch(&mut self, command: Command, now: Instant) -> Flow {
        let app = &mut self.app;
        let catalog = &self.catalog;
        let result = match command {
            Command::Quit => return Flow::Quit,
            Command::Browse => return Flow::Browse,
            Command::PlayPause => {
                self.controller.toggle_pause(app, catalog);
                Ok(())
            }
            Command::Next => self.controller.next(app, catalog),
            Command::Previous => self.controller.previous(app, catalog),
            Command::PlaySelected => self.controller.play_selected(app, catalog),
            Command::Stop => {
                self.controller.stop(app);
                Ok(())
            }
            Command::SeekBack => self.controller.seek(app, catalog, -self.seek_seconds),
            Command::SeekForward => self.controller.seek(app, catalog, self.seek_seconds),
            Command::SelectUp => {
                app.select_up();
                Ok(())
            }
            Command::SelectDown => {
                app.select_down(catalog.len());
                Ok(())
            }
            Command::ToggleHelp => {
                app.toggle_keys();
                Ok(())
            }
            Command::ToggleRepeat => {
                app.toggle_repeat();
                let text = format!("Repeat: {}", on_off(app.repeat));
                app.set_status(text, now, self.status_ttl);
                Ok(())
            }
            Command::ToggleShuffle => {
                app.toggle_shuffle();
                let text = format!("Shuffle: {}", on_off(app.shuffle));
                app.set_status(text, now, self.status_ttl);
                Ok(())
            }
            Command::VolumeUp | Command::VolumeDown => {
                let step = if command == Command::VolumeUp {
                    self.volume_step
                } else {
                    -self.volume_step
                };
                self.controller.adjust_volume(app, step);
                let text = format!("Volume: {}%", app.volume_percent());
                app.set_status(text, now, self.status_ttl);
                Ok(())
            }
        };
        self.report(result, now);
        Flow::Continue
    }

    /// Swap in a freshly built catalog and start its first track.
    ///
    /// An empty catalog leaves the session untouched. Returns whether the
    /// swap happened.
    pub fn replace_catalog(&mut self, catalog: Catalog, now: Instant) -> bool {
        if catalog.is_empty() {
            self.app
                .set_status("No supported audio files found.", now, self.status_ttl);
            return false;
        }

        tracing::info!("switching to a catalog of {} tracks", catalog.len());
        self.catalog = catalog;
        self.app.reset_for_new_catalog();
        let result = self.controller.play_index(&mut self.app, &self.catalog, 0);
        self.report(result, now);
        // The new track starts now; time spent browsing belongs to the old one.
        self.last_tick = now;
        self.refresh_tags();
        true
    }

    /// Called when the modal browser hands control back.
    pub fn leave_modal(&mut self, now: Instant) {
        self.app.block_input(now, self.input_guard);
    }

    pub fn view(&self) -> View<'_> {
        View {
            catalog: &self.catalog,
            app: &self.app,
            tags: &self.tag_lines,
            visualizer_height: self.visualizer_height,
        }
    }

    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }

    fn report(&mut self, result: Result<(), EngineError>, now: Instant) {
        if let Err(e) = result {
            tracing::warn!("playback error: {e}");
            self.app.set_status(format!("Error: {e}"), now, self.status_ttl);
        }
    }

    /// Re-read the tag summary when the current track changed.
    fn refresh_tags(&mut self) {
        let path = self.catalog.get(self.app.current_index).map(|t| &t.path);
        if path == self.tag_path.as_ref() {
            return;
        }
        self.tag_lines = path.map(|p| self.tags.tag_summary(p)).unwrap_or_default();
        self.tag_path = path.cloned();
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}
