//! Session state: everything that changes while the player runs.
//!
//! The struct is owned by the main loop and handed to handlers by `&mut`.
//! Indices refer into the current `Catalog`; the catalog itself lives next to
//! the session, not inside it.

use std::time::{Duration, Instant};

use crate::config::{PlaybackSettings, UiSettings};

/// Visualizer phase advance per second of playback.
pub const VIZ_SPEED: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct App {
    pub current_index: usize,
    pub selection_index: usize,
    pub paused: bool,
    pub repeat: bool,
    pub shuffle: bool,
    /// Always within `0.0..=1.0`.
    pub volume: f32,
    /// Locally integrated playback position. The engine is never asked for
    /// the real one.
    pub elapsed: Duration,
    pub viz_phase: f64,
    pub status_message: String,
    status_until: Option<Instant>,
    pub show_keys: bool,
    input_blocked_until: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            current_index: 0,
            selection_index: 0,
            paused: false,
            repeat: false,
            shuffle: false,
            volume: 0.7,
            elapsed: Duration::ZERO,
            viz_phase: 0.0,
            status_message: String::new(),
            status_until: None,
            show_keys: false,
            input_blocked_until: None,
        }
    }
}

impl App {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session with the configured startup toggles.
    pub fn from_settings(playback: &PlaybackSettings, ui: &UiSettings) -> Self {
        Self {
            repeat: playback.repeat,
            shuffle: playback.shuffle,
            volume: playback.volume.clamp(0.0, 1.0),
            show_keys: ui.show_keys,
            ..Self::default()
        }
    }

    /// Advance the local clock and the visualizer by one tick's worth of playback.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.elapsed += delta;
        self.viz_phase += delta.as_secs_f64() * VIZ_SPEED;
    }

    /// Back to the start of a track, playing.
    pub fn reset_position(&mut self) {
        self.elapsed = Duration::ZERO;
        self.paused = false;
    }

    /// Prepare for a freshly swapped-in catalog.
    pub fn reset_for_new_catalog(&mut self) {
        self.current_index = 0;
        self.selection_index = 0;
        self.reset_position();
    }

    pub fn select_up(&mut self) {
        self.selection_index = self.selection_index.saturating_sub(1);
    }

    pub fn select_down(&mut self, len: usize) {
        if len == 0 {
            self.selection_index = 0;
            return;
        }
        self.selection_index = (self.selection_index + 1).min(len - 1);
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    pub fn toggle_keys(&mut self) {
        self.show_keys = !self.show_keys;
    }

    /// Show `text` in the footer until `now + ttl`.
    pub fn set_status(&mut self, text: impl Into<String>, now: Instant, ttl: Duration) {
        self.status_message = text.into();
        self.status_until = Some(now + ttl);
    }

    pub fn expire_status(&mut self, now: Instant) {
        if let Some(until) = self.status_until {
            if now > until {
                self.status_message.clear();
                self.status_until = None;
            }
        }
    }

    /// Ignore keys until `now + window`.
    pub fn block_input(&mut self, now: Instant, window: Duration) {
        self.input_blocked_until = Some(now + window);
    }

    pub fn input_blocked(&self, now: Instant) -> bool {
        self.input_blocked_until
            .map(|until| now < until)
            .unwrap_or(false)
    }

    /// Volume as a whole percentage for display.
    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
