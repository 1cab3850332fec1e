//! Audio-related small types: engine events, errors, the engine interface
//! and the bounded event queue.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The current track played to its end.
    TrackFinished,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no audio output device: {0}")]
    Device(String),
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

/// The playback backend as seen by the session.
///
/// Calls are synchronous and local; the engine may run its own output thread
/// internally but never shares memory with the caller.
pub trait PlaybackEngine {
    /// Replace whatever is playing with `path`, starting `start_at` into the file.
    ///
    /// On error the previous track keeps playing.
    fn load_and_play(&mut self, path: &Path, start_at: Duration) -> Result<(), EngineError>;

    fn pause(&mut self);

    fn unpause(&mut self);

    fn stop(&mut self);

    /// `volume` is already clamped to `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);

    /// True while audio is actually sounding (loaded, not paused, not drained).
    fn is_busy(&self) -> bool;

    /// Drain pending events.
    fn poll_events(&mut self) -> Vec<EngineEvent>;

    /// Release output resources. Safe to call more than once.
    fn shutdown(&mut self);
}

/// Fixed-capacity FIFO of engine events. When full, the oldest event is dropped.
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<EngineEvent>,
    capacity: usize,
}

impl EventQueue {
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, event: EngineEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}
