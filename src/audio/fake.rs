//! In-memory engine used by tests across the crate.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::{EngineError, EngineEvent, EventQueue, PlaybackEngine};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(PathBuf, Duration),
    Pause,
    Unpause,
    Stop,
    Volume(f32),
    Shutdown,
}

/// Records every call and lets tests script busy state, failures and events.
#[derive(Debug, Default)]
pub struct FakeEngine {
    pub calls: Vec<Call>,
    pub busy: bool,
    pub failing: HashSet<PathBuf>,
    pub events: EventQueue,
    pub shut_down: bool,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy() -> Self {
        Self {
            busy: true,
            ..Self::default()
        }
    }

    pub fn fail_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    pub fn loads(&self) -> Vec<(PathBuf, Duration)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Load(p, d) => Some((p.clone(), *d)),
                _ => None,
            })
            .collect()
    }

    pub fn last_load(&self) -> Option<(PathBuf, Duration)> {
        self.loads().pop()
    }
}

impl PlaybackEngine for FakeEngine {
    fn load_and_play(&mut self, path: &Path, start_at: Duration) -> Result<(), EngineError> {
        if self.failing.contains(path) {
            return Err(EngineError::Decode {
                path: path.to_path_buf(),
                reason: "unsupported codec".to_string(),
            });
        }
        self.calls.push(Call::Load(path.to_path_buf(), start_at));
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn unpause(&mut self) {
        self.calls.push(Call::Unpause);
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::Volume(volume));
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain()
    }

    fn shutdown(&mut self) {
        self.calls.push(Call::Shutdown);
        self.shut_down = true;
    }
}
