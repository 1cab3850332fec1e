use std::path::Path;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::sink::create_sink_at;
use super::types::{EngineError, EngineEvent, EventQueue, PlaybackEngine};

/// `PlaybackEngine` on top of `rodio`'s default output device.
///
/// Completion is detected by polling: a sink that was started and has since
/// drained produces exactly one `TrackFinished`.
pub struct RodioEngine {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    volume: f32,
    /// Set when a track starts, cleared once its completion has been reported
    /// or playback was stopped explicitly.
    armed: bool,
    events: EventQueue,
}

impl RodioEngine {
    pub fn init() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        tracing::info!("audio output opened");
        Ok(Self {
            stream: Some(stream),
            sink: None,
            volume: 1.0,
            armed: false,
            events: EventQueue::default(),
        })
    }

    fn check_finished(&mut self) {
        if !self.armed {
            return;
        }
        if let Some(s) = self.sink.as_ref() {
            if s.empty() {
                self.armed = false;
                self.events.push(EngineEvent::TrackFinished);
            }
        }
    }
}

impl PlaybackEngine for RodioEngine {
    fn load_and_play(&mut self, path: &Path, start_at: Duration) -> Result<(), EngineError> {
        let Some(stream) = self.stream.as_ref() else {
            return Err(EngineError::Device("output already shut down".to_string()));
        };

        // Decode first so a bad file leaves the current track untouched.
        let new_sink = create_sink_at(stream, path, start_at)?;
        new_sink.set_volume(self.volume);

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        new_sink.play();
        self.sink = Some(new_sink);
        self.armed = true;

        tracing::debug!("playing {:?} from {:?}", path, start_at);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.armed = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.empty() && !s.is_paused())
            .unwrap_or(false)
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.check_finished();
        self.events.drain()
    }

    fn shutdown(&mut self) {
        self.stop();
        if self.stream.take().is_some() {
            tracing::info!("audio output closed");
        }
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
