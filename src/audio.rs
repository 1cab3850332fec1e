//! Audio module: the engine interface, its `rodio` implementation and the
//! playback controller that drives it from session state.

mod controller;
mod engine;
mod sink;
mod types;

pub use controller::{Controller, ShufflePicker};
pub use engine::RodioEngine;
pub use types::{EngineError, EngineEvent, EventQueue, PlaybackEngine};

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod tests;
