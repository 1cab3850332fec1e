//! Application module: exposes the session state used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the current indices,
//! playback flags, clock and transient UI state.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
