use std::path::Path;

use crate::config;

/// Load settings, falling back to defaults when the file is broken.
///
/// Runs before the logger exists, so problems are kept and returned for the
/// caller to log once logging is up.
pub fn load_settings(explicit: Option<&Path>) -> (config::Settings, Option<String>) {
    match config::Settings::load(explicit) {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
