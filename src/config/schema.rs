use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cubeplayer/config.toml` or
/// `~/.config/cubeplayer/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CUBEPLAYER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub browser: BrowserSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume applied when the session starts (0.0 - 1.0).
    pub volume: f32,
    /// Step used by the `+` / `-` keys.
    pub volume_step: f32,
    /// Number of seconds to seek when pressing Left / Right.
    pub seek_seconds: u64,
    /// Whether repeat-one starts enabled.
    pub repeat: bool,
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 0.7,
            volume_step: 0.05,
            seek_seconds: 5,
            repeat: false,
            shuffle: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Main loop tick interval (milliseconds).
    pub tick_ms: u64,
    /// How long a transient status message stays in the footer (milliseconds).
    pub status_ttl_ms: u64,
    /// Keys pressed within this window after a modal returns are ignored (milliseconds).
    pub input_guard_ms: u64,
    /// Whether the keys help panel starts open.
    pub show_keys: bool,
    /// Tallest visualizer bar, in rows.
    pub visualizer_height: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            status_ttl_ms: 2500,
            input_guard_ms: 150,
            show_keys: false,
            visualizer_height: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// Read titles, durations and tags from the files themselves.
    pub read_tags: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: true,
            max_depth: None,
            read_tags: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Allow picking a single audio file in the browser, not only folders.
    pub allow_files: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `CUBEPLAYER_LOG`.
    pub level: String,
    /// Directory for `cubeplayer.log`. Defaults to the config directory.
    pub dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}
