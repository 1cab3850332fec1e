use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

const APP_DIR: &str = "cubeplayer";

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then applies environment
/// variables (prefix `CUBEPLAYER__`) on top, falling back to struct defaults.
impl Settings {
    /// Load settings from the optional config file and the environment.
    ///
    /// `explicit` (from `--config`) wins over every other config path source.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let config_path = explicit
            .map(Path::to_path_buf)
            .or_else(resolve_config_path);

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CUBEPLAYER")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err("playback.volume must be between 0.0 and 1.0".to_string());
        }
        // Volume moves in whole percents, so smaller steps would never register.
        if !(self.playback.volume_step >= 0.01 && self.playback.volume_step <= 1.0) {
            return Err("playback.volume_step must be in [0.01, 1.0]".to_string());
        }
        if self.ui.tick_ms == 0 {
            return Err("ui.tick_ms must be >= 1".to_string());
        }
        if self.ui.visualizer_height == 0 {
            return Err("ui.visualizer_height must be >= 1".to_string());
        }
        Ok(())
    }

    /// Render the effective settings as TOML, in the same shape the loader reads.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `CUBEPLAYER_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CUBEPLAYER_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    config_dir().map(|d| d.join("config.toml"))
}

/// Per-user directory holding the config file, the last-directory record and logs:
/// `$XDG_CONFIG_HOME/cubeplayer` or `~/.config/cubeplayer`.
pub fn config_dir() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        home_dir().map(|home| home.join(".config"))
    };

    config_home.map(|d| d.join(APP_DIR))
}

/// The user's home directory, from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
