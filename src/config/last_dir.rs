//! The single piece of state that survives between runs: the last folder the
//! user browsed to.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use super::load::config_dir;

/// Best-effort store for the last browsed directory.
///
/// The file holds exactly one line with an absolute path. A missing, unreadable
/// or blank file all mean "no prior directory".
#[derive(Debug, Clone)]
pub struct LastDir {
    file: Option<PathBuf>,
}

impl LastDir {
    /// Use the default per-user location.
    pub fn default_location() -> Self {
        Self {
            file: resolve_last_dir_path(),
        }
    }

    /// Use an explicit file.
    pub fn at(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
        }
    }

    pub fn load(&self) -> Option<PathBuf> {
        let file = self.file.as_ref()?;
        let raw = fs::read_to_string(file).ok()?;
        let line = raw.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            None
        } else {
            Some(PathBuf::from(line))
        }
    }

    pub fn save(&self, dir: &Path) {
        let Some(file) = self.file.as_ref() else {
            return;
        };
        let dir = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        if let Some(parent) = file.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(file, dir.to_string_lossy().as_bytes()) {
            tracing::debug!("could not record last directory in {:?}: {}", file, e);
        }
    }
}

/// `CUBEPLAYER_LAST_DIR_PATH`, else `<config dir>/last_dir`.
pub fn resolve_last_dir_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CUBEPLAYER_LAST_DIR_PATH") {
        return Some(PathBuf::from(p));
    }
    config_dir().map(|d| d.join("last_dir"))
}
