use std::io::Stdout;
use std::path::{Path, PathBuf};

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::browser::{self, BrowseOptions};
use crate::config::{self, BrowserSettings, LastDir};
use crate::library::SUPPORTED_EXTENSIONS;

/// Decide what to play when the player starts.
///
/// CLI paths win, then the remembered folder, then the browser. `None` means
/// the user cancelled the browser.
pub fn resolve_paths(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli_paths: &[PathBuf],
    last_dir: &LastDir,
    settings: &BrowserSettings,
) -> std::io::Result<Option<Vec<PathBuf>>> {
    if !cli_paths.is_empty() {
        return Ok(Some(cli_paths.to_vec()));
    }
    if let Some(dir) = remembered_dir(last_dir) {
        tracing::info!("reopening last folder {:?}", dir);
        return Ok(Some(vec![dir]));
    }
    Ok(choose(terminal, last_dir, settings)?.map(|p| vec![p]))
}

/// Show the browser and remember the folder of whatever gets chosen.
pub fn choose(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    last_dir: &LastDir,
    settings: &BrowserSettings,
) -> std::io::Result<Option<PathBuf>> {
    let start = browse_start(last_dir);
    let chosen = browser::run_modal(terminal, &start, browse_options(settings))?;
    if let Some(path) = &chosen {
        last_dir.save(folder_of(path));
    }
    Ok(chosen)
}

fn remembered_dir(last_dir: &LastDir) -> Option<PathBuf> {
    last_dir.load().filter(|d| d.is_dir())
}

pub fn browse_start(last_dir: &LastDir) -> PathBuf {
    remembered_dir(last_dir)
        .or_else(config::home_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"))
}

pub fn browse_options(settings: &BrowserSettings) -> BrowseOptions {
    if settings.allow_files {
        BrowseOptions::files_with_extensions(&SUPPORTED_EXTENSIONS)
    } else {
        BrowseOptions::folders_only()
    }
}

/// The folder worth remembering for a chosen path.
pub fn folder_of(path: &Path) -> &Path {
    if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(path)
    }
}
