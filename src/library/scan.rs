use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Catalog, Track};
use super::tags::TagReader;

/// Extensions the player accepts, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["mp3", "wav", "ogg", "flac"];

pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn walk_dir(dir: &Path, settings: &LibrarySettings, out: &mut Vec<PathBuf>) {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    if let Some(d) = settings.max_depth {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        if entry.path().is_file() {
            out.push(entry.into_path());
        }
    }
}

/// Build a catalog from files and folders.
///
/// Folders are walked recursively; files are taken as given. The result only
/// holds supported audio files, deduplicated by resolved path and sorted by
/// path. Paths that don't exist or can't be read are skipped.
pub fn build(paths: &[PathBuf], settings: &LibrarySettings, tags: &dyn TagReader) -> Catalog {
    let mut files: Vec<PathBuf> = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, settings, &mut files);
        } else {
            files.push(path.clone());
        }
    }

    let mut resolved: Vec<PathBuf> = files
        .into_iter()
        .filter(|p| is_audio_file(p))
        .filter_map(|p| match fs::canonicalize(&p) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::debug!("skipping {:?}: {}", p, e);
                None
            }
        })
        // A symlink may resolve to a name without an audio extension.
        .filter(|p| is_audio_file(p))
        .collect();
    resolved.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    resolved.dedup();

    let tracks: Vec<Track> = resolved
        .into_iter()
        .map(|path| {
            let (title, duration) = tags.probe(&path);
            let title = title.unwrap_or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "UNKNOWN".to_string())
            });
            Track {
                path,
                title,
                duration,
            }
        })
        .collect();

    tracing::info!("catalog built with {} tracks from {} input paths", tracks.len(), paths.len());
    Catalog::new(tracks)
}
