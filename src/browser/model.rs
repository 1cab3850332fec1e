use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// The synthetic `..` entry.
    Parent,
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Parent | EntryKind::Dir)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    Up,
    Down,
    /// Descend into the entry under the cursor (or ascend on `..`).
    Open,
    /// Ascend regardless of the cursor.
    Parent,
    /// Pick the entry under the cursor.
    Choose,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Chosen(PathBuf),
    Cancelled,
}

/// What the browser lists besides directories.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    pub allow_files: bool,
    /// Lowercase extensions without the dot. `None` lists every file.
    pub extensions: Option<Vec<String>>,
}

impl BrowseOptions {
    pub fn folders_only() -> Self {
        Self::default()
    }

    pub fn files_with_extensions(exts: &[&str]) -> Self {
        Self {
            allow_files: true,
            extensions: Some(exts.iter().map(|e| e.to_ascii_lowercase()).collect()),
        }
    }

    fn accepts_file(&self, path: &Path) -> bool {
        if !self.allow_files {
            return false;
        }
        match &self.extensions {
            None => true,
            Some(exts) => path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| exts.iter().any(|x| x.eq_ignore_ascii_case(e)))
                .unwrap_or(false),
        }
    }
}

/// Modal folder/file picker state.
#[derive(Debug, Clone)]
pub struct DirBrowser {
    current_dir: PathBuf,
    cursor: usize,
    entries: Vec<Entry>,
    options: BrowseOptions,
}

impl DirBrowser {
    pub fn new(start: &Path, options: BrowseOptions) -> Self {
        let mut browser = Self {
            current_dir: absolute(start),
            cursor: 0,
            entries: Vec::new(),
            options,
        };
        browser.refresh();
        browser
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    pub fn apply(&mut self, action: BrowserAction) -> Transition {
        match action {
            BrowserAction::Cancel => return Transition::Cancelled,
            BrowserAction::Up => self.cursor = self.cursor.saturating_sub(1),
            BrowserAction::Down => {
                self.cursor = (self.cursor + 1).min(self.entries.len().saturating_sub(1));
            }
            BrowserAction::Parent => self.ascend(),
            BrowserAction::Open => {
                if let Some(entry) = self.selected().cloned() {
                    match entry.kind {
                        EntryKind::Parent => self.ascend(),
                        EntryKind::Dir => self.enter(entry.path),
                        EntryKind::File => {}
                    }
                }
            }
            BrowserAction::Choose => {
                if let Some(entry) = self.selected() {
                    match entry.kind {
                        EntryKind::Parent => {}
                        EntryKind::Dir => return Transition::Chosen(entry.path.clone()),
                        EntryKind::File if self.options.allow_files => {
                            return Transition::Chosen(entry.path.clone());
                        }
                        EntryKind::File => {}
                    }
                }
            }
        }
        Transition::Continue
    }

    fn ascend(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            let parent = parent.to_path_buf();
            self.enter(parent);
        }
    }

    fn enter(&mut self, dir: PathBuf) {
        self.current_dir = dir;
        self.cursor = 0;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.entries = list_entries(&self.current_dir, &self.options);
        if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len().saturating_sub(1);
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// List `dir` for display: `..` first (unless at the root), then folders,
/// then accepted files, each group sorted case-insensitively.
///
/// A directory that cannot be read lists as empty.
pub fn list_entries(dir: &Path, options: &BrowseOptions) -> Vec<Entry> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            tracing::debug!("cannot list {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut dirs: Vec<Entry> = Vec::new();
    let mut files: Vec<Entry> = Vec::new();
    for item in read.flatten() {
        let path = item.path();
        let name = item.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            dirs.push(Entry {
                name,
                path,
                kind: EntryKind::Dir,
            });
        } else if options.accepts_file(&path) {
            files.push(Entry {
                name,
                path,
                kind: EntryKind::File,
            });
        }
    }

    dirs.sort_by_key(|e| e.name.to_lowercase());
    files.sort_by_key(|e| e.name.to_lowercase());

    let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
    if let Some(parent) = dir.parent() {
        entries.push(Entry {
            name: "..".to_string(),
            path: parent.to_path_buf(),
            kind: EntryKind::Parent,
        });
    }
    entries.extend(dirs);
    entries.extend(files);
    entries
}
