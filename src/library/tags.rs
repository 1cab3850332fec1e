//! Tag reading behind a capability trait.
//!
//! Every lookup is best-effort: a file that cannot be opened or parsed simply
//! has no title, no duration and `unknown` tags. When tag reading is disabled
//! (or compiled out) the null reader is used instead.

use std::path::Path;
use std::time::Duration;

/// Labels of the tag summary, in display order.
pub const SUMMARY_FIELDS: [&str; 6] = ["Title", "Artist", "Album", "Year", "Genre", "Track#"];

pub const UNKNOWN: &str = "unknown";
pub const TAGS_UNAVAILABLE: &str = "Tags unavailable";

pub trait TagReader {
    fn duration(&self, path: &Path) -> Option<Duration>;

    fn title(&self, path: &Path) -> Option<String>;

    /// One `Label: value` line per entry of [`SUMMARY_FIELDS`].
    fn tag_summary(&self, path: &Path) -> Vec<String>;

    /// Title and duration in one go. Readers that parse the file once should override this.
    fn probe(&self, path: &Path) -> (Option<String>, Option<Duration>) {
        (self.title(path), self.duration(path))
    }
}

/// Used when tag reading is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTags;

impl TagReader for NullTags {
    fn duration(&self, _path: &Path) -> Option<Duration> {
        None
    }

    fn title(&self, _path: &Path) -> Option<String> {
        None
    }

    fn tag_summary(&self, _path: &Path) -> Vec<String> {
        vec![TAGS_UNAVAILABLE.to_string()]
    }
}

/// Pick the reader once at startup.
pub fn reader(read_tags: bool) -> Box<dyn TagReader> {
    #[cfg(feature = "tags")]
    if read_tags {
        return Box::new(LoftyTags);
    }

    #[cfg(not(feature = "tags"))]
    if read_tags {
        tracing::info!("tag reading requested but cubeplayer was built without the `tags` feature");
    }

    Box::new(NullTags)
}

fn summary_lines(values: [Option<String>; 6]) -> Vec<String> {
    SUMMARY_FIELDS
        .iter()
        .zip(values)
        .map(|(label, value)| format!("{}: {}", label, value.as_deref().unwrap_or(UNKNOWN)))
        .collect()
}

/// Readers report an unknown stream length as zero.
#[cfg(any(feature = "tags", test))]
fn known_duration(d: Duration) -> Option<Duration> {
    Some(d).filter(|d| !d.is_zero())
}

fn non_blank(v: &str) -> Option<String> {
    let v = v.trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

#[cfg(feature = "tags")]
pub use lofty_reader::LoftyTags;

#[cfg(feature = "tags")]
mod lofty_reader {
    use std::path::Path;
    use std::time::Duration;

    use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
    use lofty::tag::{ItemKey, Tag};

    use super::{TagReader, known_duration, non_blank, summary_lines};

    /// Reads tags and stream properties through `lofty`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LoftyTags;

    fn open(path: &Path) -> Option<TaggedFile> {
        match lofty::read_from_path(path) {
            Ok(tagged) => Some(tagged),
            Err(e) => {
                tracing::debug!("no tags for {:?}: {}", path, e);
                None
            }
        }
    }

    fn main_tag(tagged: &TaggedFile) -> Option<&Tag> {
        tagged.primary_tag().or_else(|| tagged.first_tag())
    }

    fn get(tag: &Tag, key: ItemKey) -> Option<String> {
        tag.get_string(&key).and_then(non_blank)
    }

    fn duration_of(tagged: &TaggedFile) -> Option<Duration> {
        known_duration(tagged.properties().duration())
    }

    fn title_of(tagged: &TaggedFile) -> Option<String> {
        main_tag(tagged).and_then(|tag| get(tag, ItemKey::TrackTitle))
    }

    impl TagReader for LoftyTags {
        fn duration(&self, path: &Path) -> Option<Duration> {
            open(path).as_ref().and_then(duration_of)
        }

        fn title(&self, path: &Path) -> Option<String> {
            open(path).as_ref().and_then(title_of)
        }

        fn tag_summary(&self, path: &Path) -> Vec<String> {
            let tagged = open(path);
            let Some(tag) = tagged.as_ref().and_then(main_tag) else {
                return summary_lines(Default::default());
            };

            summary_lines([
                get(tag, ItemKey::TrackTitle),
                get(tag, ItemKey::TrackArtist),
                get(tag, ItemKey::AlbumTitle),
                get(tag, ItemKey::RecordingDate),
                get(tag, ItemKey::Genre),
                get(tag, ItemKey::TrackNumber),
            ])
        }

        fn probe(&self, path: &Path) -> (Option<String>, Option<Duration>) {
            match open(path) {
                Some(tagged) => (title_of(&tagged), duration_of(&tagged)),
                None => (None, None),
            }
        }
    }
}
