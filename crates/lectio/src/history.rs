//! Reading history.
//!
//! A capped, most-recent-first list of visited chapters with short text
//! previews. Timestamps are caller-supplied; the library does no clock I/O.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::StorageError;
use crate::storage::{keys, load_or_default, save, Storage};

/// Maximum entries kept in the history list.
pub const MAX_ENTRIES: usize = 50;

/// Maximum snippet length in grapheme clusters.
const SNIPPET_GRAPHEMES: usize = 80;

/// One visited chapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Version the chapter was read in.
    pub version_id: String,
    /// 1-based book number.
    pub book: u32,
    /// Chapter number within the book.
    pub chapter: u32,
    /// Last verse the reader was on.
    #[serde(default)]
    pub verse: u32,
    /// Short plain-text preview of the chapter.
    #[serde(default)]
    pub snippet: String,
    /// Caller-supplied timestamp (epoch milliseconds).
    #[serde(default)]
    pub visited_at: u64,
}

/// Most-recent-first reading history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no chapters have been visited.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a visit.
    ///
    /// An existing entry for the same (version, book, chapter) is replaced
    /// and moved to the front; the list is capped at [`MAX_ENTRIES`] and the
    /// snippet is truncated on grapheme boundaries.
    pub fn record(&mut self, mut entry: HistoryEntry) {
        entry.snippet = truncate_snippet(&entry.snippet, SNIPPET_GRAPHEMES);
        self.entries.retain(|e| {
            !(e.version_id == entry.version_id
                && e.book == entry.book
                && e.chapter == entry.chapter)
        });
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Load history, falling back to empty on absent or malformed data.
    pub fn load(store: &dyn Storage) -> Self {
        load_or_default(store, keys::HISTORY)
    }

    /// Persist this history.
    pub fn save(&self, store: &mut dyn Storage) -> Result<(), StorageError> {
        save(store, keys::HISTORY, self)
    }
}

/// Truncate on grapheme boundaries, appending an ellipsis when shortened.
pub fn truncate_snippet(text: &str, max_graphemes: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let kept: String = graphemes.by_ref().take(max_graphemes).collect();
    if graphemes.next().is_some() {
        format!("{kept}…")
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(version: &str, book: u32, chapter: u32) -> HistoryEntry {
        HistoryEntry {
            version_id: version.to_string(),
            book,
            chapter,
            verse: 1,
            snippet: "In the beginning".to_string(),
            visited_at: 0,
        }
    }

    #[test]
    fn most_recent_first() {
        let mut history = History::new();
        history.record(entry("kjv", 1, 1));
        history.record(entry("kjv", 1, 2));
        assert_eq!(history.entries()[0].chapter, 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn revisit_replaces_and_moves_to_front() {
        let mut history = History::new();
        history.record(entry("kjv", 1, 1));
        history.record(entry("kjv", 1, 2));
        let mut revisit = entry("kjv", 1, 1);
        revisit.verse = 9;
        history.record(revisit);
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].chapter, 1);
        assert_eq!(history.entries()[0].verse, 9);
    }

    #[test]
    fn same_chapter_in_another_version_is_separate() {
        let mut history = History::new();
        history.record(entry("kjv", 1, 1));
        history.record(entry("web", 1, 1));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn capped_at_max_entries() {
        let mut history = History::new();
        for chapter in 1..=(MAX_ENTRIES as u32 + 10) {
            history.record(entry("kjv", 1, chapter));
        }
        assert_eq!(history.len(), MAX_ENTRIES);
        // The oldest entries fell off.
        assert_eq!(history.entries()[0].chapter, MAX_ENTRIES as u32 + 10);
        assert!(history.entries().iter().all(|e| e.chapter > 10));
    }

    #[test]
    fn snippet_truncated_on_grapheme_boundaries() {
        let long = "a".repeat(100);
        let mut history = History::new();
        let mut e = entry("kjv", 1, 1);
        e.snippet = long;
        history.record(e);
        let snippet = &history.entries()[0].snippet;
        assert_eq!(snippet.chars().count(), 81);
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn truncate_respects_clusters() {
        // Family emoji is one grapheme cluster built from several scalars.
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let text = format!("{family}{family}");
        assert_eq!(truncate_snippet(&text, 2), text);
        assert_eq!(truncate_snippet(&text, 1), format!("{family}…"));
    }

    #[test]
    fn short_snippet_is_untouched() {
        assert_eq!(truncate_snippet("short", 80), "short");
    }
}
