//! Reading core for tagged Bible text.
//!
//! This crate wraps the `vmark` tag parser with everything a reader needs
//! around it: slicing version text into chapters, resolving version and
//! outline identifiers, listing footnotes per chapter, and the persisted
//! records the browser app keeps in client-side storage (settings, tag-style
//! overrides, reading history, reading plans).
//!
//! All persistence goes through an explicit [`storage::Storage`] object with
//! a load/save lifecycle; there is no ambient global state. Loads fail
//! closed (malformed data falls back to defaults), saves surface errors.
//!
//! # Usage
//!
//! ```
//! use lectio::vmark::TagRegistry;
//! use lectio::{tag_chapter, ChapterBoundary, Library, Version};
//!
//! let mut library = Library::new();
//! library.insert_version(Version::new(
//!     "kjv",
//!     "King James Version",
//!     "<V>1</V>In the beginning\n<V>2</V>And the earth<FN>Heb. erets</FN> was",
//! ));
//!
//! let version = library.version(Some("kjv")).unwrap();
//! let boundary = ChapterBoundary::new(1, 1, Some(1), Some(2));
//! let chapter = tag_chapter(&version.content, &boundary, &TagRegistry::default());
//!
//! assert_eq!(chapter.lines().len(), 2);
//! assert_eq!(chapter.footnotes()[0].id, "fn-1-2-0");
//! ```

pub mod assets;
pub mod books;
pub mod chapter;
pub mod error;
pub mod history;
pub mod library;
pub mod log_init;
pub mod outline;
pub mod plan;
pub mod settings;
pub mod storage;
pub mod version;

// Re-export main types at crate root
pub use chapter::{slice_lines, tag_chapter, FootnoteRef, TaggedChapter};
pub use error::{LibraryError, StorageError};
pub use history::{History, HistoryEntry};
pub use library::Library;
pub use outline::{ChapterBoundary, Outline};
pub use plan::{Plans, Reading, ReadingPlan};
pub use settings::{load_tag_styles, save_tag_styles, Settings};
pub use storage::{MemoryStore, Storage};
pub use version::Version;

// Re-export the markup parser so callers need only one dependency.
pub use vmark;
