//! In-memory version/outline library.
//!
//! The hosted document store is an external collaborator; this library is
//! the id-keyed view the reading core works against once records have been
//! fetched.

use std::collections::HashMap;

use crate::error::LibraryError;
use crate::outline::Outline;
use crate::version::Version;

/// Id-keyed store of versions and outlines.
#[derive(Clone, Debug, Default)]
pub struct Library {
    versions: HashMap<String, Version>,
    outlines: HashMap<String, Outline>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a version record, replacing any previous entry with its id.
    pub fn insert_version(&mut self, version: Version) {
        log::debug!("library: version {} ({} lines)", version.id, version.line_count());
        self.versions.insert(version.id.clone(), version);
    }

    /// Insert an outline record, replacing any previous entry with its id.
    pub fn insert_outline(&mut self, outline: Outline) {
        log::debug!("library: outline {} ({} chapters)", outline.id, outline.chapter_count());
        self.outlines.insert(outline.id.clone(), outline);
    }

    /// Resolve a version id.
    ///
    /// `None` reports a missing id; an unknown id reports a distinct
    /// not-found condition, so callers can render the two failures
    /// separately.
    pub fn version(&self, id: Option<&str>) -> Result<&Version, LibraryError> {
        let id = id.ok_or(LibraryError::MissingVersionId)?;
        self.versions
            .get(id)
            .ok_or_else(|| LibraryError::VersionNotFound(id.to_string()))
    }

    /// Resolve an outline id. Same contract as [`Library::version`].
    pub fn outline(&self, id: Option<&str>) -> Result<&Outline, LibraryError> {
        let id = id.ok_or(LibraryError::MissingOutlineId)?;
        self.outlines
            .get(id)
            .ok_or_else(|| LibraryError::OutlineNotFound(id.to_string()))
    }

    /// All known version ids, sorted.
    pub fn version_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.versions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All known outline ids, sorted.
    pub fn outline_ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.outlines.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
