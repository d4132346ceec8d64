//! Error types for the reading core.

use thiserror::Error;

/// Errors from id-keyed lookups in the library.
///
/// Missing and unknown identifiers are distinct conditions: callers map the
/// former to an inline "nothing selected" message and the latter to a
/// 404-equivalent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LibraryError {
    /// No version id was supplied.
    #[error("no version id supplied")]
    MissingVersionId,

    /// No outline id was supplied.
    #[error("no outline id supplied")]
    MissingOutlineId,

    /// The id did not match any known version.
    #[error("version not found: {0}")]
    VersionNotFound(String),

    /// The id did not match any known outline.
    #[error("outline not found: {0}")]
    OutlineNotFound(String),
}

/// Errors from persisting records through a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The record could not be serialized.
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        /// Well-known storage key of the record.
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
