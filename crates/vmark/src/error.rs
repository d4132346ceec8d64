//! Error types for registry loading.

use thiserror::Error;

/// Errors raised when decoding a persisted tag-style registry.
///
/// These never reach rendering: `TagRegistry::load` recovers from all of
/// them by falling back to the built-in defaults.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The persisted payload was not a JSON array of tag styles.
    #[error("persisted tag styles are not a JSON array: {0}")]
    Json(#[from] serde_json::Error),

    /// Every entry was dropped during validation.
    #[error("no valid tag styles after validation")]
    Empty,
}
