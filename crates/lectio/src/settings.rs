//! Reader settings and the persisted tag-style override.

use serde::{Deserialize, Serialize};
use vmark::TagRegistry;

use crate::error::StorageError;
use crate::storage::{keys, load_or_default, save, Storage};

/// User-facing reader settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Active version id.
    pub version_id: String,
    /// Active outline id.
    pub outline_id: String,
    /// Reader font size in pixels.
    pub font_size: u32,
    /// Render footnote markers inline.
    pub show_footnotes: bool,
    /// Highlight words of Christ.
    pub red_letter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version_id: "kjv".to_string(),
            outline_id: "standard-66".to_string(),
            font_size: 16,
            show_footnotes: true,
            red_letter: false,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults on absent or malformed data.
    pub fn load(store: &dyn Storage) -> Self {
        load_or_default(store, keys::SETTINGS)
    }

    /// Persist these settings.
    pub fn save(&self, store: &mut dyn Storage) -> Result<(), StorageError> {
        save(store, keys::SETTINGS, self)
    }
}

/// Load the active tag registry from the persisted override.
///
/// Absent or malformed override data falls back to the built-in defaults;
/// this never fails.
pub fn load_tag_styles(store: &dyn Storage) -> TagRegistry {
    TagRegistry::load(store.get(keys::TAG_STYLES).as_deref())
}

/// Persist a tag registry as the active override.
pub fn save_tag_styles(
    store: &mut dyn Storage,
    registry: &TagRegistry,
) -> Result<(), StorageError> {
    save(store, keys::TAG_STYLES, registry)
}
