//! Tag style registry.
//!
//! Holds the ordered set of recognized tags. A persisted override (a JSON
//! array kept in client-side storage) replaces the built-in defaults when it
//! decodes cleanly; anything else falls back to the defaults.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

use crate::error::RegistryError;
use crate::tag::TagStyle;

/// Built-in default tag set.
static DEFAULT_STYLES: Lazy<Vec<TagStyle>> = Lazy::new(|| {
    vec![
        TagStyle::new("b", "<b>", "</b>")
            .with_description("Bold text")
            .with_class("fw-bold"),
        TagStyle::new("i", "<i>", "</i>")
            .with_description("Italic text")
            .with_class("fst-italic"),
        TagStyle::new("u", "<u>", "</u>")
            .with_description("Underlined text")
            .with_class("text-underline"),
        TagStyle::new("FN", "<FN>", "</FN>")
            .with_description("Footnote")
            .with_class("footnote"),
        // Reference footnotes use a two-character open/close convention
        // rather than a single tag name.
        TagStyle::new("RF", "<RF>", "<Rf>")
            .with_description("Reference footnote")
            .with_class("footnote-ref"),
        TagStyle::new("CM", "<CM>", "")
            .with_description("Chapter marker")
            .ignore(),
        TagStyle::new("V", "<V>", "</V>")
            .with_description("Verse number")
            .with_class("verse-num"),
        TagStyle::new("CI", "<CI>", "")
            .with_description("Content indent")
            .with_class("indent-content"),
        TagStyle::new("PI1", "<PI1>", "")
            .with_description("Paragraph indent, level 1")
            .with_class("indent-1"),
    ]
});

/// Ordered set of recognized tags.
///
/// Tag names are unique within a registry; delimiter lookups are
/// case-sensitive exact matches on the literal string.
///
/// Serializes as a plain JSON array of styles, matching the persisted
/// override format.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TagRegistry {
    styles: Vec<TagStyle>,
}

impl TagRegistry {
    /// The built-in default styles.
    pub fn default_styles() -> &'static [TagStyle] {
        &DEFAULT_STYLES
    }

    /// Build a registry from a list of styles.
    ///
    /// Entries without a name or open delimiter are dropped, as are later
    /// duplicates of an already-seen name.
    pub fn from_styles(styles: Vec<TagStyle>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::with_capacity(styles.len());
        for style in styles {
            if !style.is_valid() {
                log::debug!("dropping invalid tag style entry: {:?}", style.name);
                continue;
            }
            if !seen.insert(style.name.clone()) {
                log::debug!("dropping duplicate tag style entry: {}", style.name);
                continue;
            }
            kept.push(style);
        }
        Self { styles: kept }
    }

    /// Decode a persisted registry.
    ///
    /// Strict at the boundary: the payload must be a JSON array of tag
    /// styles with at least one entry surviving validation.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let styles: Vec<TagStyle> = serde_json::from_str(json)?;
        let registry = Self::from_styles(styles);
        if registry.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(registry)
    }

    /// Load the active registry from an optional persisted payload.
    ///
    /// Fails closed: absent or malformed data falls back to the built-in
    /// defaults and never surfaces an error to the caller.
    pub fn load(persisted: Option<&str>) -> Self {
        match persisted {
            None => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|err| {
                log::warn!("ignoring persisted tag styles: {err}");
                Self::default()
            }),
        }
    }

    /// All styles, in registry order.
    pub fn styles(&self) -> &[TagStyle] {
        &self.styles
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True when no styles are registered.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Look up a tag by name (exact, case-sensitive).
    pub fn by_name(&self, name: &str) -> Option<&TagStyle> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Look up a tag by its literal open delimiter (exact, case-sensitive).
    pub fn by_open_tag(&self, open_tag: &str) -> Option<&TagStyle> {
        self.styles.iter().find(|s| s.open_tag == open_tag)
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self {
            styles: DEFAULT_STYLES.clone(),
        }
    }
}
