//! Tag style definitions.
//!
//! A [`TagStyle`] describes one inline tag the parser recognizes: its
//! delimiter literals, a presentation hint, and whether it is ignored.

use serde::{Deserialize, Serialize};

/// One recognized inline tag.
///
/// Delimiters are literal strings, not patterns. Most tags are symmetric
/// pairs (`<b>`...`</b>`), but a pair may be asymmetric (`<RF>`...`<Rf>`),
/// and standalone markers such as `<CM>` leave the close delimiter empty.
///
/// Serialization uses the camelCase field names of the persisted override
/// format, so a stored registry round-trips unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStyle {
    /// Short identifier, unique within a registry ("b", "FN", "V").
    pub name: String,
    /// Literal open delimiter.
    pub open_tag: String,
    /// Literal close delimiter; empty for standalone markers.
    #[serde(default)]
    pub close_tag: String,
    /// Human-readable label.
    #[serde(default)]
    pub description: String,
    /// Presentation hint, opaque to the parser.
    #[serde(default)]
    pub css_class: String,
    /// Recognized but contributes no visible output.
    #[serde(default)]
    pub ignored: bool,
}

impl TagStyle {
    /// Create a tag style with the given name and delimiters.
    pub fn new(
        name: impl Into<String>,
        open_tag: impl Into<String>,
        close_tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            open_tag: open_tag.into(),
            close_tag: close_tag.into(),
            description: String::new(),
            css_class: String::new(),
            ignored: false,
        }
    }

    /// Set the human-readable label.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the presentation hint.
    pub fn with_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Mark this tag as recognized-but-invisible.
    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Standalone markers have no close delimiter and enclose no text.
    pub fn is_standalone(&self) -> bool {
        self.close_tag.is_empty()
    }

    /// A usable entry needs a name and an open delimiter.
    pub(crate) fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.open_tag.is_empty()
    }
}
