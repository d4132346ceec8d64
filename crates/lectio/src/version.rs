//! Version records.

use serde::{Deserialize, Serialize};

/// One complete Bible translation: descriptive metadata plus the raw
/// newline-delimited text blob the outline's line ranges index into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Stable identifier ("kjv").
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Newline-delimited verse/heading lines.
    pub content: String,
}

impl Version {
    /// Create a version record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// Lines of the raw text blob, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// Number of lines in the text blob.
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
