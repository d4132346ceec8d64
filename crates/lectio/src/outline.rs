//! Outline records: chapter boundaries into a version's text blob.

use serde::{Deserialize, Serialize};

/// Line-range of one chapter within a version's raw text.
///
/// Line numbers are 1-based and inclusive. Either bound may be absent;
/// the slice extractor falls back to the start/end of the blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterBoundary {
    /// 1-based book number (Genesis = 1).
    pub book: u32,
    /// Chapter number within the book.
    pub number: u32,
    /// 1-based first line, inclusive.
    #[serde(default)]
    pub start_line: Option<usize>,
    /// 1-based last line, inclusive.
    #[serde(default)]
    pub end_line: Option<usize>,
    /// Display name ("Genesis 1").
    #[serde(default)]
    pub name: Option<String>,
}

impl ChapterBoundary {
    /// Create a boundary for the given book and chapter.
    pub fn new(book: u32, number: u32, start_line: Option<usize>, end_line: Option<usize>) -> Self {
        Self {
            book,
            number,
            start_line,
            end_line,
            name: None,
        }
    }
}

/// Chapter boundary metadata for one version layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Stable identifier ("standard-66").
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Chapter boundaries, in reading order.
    pub chapters: Vec<ChapterBoundary>,
}

impl Outline {
    /// Find the boundary for a book/chapter pair.
    pub fn chapter(&self, book: u32, number: u32) -> Option<&ChapterBoundary> {
        self.chapters
            .iter()
            .find(|c| c.book == book && c.number == number)
    }

    /// Number of chapters the outline covers.
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapter_lookup() {
        let outline = Outline {
            id: "test".to_string(),
            name: String::new(),
            chapters: vec![
                ChapterBoundary::new(1, 1, Some(1), Some(31)),
                ChapterBoundary::new(1, 2, Some(32), Some(56)),
            ],
        };
        assert_eq!(outline.chapter(1, 2).unwrap().start_line, Some(32));
        assert!(outline.chapter(2, 1).is_none());
    }

    #[test]
    fn deserializes_with_open_ranges() {
        let outline: Outline = serde_json::from_str(
            r#"{"id":"o","chapters":[{"book":1,"number":1},{"book":1,"number":2,"startLine":5}]}"#,
        )
        .unwrap();
        assert_eq!(outline.chapter_count(), 2);
        assert_eq!(outline.chapters[0].start_line, None);
        assert_eq!(outline.chapters[1].start_line, Some(5));
        assert_eq!(outline.chapters[1].end_line, None);
    }
}
