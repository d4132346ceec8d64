//! Chapter slicing and tagging.

use vmark::{tag_line, LineContext, TagRegistry, TaggedLine};

use crate::outline::ChapterBoundary;

/// Slice the lines belonging to one chapter out of a version's text blob.
///
/// `start_line`/`end_line` are 1-based and inclusive. A missing bound falls
/// back to the start/end of the blob and out-of-range bounds are clamped; a
/// range still inverted after clamping yields no lines. Never errors.
pub fn slice_lines<'a>(content: &'a str, boundary: &ChapterBoundary) -> Vec<&'a str> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        return Vec::new();
    }
    let start = boundary.start_line.unwrap_or(1).max(1);
    let end = boundary.end_line.unwrap_or(lines.len()).min(lines.len());
    if start > end {
        log::debug!(
            "empty chapter slice {}:{} ({}..{} over {} lines)",
            boundary.book,
            boundary.number,
            start,
            end,
            lines.len()
        );
        return Vec::new();
    }
    lines[start - 1..end].to_vec()
}

/// One chapter, tagged line by line.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedChapter {
    book: u32,
    number: u32,
    lines: Vec<TaggedLine>,
}

/// A footnote collected from a chapter, addressable by derived id.
#[derive(Clone, Debug, PartialEq)]
pub struct FootnoteRef {
    /// `fn-{chapter}-{verse}-{occurrence}`.
    pub id: String,
    /// Verse the footnote was attached to.
    pub verse_number: u32,
    /// Raw footnote body.
    pub text: String,
}

/// Slice and tag one chapter.
///
/// Lines without an explicit `<V>` pair fall back to their 1-based offset
/// within the slice as the verse number.
pub fn tag_chapter(
    content: &str,
    boundary: &ChapterBoundary,
    registry: &TagRegistry,
) -> TaggedChapter {
    let lines = slice_lines(content, boundary)
        .into_iter()
        .enumerate()
        .map(|(offset, line)| {
            let ctx = LineContext {
                chapter: boundary.number,
                fallback_verse: offset as u32 + 1,
            };
            tag_line(line, registry, &ctx)
        })
        .collect();
    TaggedChapter {
        book: boundary.book,
        number: boundary.number,
        lines,
    }
}

impl TaggedChapter {
    /// 1-based book number.
    pub fn book(&self) -> u32 {
        self.book
    }

    /// Chapter number within the book.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Tagged lines, in reading order.
    pub fn lines(&self) -> &[TaggedLine] {
        &self.lines
    }

    /// All footnotes in the chapter, in line order.
    pub fn footnotes(&self) -> Vec<FootnoteRef> {
        let mut notes = Vec::new();
        for line in &self.lines {
            for (id, text) in line.footnotes() {
                notes.push(FootnoteRef {
                    id: id.to_string(),
                    verse_number: line.verse(),
                    text: text.to_string(),
                });
            }
        }
        notes
    }

    /// Plain text of every line, delimiters stripped.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(TaggedLine::plain_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn slices_inclusive_range() {
        let content = blob(20);
        let boundary = ChapterBoundary::new(1, 1, Some(10), Some(12));
        assert_eq!(
            slice_lines(&content, &boundary),
            vec!["line 10", "line 11", "line 12"]
        );
    }

    #[test]
    fn missing_bounds_fall_back_to_whole_blob() {
        let content = blob(3);
        let boundary = ChapterBoundary::new(1, 1, None, None);
        assert_eq!(
            slice_lines(&content, &boundary),
            vec!["line 1", "line 2", "line 3"]
        );
    }

    #[test]
    fn out_of_range_bounds_are_clamped() {
        let content = blob(5);
        let boundary = ChapterBoundary::new(1, 1, Some(4), Some(99));
        assert_eq!(slice_lines(&content, &boundary), vec!["line 4", "line 5"]);

        let boundary = ChapterBoundary::new(1, 1, None, Some(2));
        assert_eq!(slice_lines(&content, &boundary), vec!["line 1", "line 2"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let content = blob(5);
        let boundary = ChapterBoundary::new(1, 1, Some(4), Some(2));
        assert!(slice_lines(&content, &boundary).is_empty());
    }

    #[test]
    fn empty_content_is_empty() {
        let boundary = ChapterBoundary::new(1, 1, Some(1), Some(10));
        assert!(slice_lines("", &boundary).is_empty());
    }

    #[test]
    fn fallback_verse_is_offset_within_slice() {
        let content = "before\nfirst chapter line\nsecond chapter line";
        let boundary = ChapterBoundary::new(1, 1, Some(2), Some(3));
        let chapter = tag_chapter(content, &boundary, &TagRegistry::default());
        assert_eq!(chapter.lines()[0].verse(), 1);
        assert_eq!(chapter.lines()[1].verse(), 2);
    }

    #[test]
    fn collects_footnotes_across_lines() {
        let content = "<V>1</V>a<FN>n1</FN>\n<V>2</V>b\n<V>3</V>c<FN>n2</FN><FN>n3</FN>";
        let boundary = ChapterBoundary::new(1, 4, Some(1), Some(3));
        let chapter = tag_chapter(content, &boundary, &TagRegistry::default());
        let notes = chapter.footnotes();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].id, "fn-4-1-0");
        assert_eq!(notes[0].verse_number, 1);
        assert_eq!(notes[1].id, "fn-4-3-0");
        assert_eq!(notes[2].id, "fn-4-3-1");
        assert_eq!(notes[2].text, "n3");
    }
}
