//! Line tagger.
//!
//! Turns one raw line of Bible text into an ordered token stream using the
//! active tag registry. Matching is a sequential literal scan, not a
//! grammar: malformed or unterminated tags stay in the output as plain text
//! instead of failing the line.

use crate::registry::TagRegistry;
use crate::tag::TagStyle;
use crate::token::{footnote_id, Token};

/// Tag names the tagger treats as footnote-producing.
const FOOTNOTE_TAGS: [&str; 2] = ["FN", "RF"];

/// Tag name carrying the explicit verse number.
const VERSE_TAG: &str = "V";

/// Per-line tagging context supplied by the caller.
#[derive(Clone, Copy, Debug)]
pub struct LineContext {
    /// Chapter number, used in footnote identifiers.
    pub chapter: u32,
    /// Verse number to use when the line carries no `<V>` pair, typically
    /// the 1-based line offset within the chapter slice.
    pub fallback_verse: u32,
}

/// The result of tagging one line.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedLine {
    verse: u32,
    explicit_verse: bool,
    tokens: Vec<Token>,
}

impl TaggedLine {
    /// Resolved verse number: the `<V>` value, or the caller fallback.
    pub fn verse(&self) -> u32 {
        self.verse
    }

    /// True when the number came from a `<V>` pair on this line.
    pub fn has_explicit_verse(&self) -> bool {
        self.explicit_verse
    }

    /// Tokens in input order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Footnotes in order, as (id, body) pairs.
    pub fn footnotes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().filter_map(Token::as_footnote)
    }

    /// Visible text with all recognized delimiters stripped.
    ///
    /// Footnote bodies and verse numbers are annotations, not running text,
    /// and are excluded.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Styled { text, .. } => out.push_str(text),
                Token::Verse { .. } | Token::Footnote { .. } => {}
            }
        }
        out
    }
}

/// One located delimiter match within the line.
struct TagMatch<'a> {
    start: usize,
    end: usize,
    inner: &'a str,
    style: &'a TagStyle,
}

/// Tag one line of raw text.
///
/// Contracts: token order matches input character order; a line with zero
/// matches yields a single [`Token::Text`] equal to the input; an open
/// delimiter with no close before end of line is left as literal text.
///
/// Known limitation, preserved from the source data model: the footnote
/// occurrence index restarts on every line, so a verse spanning multiple
/// lines can repeat footnote identifiers. Lines are tagged independently.
pub fn tag_line(line: &str, registry: &TagRegistry, ctx: &LineContext) -> TaggedLine {
    let mut matches = find_matches(line, registry);

    // Resolve the verse number before walking the matches: a footnote can
    // precede the verse tag and still needs the final number in its id.
    let mut verse = ctx.fallback_verse;
    let mut explicit_verse = false;
    matches.retain(|m| {
        if m.style.name != VERSE_TAG || m.style.ignored {
            return true;
        }
        if explicit_verse {
            // At most one explicit verse number per line; later pairs are
            // left as literal text.
            return false;
        }
        match m.inner.trim().parse::<u32>() {
            Ok(number) => {
                verse = number;
                explicit_verse = true;
                true
            }
            // Non-numeric content: leave the tag literal.
            Err(_) => false,
        }
    });

    let mut tokens = Vec::new();
    let mut pos = 0usize;
    let mut footnote_index = 0usize;

    for m in &matches {
        if m.start < pos {
            // Starts inside an already-consumed span; the scan does not
            // recurse into enclosed text.
            continue;
        }
        if m.start > pos {
            tokens.push(Token::Text(line[pos..m.start].to_string()));
        }
        emit(m, ctx.chapter, verse, &mut footnote_index, &mut tokens);
        pos = m.end;
    }
    if pos < line.len() {
        tokens.push(Token::Text(line[pos..].to_string()));
    }
    if matches.is_empty() && tokens.is_empty() {
        // Zero matches: the whole line is one plain text run, empty lines
        // included.
        tokens.push(Token::Text(line.to_string()));
    }

    TaggedLine {
        verse,
        explicit_verse,
        tokens,
    }
}

/// Locate every delimiter match for every registry entry, ordered by start
/// offset. Matches from earlier registry entries win ties.
fn find_matches<'a>(line: &'a str, registry: &'a TagRegistry) -> Vec<TagMatch<'a>> {
    let mut matches = Vec::new();
    for style in registry.styles() {
        if style.open_tag.is_empty() {
            continue;
        }
        if style.is_standalone() {
            let mut from = 0;
            while let Some(at) = line[from..].find(style.open_tag.as_str()) {
                let start = from + at;
                let end = start + style.open_tag.len();
                matches.push(TagMatch {
                    start,
                    end,
                    inner: "",
                    style,
                });
                from = end;
            }
        } else {
            let mut from = 0;
            while let Some(at) = line[from..].find(style.open_tag.as_str()) {
                let start = from + at;
                let inner_start = start + style.open_tag.len();
                // Shortest enclosed span: the first close delimiter after
                // the open wins. No close before end of line means no match
                // here or later, so the open stays literal.
                let Some(close_at) = line[inner_start..].find(style.close_tag.as_str()) else {
                    break;
                };
                let inner_end = inner_start + close_at;
                let end = inner_end + style.close_tag.len();
                matches.push(TagMatch {
                    start,
                    end,
                    inner: &line[inner_start..inner_end],
                    style,
                });
                from = end;
            }
        }
    }
    // Stable sort: per-entry matches were pushed left to right, and entries
    // earlier in the registry were pushed first.
    matches.sort_by_key(|m| m.start);
    matches
}

fn emit(
    m: &TagMatch<'_>,
    chapter: u32,
    verse: u32,
    footnote_index: &mut usize,
    tokens: &mut Vec<Token>,
) {
    let style = m.style;
    if style.ignored {
        // Ignored tags consume their delimiters only; a paired one keeps
        // its enclosed text in the running output.
        if !m.inner.is_empty() {
            tokens.push(Token::Text(m.inner.to_string()));
        }
        return;
    }
    if style.name == VERSE_TAG {
        tokens.push(Token::Verse { number: verse });
        return;
    }
    if FOOTNOTE_TAGS.contains(&style.name.as_str()) {
        let id = footnote_id(chapter, verse, *footnote_index);
        *footnote_index += 1;
        tokens.push(Token::Footnote {
            id,
            text: m.inner.to_string(),
        });
        return;
    }
    tokens.push(Token::Styled {
        tag: style.name.clone(),
        css_class: style.css_class.clone(),
        text: m.inner.to_string(),
    });
}
