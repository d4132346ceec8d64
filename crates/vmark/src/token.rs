//! Parser output tokens.
//!
//! Tokens are produced per line and live only for the duration of a render
//! or extraction pass; nothing here is persisted.

/// Derived footnote identifier for a chapter, verse and per-line occurrence.
///
/// The occurrence index restarts at zero on every line.
pub fn footnote_id(chapter: u32, verse: u32, occurrence: usize) -> String {
    format!("fn-{chapter}-{verse}-{occurrence}")
}

/// One token produced by tagging a line.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Explicit verse marker.
    Verse {
        /// The enclosed verse number.
        number: u32,
    },
    /// Inline style span.
    ///
    /// `text` is the raw enclosed text; nested or adjacent tags inside it
    /// are kept verbatim (the scan does not recurse).
    Styled {
        /// Registry name of the tag ("b", "u", ...).
        tag: String,
        /// Presentation hint carried over from the registry entry.
        css_class: String,
        /// Raw enclosed text.
        text: String,
    },
    /// Footnote body with its derived identifier.
    Footnote {
        /// `fn-{chapter}-{verse}-{occurrence}`.
        id: String,
        /// Raw footnote body.
        text: String,
    },
    /// Untagged run of characters.
    Text(String),
}

impl Token {
    /// True for plain text runs.
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }

    /// The text run, if this is a plain text token.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The (id, body) pair, if this is a footnote token.
    pub fn as_footnote(&self) -> Option<(&str, &str)> {
        match self {
            Token::Footnote { id, text } => Some((id, text)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footnote_id_format() {
        assert_eq!(footnote_id(1, 3, 0), "fn-1-3-0");
        assert_eq!(footnote_id(119, 176, 2), "fn-119-176-2");
    }

    #[test]
    fn accessors() {
        let text = Token::Text("abc".to_string());
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("abc"));
        assert_eq!(text.as_footnote(), None);

        let note = Token::Footnote {
            id: "fn-1-1-0".to_string(),
            text: "Heb. tohu".to_string(),
        };
        assert!(!note.is_text());
        assert_eq!(note.as_footnote(), Some(("fn-1-1-0", "Heb. tohu")));
    }
}
