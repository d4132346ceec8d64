//! Inline tag markup parser for Bible text.
//!
//! This crate turns raw lines of Bible text carrying SGML-like inline tags
//! into a typed token stream usable for rendering and footnote extraction.
//!
//! # Overview
//!
//! Source text marks structure with literal delimiter pairs:
//!
//! - `<V>3</V>` - verse number
//! - `<FN>lit. empty</FN>` - footnote
//! - `<RF>cf. Ps 8</Rf>` - reference footnote (asymmetric delimiters)
//! - `<b>text</b>`, `<i>text</i>`, `<u>text</u>` - inline styling
//! - `<CM>` - chapter marker (recognized, no visible output)
//! - `<CI>`, `<PI1>` - indent markers
//!
//! The recognized set lives in a [`TagRegistry`]: the built-in defaults, or
//! a persisted override loaded from client-side storage. Matching is a
//! sequential literal scan, not a grammar - an unterminated tag stays in the
//! output as plain text instead of failing the whole line.
//!
//! # Usage
//!
//! ```
//! use vmark::{tag_line, LineContext, TagRegistry, Token};
//!
//! let registry = TagRegistry::default();
//! let ctx = LineContext { chapter: 1, fallback_verse: 1 };
//! let line = tag_line("<V>3</V>The earth was without form", &registry, &ctx);
//!
//! assert_eq!(line.verse(), 3);
//! assert_eq!(
//!     line.tokens(),
//!     &[
//!         Token::Verse { number: 3 },
//!         Token::Text("The earth was without form".to_string()),
//!     ]
//! );
//! ```

pub mod error;
pub mod registry;
pub mod tag;
pub mod tagger;
pub mod token;

// Re-export main types at crate root
pub use error::RegistryError;
pub use registry::TagRegistry;
pub use tag::TagStyle;
pub use tagger::{tag_line, LineContext, TaggedLine};
pub use token::{footnote_id, Token};
