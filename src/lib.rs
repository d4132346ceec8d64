//! Facade crate for the lectio workspace.
//!
//! Re-exports the two member crates:
//!
//! - [`vmark`] - the inline tag markup parser and tag-style registry
//! - [`lectio`] - the reading core: chapters, versions/outlines, settings,
//!   history and reading plans
//!
//! Library consumers usually depend on `lectio` directly; this crate exists
//! so examples and downstream tooling can pull the whole workspace with one
//! dependency.

pub use lectio;
pub use vmark;
