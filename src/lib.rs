//! linelight - incremental, line-based syntax highlighting
//!
//! A document is a sequence of lines. Each line is classified with an
//! ordered list of regex rules, and block comments or triple-quoted strings
//! are carried from one line to the next through a per-line exit state.

pub mod config;
pub mod document;
pub mod error;
pub mod line;
pub mod render;
pub mod syntax;

pub use document::{Document, LineChange};
pub use error::{Error, Result};
pub use line::Line;
pub use syntax::{Highlighter, Language, LineState, RuleSet, Span, StyleTag};
