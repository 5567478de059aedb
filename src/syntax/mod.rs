//! Syntax highlighting
//!
//! Two pieces do the work:
//! - [`compile`] turns a [`Language`] into an immutable [`RuleSet`]
//! - [`RuleSet::highlight_line`] tags one line given the exit state of the
//!   line above, and [`Highlighter`] drives it incrementally over a document
//!
//! Everything visual ([`Theme`], [`Style`]) stays outside that core.

mod builtin;
mod filetype;
mod highlighter;
mod language;
mod rules;
mod style;
mod theme;
mod tokens;

pub use builtin::{compile, compile_identifier};
pub use filetype::FileTypes;
pub use highlighter::Highlighter;
pub use language::{highlight_line, Language, RuleSet};
pub use rules::{HighlightResult, LineState, Rule, SpanRule};
pub use style::{Color, Span, Style};
pub use theme::{StyleOverride, Theme};
pub use tokens::StyleTag;
