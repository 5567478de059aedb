//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types used to classify the text of a
//! single line, and the per-line state carried between lines.

use regex::Regex;

use super::style::Span;
use super::tokens::StyleTag;

/// Name of the capture group that narrows a rule to part of its match
pub const TOKEN_GROUP: &str = "tok";

/// A single-line pattern rule
///
/// Matches a regex pattern and assigns a tag to every match. When the
/// pattern has a capture group named `tok`, only that group is tagged; the
/// rest of the match is context (e.g. the `(` after a function name).
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging and rule-order inspection
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Tag to assign to matches
    pub tag: StyleTag,
}

impl Rule {
    /// Create a new rule, or `None` if the pattern does not compile
    pub fn new(name: &str, pattern: &str, tag: StyleTag) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            tag,
        })
    }

    /// Create a rule matching `word` only as a whole word
    pub fn word(word: &str, tag: StyleTag) -> Option<Self> {
        Self::new(word, &format!(r"\b{}\b", regex::escape(word)), tag)
    }

    /// Collect every non-overlapping match, scanning left to right
    ///
    /// Returns byte ranges of the tagged part of each match.
    pub fn ranges(&self, text: &str) -> Vec<(usize, usize)> {
        if self.pattern.capture_names().any(|n| n == Some(TOKEN_GROUP)) {
            self.pattern
                .captures_iter(text)
                .filter_map(|caps| caps.name(TOKEN_GROUP).or_else(|| caps.get(0)))
                .map(|m| (m.start(), m.end()))
                .collect()
        } else {
            self.pattern
                .find_iter(text)
                .map(|m| (m.start(), m.end()))
                .collect()
        }
    }
}

/// Delimiters of the block-spanning construct of a language
///
/// These track state across lines for constructs that can span multiple
/// lines (block comments, triple-quoted strings).
#[derive(Debug, Clone)]
pub struct SpanRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that starts the construct
    pub start: Regex,
    /// Pattern that ends the construct
    pub end: Regex,
    /// Tag painted over the whole construct, delimiters included
    pub tag: StyleTag,
}

impl SpanRule {
    /// Create a new span rule
    pub fn new(name: &str, start_pattern: &str, end_pattern: &str, tag: StyleTag) -> Option<Self> {
        let start = Regex::new(start_pattern).ok()?;
        let end = Regex::new(end_pattern).ok()?;
        Some(Self {
            name: name.to_string(),
            start,
            end,
            tag,
        })
    }

    /// Find start of this construct at or after `from`
    pub fn find_start(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.start.find_at(text, from).map(|m| (m.start(), m.end()))
    }

    /// Find end of this construct at or after `from`
    pub fn find_end(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.end.find_at(text, from).map(|m| (m.start(), m.end()))
    }
}

/// Exit state of a line
///
/// Stored per line: whether the line ends inside an unterminated
/// block-spanning construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineState {
    #[default]
    Normal,
    InSpan,
}

impl LineState {
    /// Check if we're inside a block-spanning construct
    pub fn is_inside_span(&self) -> bool {
        *self == LineState::InSpan
    }

    /// Check if we're in normal state
    pub fn is_normal(&self) -> bool {
        *self == LineState::Normal
    }
}

/// Result of highlighting a single line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightResult {
    /// Tagged ranges, ordered by start, non-overlapping
    pub spans: Vec<Span>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}
