//! Languages and rule sets for syntax highlighting
//!
//! This module provides the [`RuleSet`] struct that combines ordered pattern
//! rules with the single block-spanning construct of a language, and the
//! per-line highlighting pass that runs them.

use std::fmt;

use log::trace;

use super::rules::{HighlightResult, LineState, Rule, SpanRule};
use super::style::Span;
use super::tokens::StyleTag;

/// The languages a rule set can be compiled for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// C and C++, also the fallback for anything unrecognized
    #[default]
    Cpp,
    Python,
    Java,
    JavaScript,
    /// HTML and XML
    Html,
}

impl Language {
    /// Every language, in declaration order
    pub const ALL: [Language; 5] = [
        Language::Cpp,
        Language::Python,
        Language::Java,
        Language::JavaScript,
        Language::Html,
    ];

    /// Map any identifier to a language, falling back to C/C++
    pub fn from_identifier(identifier: &str) -> Self {
        Self::from_name(identifier).unwrap_or_default()
    }

    /// Parse a language identifier, `None` if it is not recognized
    pub fn from_name(identifier: &str) -> Option<Self> {
        let language = match identifier.trim().to_lowercase().as_str() {
            "cpp" | "c" | "h" | "hpp" | "c++" => Language::Cpp,
            "py" | "python" => Language::Python,
            "java" => Language::Java,
            "js" | "javascript" => Language::JavaScript,
            "html" | "htm" | "xml" => Language::Html,
            _ => return None,
        };
        Some(language)
    }

    /// Canonical identifier
    pub fn name(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Python => "python",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Html => "html",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete, immutable rule set for one language
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Language this set was compiled for
    pub language: Language,
    /// Pattern rules, in evaluation order (later rules win)
    rules: Vec<Rule>,
    /// Block-spanning construct, if the language has one
    span_rule: Option<SpanRule>,
}

impl RuleSet {
    /// Create a new empty rule set
    pub fn new(language: Language) -> Self {
        Self {
            language,
            rules: Vec::new(),
            span_rule: None,
        }
    }

    /// Append a rule; it runs after every rule already added
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Set the block-spanning construct, replacing any previous one
    pub fn set_span_rule(&mut self, rule: SpanRule) {
        self.span_rule = Some(rule);
    }

    /// Pattern rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The block-spanning construct
    pub fn span_rule(&self) -> Option<&SpanRule> {
        self.span_rule.as_ref()
    }

    /// Highlight a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans and the state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: LineState) -> HighlightResult {
        if text.is_empty() {
            return HighlightResult {
                spans: Vec::new(),
                end_state: if self.span_rule.is_some() { prev_state } else { LineState::Normal },
            };
        }

        let mut tags: Vec<Option<StyleTag>> = vec![None; text.len()];

        for rule in &self.rules {
            for (start, end) in rule.ranges(text) {
                paint(&mut tags, start, end, rule.tag);
            }
        }

        let end_state = match &self.span_rule {
            Some(span_rule) => resolve_spans(span_rule, text, prev_state, &mut tags),
            None => LineState::Normal,
        };

        let spans = collect_spans(&tags);
        trace!("highlighted {} bytes into {} spans, exit {:?}", text.len(), spans.len(), end_state);

        HighlightResult { spans, end_state }
    }
}

/// Highlight one line with `rules`, given the exit state of the line above
pub fn highlight_line(text: &str, rules: &RuleSet, prev_state: LineState) -> HighlightResult {
    rules.highlight_line(text, prev_state)
}

fn paint(tags: &mut [Option<StyleTag>], start: usize, end: usize, tag: StyleTag) {
    let end = end.min(tags.len());
    if start < end {
        tags[start..end].fill(Some(tag));
    }
}

/// Paint block-spanning constructs over the line and compute its exit state
fn resolve_spans(
    rule: &SpanRule,
    text: &str,
    prev_state: LineState,
    tags: &mut [Option<StyleTag>],
) -> LineState {
    let mut pos = 0;

    if prev_state.is_inside_span() {
        match rule.find_end(text, 0) {
            Some((_, close)) => {
                paint(tags, 0, close, rule.tag);
                pos = close;
            }
            None => {
                paint(tags, 0, text.len(), rule.tag);
                return LineState::InSpan;
            }
        }
    }

    while let Some((open, open_end)) = rule.find_start(text, pos) {
        match rule.find_end(text, open_end) {
            Some((_, close)) => {
                paint(tags, open, close, rule.tag);
                // An empty delimiter must not stall the scan
                pos = if close > pos { close } else { next_char_boundary(text, pos) };
                if pos >= text.len() {
                    break;
                }
            }
            None => {
                paint(tags, open, text.len(), rule.tag);
                return LineState::InSpan;
            }
        }
    }

    LineState::Normal
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    let mut next = pos + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

/// Merge per-byte tags into runs
fn collect_spans(tags: &[Option<StyleTag>]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for (pos, tag) in tags.iter().enumerate() {
        let Some(tag) = *tag else { continue };
        match spans.last_mut() {
            Some(last) if last.end == pos && last.tag == tag => last.end = pos + 1,
            _ => spans.push(Span::new(pos, pos + 1, tag)),
        }
    }
    spans
}
