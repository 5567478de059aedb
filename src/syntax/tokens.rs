//! Style tags for syntax highlighting
//!
//! This module defines the semantic roles a highlighted range can have and
//! their default visual styles.

use super::style::{Color, Style};

/// Semantic role assigned to a range of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Reserved words (if, class, def, ...)
    Keyword,
    /// Type names and framework identifiers (QString, ArrayList, ...)
    Type,
    /// Single-line comments (// or #)
    LineComment,
    /// Block comments (/* */, <!-- -->)
    BlockComment,
    /// String literals ("...", '...', `...`, """...""")
    String,
    /// Function names at call or definition sites
    Function,
    /// Numeric literals
    Number,
}

impl StyleTag {
    /// Every tag, in declaration order
    pub const ALL: [StyleTag; 7] = [
        StyleTag::Keyword,
        StyleTag::Type,
        StyleTag::LineComment,
        StyleTag::BlockComment,
        StyleTag::String,
        StyleTag::Function,
        StyleTag::Number,
    ];

    /// Get the default style for this tag
    pub fn default_style(&self) -> Style {
        match self {
            StyleTag::Keyword => Style::fg(Color::Blue).with_bold(),
            StyleTag::Type => Style::fg(Color::Magenta).with_bold(),
            StyleTag::LineComment => Style::fg(Color::Red),
            StyleTag::BlockComment => Style::fg(Color::Red),
            StyleTag::String => Style::fg(Color::Green),
            StyleTag::Function => Style::fg(Color::BrightBlue).with_italic(),
            StyleTag::Number => Style::fg(Color::Cyan),
        }
    }

    /// Get the config name for this tag
    pub fn name(&self) -> &'static str {
        match self {
            StyleTag::Keyword => "keyword",
            StyleTag::Type => "type",
            StyleTag::LineComment => "line-comment",
            StyleTag::BlockComment => "block-comment",
            StyleTag::String => "string",
            StyleTag::Function => "function",
            StyleTag::Number => "number",
        }
    }

    /// Parse a tag from its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(StyleTag::Keyword),
            "type" => Some(StyleTag::Type),
            "line-comment" => Some(StyleTag::LineComment),
            "block-comment" => Some(StyleTag::BlockComment),
            "string" => Some(StyleTag::String),
            "function" => Some(StyleTag::Function),
            "number" => Some(StyleTag::Number),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for tag in StyleTag::ALL {
            assert!(!tag.default_style().is_default(), "{} has no style", tag.name());
        }
    }

    #[test]
    fn test_from_name_roundtrip() {
        for tag in StyleTag::ALL {
            assert_eq!(StyleTag::from_name(tag.name()), Some(tag));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(StyleTag::from_name("Keyword"), None);
        assert_eq!(StyleTag::from_name(""), None);
    }
}
