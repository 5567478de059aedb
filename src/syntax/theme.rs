//! Tag-to-style mapping
//!
//! A theme is fixed once built; the highlighter never touches it. Renderers
//! look tags up by value.

use std::collections::HashMap;

use super::style::{Color, Style};
use super::tokens::StyleTag;

/// Partial style used to override a theme entry field by field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleOverride {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub reverse: Option<bool>,
}

impl StyleOverride {
    /// Apply this override on top of `base`
    pub fn apply(&self, base: Style) -> Style {
        Style {
            fg: self.fg.unwrap_or(base.fg),
            bg: self.bg.unwrap_or(base.bg),
            bold: self.bold.unwrap_or(base.bold),
            italic: self.italic.unwrap_or(base.italic),
            underline: self.underline.unwrap_or(base.underline),
            reverse: self.reverse.unwrap_or(base.reverse),
        }
    }
}

/// Static mapping from [`StyleTag`] to display attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: HashMap<StyleTag, Style>,
}

impl Theme {
    /// A theme where every tag has its default style
    pub fn new() -> Self {
        let styles = StyleTag::ALL
            .iter()
            .map(|tag| (*tag, tag.default_style()))
            .collect();
        Self { styles }
    }

    /// A theme built from defaults plus per-tag overrides
    pub fn with_overrides(overrides: &HashMap<StyleTag, StyleOverride>) -> Self {
        let mut theme = Self::new();
        for (tag, over) in overrides {
            theme.styles.insert(*tag, over.apply(tag.default_style()));
        }
        theme
    }

    /// Style for a tag
    pub fn style(&self, tag: StyleTag) -> Style {
        self.styles.get(&tag).copied().unwrap_or_else(|| tag.default_style())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_uses_tag_defaults() {
        let theme = Theme::default();
        for tag in StyleTag::ALL {
            assert_eq!(theme.style(tag), tag.default_style());
        }
    }

    #[test]
    fn test_override_merges_fields() {
        let mut overrides = HashMap::new();
        overrides.insert(
            StyleTag::Keyword,
            StyleOverride {
                fg: Some(Color::Yellow),
                ..Default::default()
            },
        );
        let theme = Theme::with_overrides(&overrides);

        let keyword = theme.style(StyleTag::Keyword);
        assert_eq!(keyword.fg, Color::Yellow);
        // Untouched fields keep their defaults
        assert!(keyword.bold);
        assert_eq!(theme.style(StyleTag::Number), StyleTag::Number.default_style());
    }
}
