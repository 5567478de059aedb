//! Configuration file support
//!
//! Loads settings from ~/.linelight.toml (or %USERPROFILE%\.linelight.toml on Windows)
//!
//! Example:
//! ```toml
//! # linelight configuration
//! enabled = true
//! line-numbers = true
//! tab-width = 4
//!
//! [extensions]
//! tpp = "cpp"
//! pyw = "python"
//!
//! [styles.keyword]
//! fg = "bright-blue"
//! bold = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::syntax::{Color, FileTypes, Language, StyleOverride, StyleTag, Theme};

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether highlighting is applied at all
    pub enabled: bool,
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Tab width for display
    pub tab_width: usize,
    /// Extra suffix to language mappings
    pub extensions: HashMap<String, Language>,
    /// Per-tag style overrides
    pub styles: HashMap<StyleTag, StyleOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            show_line_numbers: false,
            tab_width: 8,
            extensions: HashMap::new(),
            styles: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".linelight.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".linelight.toml"))
        }
    }

    /// Load `path` if it exists, the defaults otherwise
    ///
    /// A file that exists but does not parse is an error.
    pub fn load_if_exists(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}", path.display());
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(value) = table.get("enabled") {
            self.enabled = expect_bool("enabled", value)?;
        }

        if let Some(value) = table.get("line-numbers") {
            self.show_line_numbers = expect_bool("line-numbers", value)?;
        }

        if let Some(value) = table.get("tab-width") {
            let n = value.as_integer().ok_or_else(|| invalid("tab-width", value))?;
            self.tab_width = n.clamp(1, 16) as usize; // Between 1 and 16
        }

        if let Some(value) = table.get("extensions") {
            let extensions = value.as_table().ok_or_else(|| invalid("extensions", value))?;
            for (ext, lang) in extensions {
                let name = lang.as_str().ok_or_else(|| invalid(ext, lang))?;
                let language =
                    Language::from_name(name).ok_or_else(|| Error::UnknownLanguage(name.to_string()))?;
                self.extensions.insert(ext.to_lowercase(), language);
            }
        }

        if let Some(value) = table.get("styles") {
            let styles = value.as_table().ok_or_else(|| invalid("styles", value))?;
            for (name, style) in styles {
                let tag = StyleTag::from_name(name).ok_or_else(|| Error::UnknownStyleTag(name.clone()))?;
                let style = style.as_table().ok_or_else(|| invalid(name, style))?;
                self.styles.insert(tag, parse_style(style)?);
            }
        }

        Ok(())
    }

    /// Theme with this config's overrides applied
    pub fn theme(&self) -> Theme {
        Theme::with_overrides(&self.styles)
    }

    /// Suffix table with this config's extra mappings
    pub fn file_types(&self) -> FileTypes {
        let mut types = FileTypes::new();
        for (ext, language) in &self.extensions {
            types.insert(ext, *language);
        }
        types
    }
}

fn parse_style(table: &Table) -> Result<StyleOverride> {
    let mut style = StyleOverride::default();
    for (key, value) in table {
        match key.as_str() {
            "fg" => style.fg = Some(expect_color(value)?),
            "bg" => style.bg = Some(expect_color(value)?),
            "bold" => style.bold = Some(expect_bool(key, value)?),
            "italic" => style.italic = Some(expect_bool(key, value)?),
            "underline" => style.underline = Some(expect_bool(key, value)?),
            "reverse" => style.reverse = Some(expect_bool(key, value)?),
            _ => return Err(invalid(key, value)),
        }
    }
    Ok(style)
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| invalid(key, value))
}

fn expect_color(value: &Value) -> Result<Color> {
    let name = value.as_str().ok_or_else(|| Error::UnknownColor(value.to_string()))?;
    Color::from_name(name).ok_or_else(|| Error::UnknownColor(name.to_string()))
}

fn invalid(key: &str, value: &Value) -> Error {
    Error::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}
