//! File suffix to language mapping

use std::collections::HashMap;
use std::path::Path;

use super::language::Language;

/// Built-in suffix table
const DEFAULT_EXTENSIONS: &[(&str, Language)] = &[
    ("cpp", Language::Cpp),
    ("cxx", Language::Cpp),
    ("cc", Language::Cpp),
    ("c", Language::Cpp),
    ("h", Language::Cpp),
    ("hpp", Language::Cpp),
    ("hxx", Language::Cpp),
    ("py", Language::Python),
    ("java", Language::Java),
    ("js", Language::JavaScript),
    ("html", Language::Html),
    ("xml", Language::Html),
];

/// Table from file suffix to [`Language`]
#[derive(Debug, Clone)]
pub struct FileTypes {
    extension_map: HashMap<String, Language>,
}

impl FileTypes {
    /// Create the table with the built-in suffixes
    pub fn new() -> Self {
        let extension_map = DEFAULT_EXTENSIONS
            .iter()
            .map(|(ext, lang)| (ext.to_string(), *lang))
            .collect();
        Self { extension_map }
    }

    /// Map a suffix (without the dot) to a language, replacing any existing entry
    pub fn insert(&mut self, extension: &str, language: Language) {
        let ext = extension.trim_start_matches('.').to_lowercase();
        self.extension_map.insert(ext, language);
    }

    /// Look up a suffix, `None` if it is not in the table
    pub fn lookup(&self, extension: &str) -> Option<Language> {
        let ext = extension.trim_start_matches('.').to_lowercase();
        self.extension_map.get(&ext).copied()
    }

    /// Detect language from filename, falling back to C/C++
    pub fn detect(&self, path: &Path) -> Language {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.lookup(ext))
            .unwrap_or_default()
    }
}

impl Default for FileTypes {
    fn default() -> Self {
        Self::new()
    }
}
