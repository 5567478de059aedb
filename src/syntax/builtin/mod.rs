//! Built-in rule sets
//!
//! This module compiles the highlighting rules for each supported
//! [`Language`]. Rule order matters: later rules overwrite earlier ones.

mod cpp;
mod html;
mod java;
mod javascript;
mod python;

use log::debug;

use super::language::{Language, RuleSet};
use super::rules::Rule;
use super::tokens::StyleTag;

/// Single-line string literal; greedy, so two literals on a line merge
pub(crate) const DOUBLE_QUOTED: &str = r#"".*""#;
pub(crate) const SINGLE_QUOTED: &str = r"'.*'";
pub(crate) const NUMBER: &str = r"\b\d+\.?\d*\b";
/// Identifier directly followed by a call parenthesis
pub(crate) const CALL: &str = r"\b(?P<tok>[A-Za-z0-9_]+)\(";

/// Compile the rule set for `language`
pub fn compile(language: Language) -> RuleSet {
    let rules = match language {
        Language::Cpp => cpp::cpp_rules(),
        Language::Python => python::python_rules(),
        Language::Java => java::java_rules(),
        Language::JavaScript => javascript::javascript_rules(),
        Language::Html => html::html_rules(),
    };
    debug!("compiled {} rules for {}", rules.rules().len(), language);
    rules
}

/// Compile the rule set for an identifier such as `"py"` or `"javascript"`
///
/// Unrecognized identifiers get the C/C++ rules.
pub fn compile_identifier(identifier: &str) -> RuleSet {
    compile(Language::from_identifier(identifier))
}

/// Add one whole-word rule per keyword, in the given order
pub(crate) fn add_keywords(rules: &mut RuleSet, keywords: &[&str]) {
    for keyword in keywords {
        if let Some(rule) = Rule::word(keyword, StyleTag::Keyword) {
            rules.add_rule(rule);
        }
    }
}

pub(crate) fn add_rule(rules: &mut RuleSet, name: &str, pattern: &str, tag: StyleTag) {
    if let Some(rule) = Rule::new(name, pattern, tag) {
        rules.add_rule(rule);
    }
}
