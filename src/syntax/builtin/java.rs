//! Java rules

use crate::syntax::language::{Language, RuleSet};
use crate::syntax::rules::SpanRule;
use crate::syntax::tokens::StyleTag;

use super::{add_keywords, add_rule, CALL, DOUBLE_QUOTED, NUMBER};

pub(crate) const KEYWORDS: &[&str] = &[
    "public", "private", "protected", "static", "final", "class", "interface",
    "extends", "implements", "package", "import", "if", "else", "for",
    "while", "do", "switch", "case", "break", "continue", "return",
    "try", "catch", "finally", "throw", "throws", "new", "this",
    "super", "true", "false", "null", "int", "void", "boolean",
    "char", "double", "float", "long", "short", "byte",
];

/// Create the Java rule set
pub fn java_rules() -> RuleSet {
    let mut rules = RuleSet::new(Language::Java);

    add_keywords(&mut rules, KEYWORDS);

    add_rule(&mut rules, "class_name", r"\b[A-Z][a-zA-Z0-9_]*\b", StyleTag::Type);
    add_rule(&mut rules, "call", CALL, StyleTag::Function);
    add_rule(&mut rules, "string", DOUBLE_QUOTED, StyleTag::String);
    add_rule(&mut rules, "line_comment", r"//.*", StyleTag::LineComment);
    add_rule(&mut rules, "number", NUMBER, StyleTag::Number);

    if let Some(rule) = SpanRule::new("block_comment", r"/\*", r"\*/", StyleTag::BlockComment) {
        rules.set_span_rule(rule);
    }

    rules
}
