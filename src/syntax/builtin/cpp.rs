//! C/C++ rules

use crate::syntax::language::{Language, RuleSet};
use crate::syntax::rules::SpanRule;
use crate::syntax::tokens::StyleTag;

use super::{add_keywords, add_rule, CALL, DOUBLE_QUOTED, NUMBER, SINGLE_QUOTED};

pub(crate) const KEYWORDS: &[&str] = &[
    "char", "class", "const", "double", "enum", "explicit", "friend", "inline",
    "int", "long", "namespace", "operator", "private", "protected", "public", "short",
    "signals", "signed", "slots", "static", "struct", "template", "typedef", "typename",
    "union", "unsigned", "virtual", "void", "volatile", "bool", "if", "else",
    "for", "while", "do", "switch", "case", "break", "continue", "return",
    "goto", "try", "catch", "throw", "new", "delete", "sizeof", "this",
    "true", "false", "nullptr", "null", "auto", "using",
];

/// Create the C/C++ rule set (also the fallback for unknown languages)
pub fn cpp_rules() -> RuleSet {
    let mut rules = RuleSet::new(Language::Cpp);

    add_keywords(&mut rules, KEYWORDS);

    // Qt-style framework classes
    add_rule(&mut rules, "framework_type", r"\bQ[A-Za-z]+\b", StyleTag::Type);
    add_rule(&mut rules, "call", CALL, StyleTag::Function);
    add_rule(&mut rules, "double_string", DOUBLE_QUOTED, StyleTag::String);
    add_rule(&mut rules, "single_string", SINGLE_QUOTED, StyleTag::String);
    add_rule(&mut rules, "line_comment", r"//.*", StyleTag::LineComment);
    add_rule(&mut rules, "number", NUMBER, StyleTag::Number);

    if let Some(rule) = SpanRule::new("block_comment", r"/\*", r"\*/", StyleTag::BlockComment) {
        rules.set_span_rule(rule);
    }

    rules
}
