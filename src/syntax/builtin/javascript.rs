//! JavaScript rules

use crate::syntax::language::{Language, RuleSet};
use crate::syntax::rules::SpanRule;
use crate::syntax::tokens::StyleTag;

use super::{add_keywords, add_rule, DOUBLE_QUOTED, NUMBER, SINGLE_QUOTED};

pub(crate) const KEYWORDS: &[&str] = &[
    "function", "var", "let", "const", "if", "else", "for",
    "while", "do", "switch", "case", "break", "continue", "return",
    "try", "catch", "finally", "throw", "new", "this", "true",
    "false", "null", "undefined", "typeof", "instanceof", "in", "class",
    "extends", "super", "import", "export", "default", "async", "await",
];

/// Create the JavaScript rule set
pub fn javascript_rules() -> RuleSet {
    let mut rules = RuleSet::new(Language::JavaScript);

    add_keywords(&mut rules, KEYWORDS);

    // `function name(...)` and `name: function(...)`
    add_rule(&mut rules, "function_decl", r"\bfunction\s+(?P<tok>\w+)", StyleTag::Function);
    add_rule(&mut rules, "function_property", r"\b(?P<tok>\w+)\s*:\s*function\b", StyleTag::Function);
    add_rule(&mut rules, "double_string", DOUBLE_QUOTED, StyleTag::String);
    add_rule(&mut rules, "single_string", SINGLE_QUOTED, StyleTag::String);
    add_rule(&mut rules, "template_string", r"`.*`", StyleTag::String);
    add_rule(&mut rules, "line_comment", r"//.*", StyleTag::LineComment);
    add_rule(&mut rules, "number", NUMBER, StyleTag::Number);

    if let Some(rule) = SpanRule::new("block_comment", r"/\*", r"\*/", StyleTag::BlockComment) {
        rules.set_span_rule(rule);
    }

    rules
}
