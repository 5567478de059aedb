//! Python rules

use crate::syntax::language::{Language, RuleSet};
use crate::syntax::rules::SpanRule;
use crate::syntax::tokens::StyleTag;

use super::{add_keywords, add_rule, DOUBLE_QUOTED, NUMBER};

pub(crate) const KEYWORDS: &[&str] = &[
    "def", "class", "if", "else", "elif", "for", "while",
    "return", "import", "from", "as", "try", "except", "finally",
    "raise", "with", "pass", "break", "continue", "True", "False",
    "None", "and", "or", "not", "in", "is", "lambda",
    "yield", "global", "nonlocal",
];

/// Create the Python rule set
pub fn python_rules() -> RuleSet {
    let mut rules = RuleSet::new(Language::Python);

    add_keywords(&mut rules, KEYWORDS);

    // Only the name after `def`, the keyword keeps its own tag
    add_rule(&mut rules, "definition", r"\bdef\s+(?P<tok>\w+)", StyleTag::Function);
    add_rule(&mut rules, "double_string", DOUBLE_QUOTED, StyleTag::String);
    // Single quotes only count when tripled on one line
    add_rule(&mut rules, "triple_single_string", r"'''.*'''", StyleTag::String);
    add_rule(&mut rules, "comment", r"#.*", StyleTag::LineComment);
    add_rule(&mut rules, "number", NUMBER, StyleTag::Number);

    // Docstrings and other long strings share one delimiter
    if let Some(rule) = SpanRule::new("triple_quote", r#"""""#, r#"""""#, StyleTag::String) {
        rules.set_span_rule(rule);
    }

    rules
}
