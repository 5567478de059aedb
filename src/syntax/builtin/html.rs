//! HTML/XML rules

use crate::syntax::language::{Language, RuleSet};
use crate::syntax::rules::SpanRule;
use crate::syntax::tokens::StyleTag;

use super::{add_rule, DOUBLE_QUOTED};

/// Create the markup rule set
pub fn html_rules() -> RuleSet {
    let mut rules = RuleSet::new(Language::Html);

    add_rule(&mut rules, "tag", r"<[^>]+>", StyleTag::Keyword);
    add_rule(&mut rules, "entity", r"&[a-zA-Z]+;", StyleTag::Type);
    add_rule(&mut rules, "attribute_value", DOUBLE_QUOTED, StyleTag::String);

    if let Some(rule) = SpanRule::new("comment", r"<!--", r"-->", StyleTag::BlockComment) {
        rules.set_span_rule(rule);
    }

    rules
}
