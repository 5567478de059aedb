//! Incremental highlighting over a document
//!
//! The [`Highlighter`] keeps the spans and exit state of every line. After an
//! edit it re-highlights forward from the first changed line and stops as soon
//! as a line past the edit ends in the same state it ended in before: every
//! line below it would see the same entry state and produce the same result.

use std::ops::Range;
use std::sync::Arc;

use log::debug;

use super::builtin;
use super::language::{Language, RuleSet};
use super::rules::LineState;
use super::style::Span;
use crate::document::{Document, LineChange};

/// Cached highlighting of one line
#[derive(Debug, Clone, Default)]
struct LineHighlight {
    spans: Vec<Span>,
    end_state: LineState,
    /// False until the line has been highlighted with the current rules
    computed: bool,
}

/// Per-document highlighting state
pub struct Highlighter {
    /// Active rules, replaced wholesale on a language switch
    rules: Arc<RuleSet>,
    /// One entry per document line
    lines: Vec<LineHighlight>,
}

impl Highlighter {
    /// Create a highlighter for `language`; nothing is highlighted yet
    pub fn new(language: Language) -> Self {
        Self::with_rule_set(Arc::new(builtin::compile(language)))
    }

    /// Create a highlighter using an already compiled rule set
    pub fn with_rule_set(rules: Arc<RuleSet>) -> Self {
        Self {
            rules,
            lines: Vec::new(),
        }
    }

    /// Language of the active rule set
    pub fn language(&self) -> Language {
        self.rules.language
    }

    /// The active rule set
    pub fn rule_set(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Number of lines in the cache
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cached spans of a line, empty if out of range
    pub fn spans(&self, line_idx: usize) -> &[Span] {
        self.lines.get(line_idx).map(|l| l.spans.as_slice()).unwrap_or(&[])
    }

    /// Exit state of a line
    pub fn line_state(&self, line_idx: usize) -> LineState {
        self.lines.get(line_idx).map(|l| l.end_state).unwrap_or_default()
    }

    /// Entry state of a line (the exit state of the line above)
    pub fn previous_state(&self, line_idx: usize) -> LineState {
        match line_idx {
            0 => LineState::Normal,
            n => self.line_state(n - 1),
        }
    }

    /// Switch language and re-highlight the whole document
    ///
    /// Unknown identifiers select the C/C++ rules.
    pub fn set_language(&mut self, identifier: &str, doc: &Document) -> Range<usize> {
        let language = Language::from_identifier(identifier);
        debug!("language switch to {} (requested {:?})", language, identifier);
        self.set_rule_set(Arc::new(builtin::compile(language)), doc)
    }

    /// Replace the rule set and re-highlight the whole document
    pub fn set_rule_set(&mut self, rules: Arc<RuleSet>, doc: &Document) -> Range<usize> {
        self.rules = rules;
        self.rehighlight(doc)
    }

    /// Forget every cached state and highlight all lines from the top
    pub fn rehighlight(&mut self, doc: &Document) -> Range<usize> {
        self.lines.clear();
        self.lines.resize(doc.line_count(), LineHighlight::default());
        self.recompute(doc, 0, doc.line_count())
    }

    /// Re-highlight after lines `first..=last` changed
    ///
    /// `first` and `last` index the document after the edit. Line insertions
    /// and removals inside that range are detected from the line count.
    /// Returns the range of lines that were highlighted again.
    pub fn on_line_range_changed(&mut self, doc: &Document, first: usize, last: usize) -> Range<usize> {
        let line_count = doc.line_count();
        // Ranges past the end re-check the last line
        let (lo, hi) = (first.min(last), first.max(last));
        let last = hi.min(line_count - 1);
        let first = lo.min(last);

        let start = self.sync_len(line_count, first, last);
        let range = self.recompute(doc, start, last + 1);
        debug!(
            "lines {}..={} changed, re-highlighted {:?} of {}",
            first, last, range, line_count
        );
        range
    }

    /// Re-highlight after a document edit
    pub fn apply(&mut self, doc: &Document, change: LineChange) -> Range<usize> {
        self.on_line_range_changed(doc, change.first, change.last)
    }

    /// Resize the cache so it has one entry for each of `line_count` lines,
    /// replacing the entries of the changed lines `first..=last`
    ///
    /// The entry of `last` keeps the exit state the replaced lines ended in,
    /// which is what the untouched lines below were highlighted against.
    /// Returns the line recomputation has to start from.
    fn sync_len(&mut self, line_count: usize, first: usize, last: usize) -> usize {
        let old_len = self.lines.len();
        let fresh = last + 1 - first;
        // Lines after the change are untouched, only shifted
        let kept_after = line_count - (last + 1);

        if first <= old_len && kept_after <= old_len - first {
            let old_end = old_len - kept_after;
            let boundary = (old_end > first).then(|| self.lines[old_end - 1].clone());
            self.lines
                .splice(first..old_end, std::iter::repeat(LineHighlight::default()).take(fresh));
            if let Some(boundary) = boundary {
                self.lines[last] = boundary;
            }
            return first;
        }

        // The cache does not line up with the document, rebuild from what is known
        let start = first.min(old_len);
        self.lines.truncate(start);
        self.lines.resize(line_count, LineHighlight::default());
        start
    }

    /// Highlight lines from `start`, at least up to `must_reach`
    fn recompute(&mut self, doc: &Document, start: usize, must_reach: usize) -> Range<usize> {
        let mut idx = start;
        while idx < self.lines.len() {
            let prev_state = self.previous_state(idx);
            let result = self.rules.highlight_line(doc.line_text(idx), prev_state);

            let entry = &mut self.lines[idx];
            let unchanged = entry.computed && entry.end_state == result.end_state;
            *entry = LineHighlight {
                spans: result.spans,
                end_state: result.end_state,
                computed: true,
            };
            idx += 1;

            if idx >= must_reach && unchanged {
                break;
            }
        }
        start..idx
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::StyleTag;

    fn highlighted(text: &str, language: &str) -> (Document, Highlighter) {
        let doc = Document::from_text(text);
        let mut hl = Highlighter::default();
        hl.set_language(language, &doc);
        (doc, hl)
    }

    fn states(hl: &Highlighter) -> Vec<LineState> {
        (0..hl.line_count()).map(|i| hl.line_state(i)).collect()
    }

    #[test]
    fn test_block_comment_across_lines() {
        let (_, hl) = highlighted("/* start\nend */", "cpp");

        assert_eq!(hl.line_state(0), LineState::InSpan);
        assert_eq!(hl.line_state(1), LineState::Normal);
        assert_eq!(hl.spans(1), [Span::new(0, 6, StyleTag::BlockComment)]);
    }

    #[test]
    fn test_language_switch_resets_states() {
        let (doc, mut hl) = highlighted("/* start\nend */", "cpp");

        let range = hl.set_language("python", &doc);
        assert_eq!(range, 0..2);
        assert_eq!(hl.language(), Language::Python);
        assert_eq!(states(&hl), [LineState::Normal, LineState::Normal]);
        for line in 0..2 {
            assert!(hl.spans(line).iter().all(|s| s.tag != StyleTag::BlockComment));
        }
    }

    #[test]
    fn test_edit_without_state_change_stops_early() {
        let text = (0..100).map(|i| format!("int v{} = {};", i, i)).collect::<Vec<_>>().join("\n");
        let (mut doc, mut hl) = highlighted(&text, "cpp");

        let change = doc.insert_str(5, 0, "return ").unwrap();
        let range = hl.apply(&doc, change);

        assert_eq!(range, 5..6);
        assert_eq!(hl.spans(5)[0], Span::new(0, 6, StyleTag::Keyword));
    }

    #[test]
    fn test_opening_comment_propagates_until_closed() {
        let (mut doc, mut hl) = highlighted("a\nb\nc */\nd\ne", "cpp");
        assert!(states(&hl).iter().all(|s| s.is_normal()));

        let change = doc.insert_str(0, 0, "/* ").unwrap();
        let range = hl.apply(&doc, change);

        // Line 2 closes the comment and ends normal as before
        assert_eq!(range, 0..3);
        assert_eq!(
            states(&hl),
            [LineState::InSpan, LineState::InSpan, LineState::Normal, LineState::Normal, LineState::Normal]
        );
        assert_eq!(hl.spans(1), [Span::new(0, 1, StyleTag::BlockComment)]);
    }

    #[test]
    fn test_unterminated_comment_reaches_document_end() {
        let (mut doc, mut hl) = highlighted("x\ny\nz", "cpp");

        let change = doc.insert_str(1, 0, "/*").unwrap();
        let range = hl.apply(&doc, change);

        assert_eq!(range, 1..3);
        assert_eq!(states(&hl), [LineState::Normal, LineState::InSpan, LineState::InSpan]);
    }

    #[test]
    fn test_split_and_join_keep_cache_aligned() {
        let (mut doc, mut hl) = highlighted("int a; /* x */ int b;\n/* open\nclose */", "cpp");

        let change = doc.insert_newline(0, 10).unwrap();
        let range = hl.apply(&doc, change);
        assert_eq!(doc.line_count(), 4);
        assert_eq!(hl.line_count(), 4);
        assert_eq!(range, 0..2);
        assert_eq!(
            states(&hl),
            [LineState::InSpan, LineState::Normal, LineState::InSpan, LineState::Normal]
        );

        let change = doc.join_line(0).unwrap();
        let range = hl.apply(&doc, change);
        assert_eq!(hl.line_count(), 3);
        assert_eq!(range, 0..1);
        assert_eq!(states(&hl), [LineState::Normal, LineState::InSpan, LineState::Normal]);
    }

    #[test]
    fn test_deleting_line_with_opener() {
        let (mut doc, mut hl) = highlighted("/*\na\nb */\nc", "cpp");
        assert_eq!(hl.line_state(1), LineState::InSpan);

        let change = doc.delete_line(0).unwrap();
        let range = hl.apply(&doc, change);

        assert_eq!(hl.line_count(), 3);
        assert_eq!(range, 0..2);
        assert_eq!(states(&hl), [LineState::Normal, LineState::Normal, LineState::Normal]);
        assert!(hl.spans(0).is_empty());
    }

    #[test]
    fn test_reload_rehighlights_everything() {
        let (mut doc, mut hl) = highlighted("a", "js");

        doc.set_text("/*\n*/\nlet x = 1;");
        let range = hl.rehighlight(&doc);

        assert_eq!(range, 0..3);
        assert_eq!(hl.language(), Language::JavaScript);
        assert_eq!(hl.spans(2)[0], Span::new(0, 3, StyleTag::Keyword));
    }

    #[test]
    fn test_fresh_highlighter_catches_up_on_first_edit() {
        let doc = Document::from_text("/*\nx\n*/");
        let mut hl = Highlighter::new(Language::Cpp);

        let range = hl.on_line_range_changed(&doc, 1, 1);
        assert_eq!(range, 0..3);
        assert_eq!(states(&hl), [LineState::InSpan, LineState::InSpan, LineState::Normal]);
    }

    #[test]
    fn test_change_past_end_rechecks_last_line() {
        let (doc, mut hl) = highlighted("a\nb", "cpp");
        assert_eq!(hl.on_line_range_changed(&doc, 7, 9), 1..2);
        assert_eq!(hl.line_count(), 2);
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let (doc, mut hl) = highlighted("a\nb\nc", "cpp");
        assert_eq!(hl.on_line_range_changed(&doc, 2, 0), 0..3);
    }

    #[test]
    fn test_rule_set_is_shared_not_copied() {
        let (doc, mut hl) = highlighted("a", "java");
        let rules = Arc::clone(hl.rule_set());
        hl.set_language("html", &doc);

        // The old set is still intact for whoever holds it
        assert_eq!(rules.language, Language::Java);
        assert_eq!(hl.rule_set().language, Language::Html);
    }
}
