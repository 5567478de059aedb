use linelight::syntax::{compile, highlight_line};
use linelight::{Document, Highlighter, Language, LineChange, LineState, Span, StyleTag};

fn tagged<'a>(text: &'a str, spans: &[Span], tag: StyleTag) -> Vec<&'a str> {
    spans.iter().filter(|s| s.tag == tag).map(|s| &text[s.start..s.end]).collect()
}

#[test]
fn highlighting_without_spans_is_idempotent() {
    let lines = [
        "if (x) { return y; }",
        "def f(a): return 'x' # c",
        "public static void main(String[] args) {",
        "let s = `t`; // 12.5",
        "<p class=\"a\">&nbsp;</p>",
        "",
    ];
    for language in Language::ALL {
        let rules = compile(language);
        for line in lines {
            for state in [LineState::Normal, LineState::InSpan] {
                let first = highlight_line(line, &rules, state);
                let second = highlight_line(line, &rules, state);
                assert_eq!(first, second, "{} / {:?}", language, line);
            }
        }
    }
}

#[test]
fn keywords_keep_their_tag() {
    let text = "if (x) { return y; }";
    let result = highlight_line(text, &compile(Language::Cpp), LineState::Normal);
    assert_eq!(tagged(text, &result.spans, StyleTag::Keyword), ["if", "return"]);
}

#[test]
fn block_comment_round_trip() {
    let rules = compile(Language::Cpp);

    let first = highlight_line("/* start", &rules, LineState::Normal);
    assert_eq!(first.end_state, LineState::InSpan);

    let second = highlight_line("end */", &rules, first.end_state);
    assert_eq!(second.spans, vec![Span::new(0, 6, StyleTag::BlockComment)]);
    assert_eq!(second.end_state, LineState::Normal);
}

#[test]
fn language_switch_drops_comment_state() {
    let doc = Document::from_text("/* start\nend */\ndef f(): # 1");
    let mut hl = Highlighter::new(Language::Cpp);
    hl.rehighlight(&doc);
    assert_eq!(hl.line_state(0), LineState::InSpan);
    assert_eq!(hl.spans(1), [Span::new(0, 6, StyleTag::BlockComment)]);

    assert_eq!(hl.set_language("python", &doc), 0..3);
    assert_eq!(hl.language(), Language::Python);
    for line in 0..doc.line_count() {
        assert_eq!(hl.line_state(line), LineState::Normal);
    }

    // Python has no rule for the C comment markers
    assert!(hl.spans(0).is_empty());
    assert!(hl.spans(1).is_empty());

    let text = doc.line_text(2);
    assert_eq!(tagged(text, hl.spans(2), StyleTag::Keyword), ["def"]);
    assert_eq!(tagged(text, hl.spans(2), StyleTag::Function), ["f"]);
    assert_eq!(tagged(text, hl.spans(2), StyleTag::LineComment), ["# "]);
    assert_eq!(tagged(text, hl.spans(2), StyleTag::Number), ["1"]);
}

#[test]
fn number_is_not_a_call() {
    let text = "x = 42;";
    let result = highlight_line(text, &compile(Language::Cpp), LineState::Normal);
    assert_eq!(tagged(text, &result.spans, StyleTag::Number), ["42"]);
    assert!(tagged(text, &result.spans, StyleTag::Function).is_empty());
}

#[test]
fn edit_that_keeps_exit_state_touches_one_line() {
    let text = (0..100).map(|i| format!("x{} = f({});", i, i)).collect::<Vec<_>>().join("\n");
    let mut doc = Document::from_text(&text);
    let mut hl = Highlighter::new(Language::Cpp);
    assert_eq!(hl.rehighlight(&doc), 0..100);

    let change = doc.insert_char(5, 0, 'y').unwrap();
    assert_eq!(hl.apply(&doc, change), 5..6);
}

#[test]
fn typing_a_comment_open_and_close() {
    let mut doc = Document::from_text("int a;\nint b;\nint c;\nint d;");
    let mut hl = Highlighter::new(Language::Cpp);
    hl.rehighlight(&doc);

    let change = doc.insert_str(1, 0, "/*").unwrap();
    assert_eq!(hl.apply(&doc, change), 1..4);
    assert_eq!(hl.line_state(3), LineState::InSpan);
    assert_eq!(hl.spans(2), [Span::new(0, 6, StyleTag::BlockComment)]);

    let change = doc.insert_str(2, 6, "*/").unwrap();
    assert_eq!(hl.apply(&doc, change), 2..4);
    assert_eq!(hl.line_state(2), LineState::Normal);
    assert_eq!(hl.line_state(3), LineState::Normal);
    assert_eq!(tagged(doc.line_text(3), hl.spans(3), StyleTag::Keyword), ["int"]);
}

#[test]
fn exit_states_match_full_recompute_after_edits() {
    let mut doc = Document::from_text("a /* b\nc\nd */ e\n/* f */\ng");
    let mut incremental = Highlighter::new(Language::JavaScript);
    incremental.rehighlight(&doc);

    let edits: [fn(&mut Document) -> Option<LineChange>; 5] = [
        |d| d.insert_str(2, 0, "x */ y /*"),
        |d| d.insert_newline(0, 2),
        |d| d.delete_line(3),
        |d| d.join_line(1),
        |d| d.insert_str(0, 0, "/*\n"),
    ];

    for (step, edit) in edits.iter().enumerate() {
        let change = edit(&mut doc).expect("edit applies");
        incremental.apply(&doc, change);

        let mut full = Highlighter::new(Language::JavaScript);
        full.rehighlight(&doc);
        assert_eq!(incremental.line_count(), doc.line_count());
        for line in 0..doc.line_count() {
            assert_eq!(incremental.line_state(line), full.line_state(line), "step {} line {}", step, line);
            assert_eq!(incremental.spans(line), full.spans(line), "step {} line {}", step, line);
        }
    }
}
