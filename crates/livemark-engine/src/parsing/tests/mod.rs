//! Whole-document tests for the parsing module: the scanner output of each
//! view must fold into a valid tree, and key documents keep their shape.

use rstest::rstest;

use crate::parsing::{
    ParsedDoc,
    blocks::BlockScanner,
    inline::kinds::Delimiter,
    lines::LineIndex,
    parse_document,
    snapshot::{check_tree, invariants, outline},
    span::{SpanKind, Tag},
};

fn parse(text: &str) -> ParsedDoc {
    parse_document(&LineIndex::new(text))
}

#[rstest]
#[case::empty("")]
#[case::blank_lines("\n\n\n")]
#[case::heading("# Title")]
#[case::paragraphs("one\ntwo\n\nthree")]
#[case::emphasis("**bold** and *em*")]
#[case::nested_list("- a\n- b\n\t- c")]
#[case::mixed_list("1. a\n\t- b\n\t\t1. c\n2. d")]
#[case::table("| a | b |\n|---|---|\n| 1 | 2 |")]
#[case::table_empty_cell("||\n|---|\n||")]
#[case::fence("```\nlet x = *1*;\n\n```\nafter")]
#[case::unclosed_fence("```\ncode")]
#[case::quote("> a *b*\n> ")]
#[case::rule("a\n---\nb")]
#[case::media("![cat](cat.png) and [home](/)")]
#[case::escapes(r"\*not em\* `co*de`")]
#[case::everything("# H\n- [x](y)\n|a|\n|---|\n|`b`|\n```\n```\n> q\n---\n~~z~~ ^s^ ~t~")]
fn invariants_hold(#[case] text: &str) {
    let index = LineIndex::new(text);
    let scan = BlockScanner::new(&index).scan();
    invariants(index.text_len(), &scan.edit);
    invariants(index.text_len(), &scan.clean);

    let doc = parse_document(&index);
    check_tree(&doc.edit);
    check_tree(&doc.clean);
}

#[test]
fn heading_scenario() {
    let doc = parse("# Title");
    let heading = doc.clean.roots().next().unwrap();
    assert_eq!((heading.span.lo, heading.span.hi), (0, 7));
    assert_eq!(heading.span.kind.tag(), Some(Tag::Heading(1)));
    assert_eq!(heading.span.left_pattern_len, 2);
    assert_eq!(heading.span.right_pattern_len, 0);
}

#[test]
fn emphasis_scenario() {
    let doc = parse("**bold** and *em*");
    let paragraph = doc.clean.roots().next().unwrap();
    let inline: Vec<_> = doc
        .clean
        .children(paragraph)
        .map(|n| (n.span.lo, n.span.hi, n.span.kind.pattern().into_owned(), n.span.kind.tag()))
        .collect();
    assert_eq!(
        inline,
        vec![
            (0, 8, "**".to_string(), Some(Tag::Strong)),
            (13, 17, "*".to_string(), Some(Tag::Emphasis)),
        ]
    );
}

#[test]
fn nested_list_scenario() {
    let text = "- a\n- b\n\t- c";
    let doc = parse(text);
    assert_eq!(
        outline(text, &doc.clean),
        [
            r#"ul [0, 12) "- a\n- b\n\t- c""#,
            r#"  li#1 [0, 3) "- a""#,
            r#"  li#2 [4, 7) "- b""#,
            r#"  ul [8, 12) "\t- c""#,
            r#"    li#1 [8, 12) "\t- c""#,
        ]
        .join("\n")
    );
}

#[test]
fn table_scenario() {
    let text = "| a | b |\n|---|---|\n| 1 | 2 |";
    let doc = parse(text);
    assert_eq!(
        outline(text, &doc.clean),
        [
            r#"table [0, 29) "| a | b |\n|---|---|\n| 1 | 2 |""#,
            r#"  thead [0, 9) "| a | b |""#,
            r#"    tr [0, 9) "| a | b |""#,
            r#"      th [1, 4) " a ""#,
            r#"      th [5, 8) " b ""#,
            r#"  tbody [10, 29) "|---|---|\n| 1 | 2 |""#,
            r#"    tr [20, 29) "| 1 | 2 |""#,
            r#"      td [21, 24) " 1 ""#,
            r#"      td [25, 28) " 2 ""#,
        ]
        .join("\n")
    );
}

#[test]
fn unmatched_fence_scenario() {
    let doc = parse("```");
    assert!(
        !doc.clean
            .spans()
            .iter()
            .any(|s| matches!(s.kind, SpanKind::CodeBlock | SpanKind::Inline(Delimiter::Code)))
    );
    let line = doc.edit.roots().next().unwrap();
    assert!(line.span.is_plain_line());
}

#[test]
fn fence_edit_tree_keeps_markers_as_literals() {
    let text = "```\nx\n```";
    let doc = parse(text);
    assert_eq!(
        outline(text, &doc.edit),
        [
            r#"line [0, 3) "```""#,
            r#"  fence [0, 3) "```""#,
            r#"line [4, 5) "x""#,
            r#"  code-line [4, 5) "x""#,
            r#"line [6, 9) "```""#,
            r#"  fence [6, 9) "```""#,
        ]
        .join("\n")
    );
}

#[test]
fn paragraphs_group_plain_rows() {
    let text = "a\nb\n\nc";
    let doc = parse(text);
    assert_eq!(
        outline(text, &doc.clean),
        [
            r#"p [0, 3) "a\nb""#,
            r#"  br [1, 2) "\n""#,
            r#"p [5, 6) "c""#,
        ]
        .join("\n")
    );
}

#[test]
fn every_row_has_one_edit_line() {
    let text = "# a\n\n- b\n|c|\n|---|\n|d|";
    let doc = parse(text);
    let lines = doc.edit.roots().filter(|n| n.span.is_line()).count();
    assert_eq!(lines, 6);
    assert_eq!(doc.edit.roots().count(), 6);
}
