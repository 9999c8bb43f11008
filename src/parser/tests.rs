use crate::parser::api::parse;
use crate::parser::ast::{RawDocument, RawNode, RawValue};

fn option(key: &str, value: &str) -> RawNode {
    RawNode::option(key, RawValue::plain(value))
}

#[test]
fn test_empty_document() {
    assert_eq!(parse(""), Ok(RawDocument::default()));
    assert_eq!(parse("\n\n   \n"), Ok(RawDocument::default()));
}

#[test]
fn test_document_with_just_options() {
    let doc = parse("foo = bar\nfoo bar\n").expect("Failed to parse");
    assert_eq!(doc.children, vec![option("foo", "bar"), option("foo", "bar")]);
}

#[test]
fn test_document_starting_with_a_block() {
    let doc = parse("<foo>\nfoo bar\n</foo>\n").expect("Failed to parse");
    assert_eq!(
        doc.children,
        vec![RawNode::block("foo", "", vec![option("foo", "bar")])]
    );
}

#[test]
fn test_document_starting_with_an_option() {
    let doc = parse("foo = bar\n<foo>\nfoo bar\n</foo>\n").expect("Failed to parse");
    assert_eq!(
        doc.children,
        vec![
            option("foo", "bar"),
            RawNode::block("foo", "", vec![option("foo", "bar")]),
        ]
    );
}

#[test]
fn test_comments_and_blank_lines_produce_no_nodes() {
    let input = "# leading comment\n\nfoo = bar\n   \n<foo>\n  # inner comment\n\n  a b\n</foo>\n# trailing";
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(
        doc.children,
        vec![
            option("foo", "bar"),
            RawNode::block("foo", "", vec![option("a", "b")]),
        ]
    );
}

#[test]
fn test_document_without_final_newline() {
    let doc = parse("<foo>\na b\n</foo>").expect("Failed to parse");
    assert_eq!(doc.node_count(), 2);
}

#[test]
fn test_sibling_blocks_capture_independently() {
    let input = "<a x>\nk 1\n</a x>\n<a y>\nk 2\n</a y>\n";
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(
        doc.children,
        vec![
            RawNode::block("a", "x", vec![option("k", "1")]),
            RawNode::block("a", "y", vec![option("k", "2")]),
        ]
    );
}

#[test]
fn test_heredoc_inside_block() {
    let input = "<script>\n  run <<EOS\necho hi\n\necho bye\n  EOS\n</script>\n";
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(
        doc.children,
        vec![RawNode::block(
            "script",
            "",
            vec![RawNode::option(
                "run",
                RawValue::heredoc("EOS", "echo hi\n\necho bye\n")
            )]
        )]
    );
}

#[test]
fn test_heredoc_content_is_not_parsed() {
    let input = "text <<EOT\n<foo>\n# not a comment\nEOT\n";
    let doc = parse(input).expect("Failed to parse");
    assert_eq!(
        doc.children,
        vec![RawNode::option(
            "text",
            RawValue::heredoc("EOT", "<foo>\n# not a comment\n")
        )]
    );
}

#[test]
fn test_mismatched_closing_tag_points_at_closer() {
    let err = parse("<foo>\n</bar>\n").unwrap_err();
    assert_eq!((err.line(), err.column()), (2, 3));
}

#[test]
fn test_mismatched_closing_name_points_at_name() {
    let err = parse("<pool api>\nsize 4\n</pool web>\n").unwrap_err();
    assert_eq!((err.line(), err.column()), (3, 8));
}

#[test]
fn test_unclosed_opening_tag() {
    let err = parse("foo = bar\n<foo\n").unwrap_err();
    assert_eq!((err.line(), err.column()), (2, 5));
}

#[test]
fn test_missing_heredoc_terminator() {
    let err = parse("a <<EOT\nx\n").unwrap_err();
    assert_eq!((err.line(), err.column()), (3, 1));
}

#[test]
fn test_stray_closing_tag() {
    let err = parse("a b\n</foo>\n").unwrap_err();
    assert_eq!(err.line(), 2);
}
