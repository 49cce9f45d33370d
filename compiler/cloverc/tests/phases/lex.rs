//! Lexer phase tests.

use clover_diagnostic::span_utils::LineOffsetTable;
use clover_ir::TokenKind;
use clover_lexer::LexErrorKind;
use pretty_assertions::assert_eq;

use crate::common::{lex, tokens};

#[test]
fn shift_left_is_one_token() {
    assert_eq!(tokens("<<").kinds(), vec![TokenKind::Shl]);
    assert_eq!(tokens("< <").kinds(), vec![TokenKind::Lt, TokenKind::Lt]);
}

#[test]
fn every_table_spelling_lexes_alone() {
    for kind in TokenKind::KEYWORDS
        .into_iter()
        .chain(TokenKind::OPERATORS)
        .chain(TokenKind::SYMBOLS)
    {
        let text = kind.text().unwrap();
        let list = tokens(text);
        assert_eq!(list.len(), 1, "`{text}`");
        assert_eq!(list[0].kind, kind);
        assert_eq!(list[0].len() as usize, text.len());
    }
}

#[test]
fn last_line_number_counts_newlines() {
    let text = "import a;\n\nfn f() {\n}\n";
    let list = tokens(text);
    let newlines = text.matches('\n').count() as u32;
    // The final `}` sits on the last non-empty line.
    assert_eq!(list.last().unwrap().line, newlines);

    let trailing = "a\nb\nc";
    assert_eq!(tokens(trailing).last().unwrap().line, 3);
}

#[test]
fn crlf_sources_count_lines_like_lf() {
    let unix = tokens("fn a() { }\nfn b() { }\n");
    let windows = tokens("fn a() { }\r\nfn b() { }\r\n");
    assert_eq!(unix, windows);
}

#[test]
fn comments_never_reach_the_parser() {
    let list = tokens("// header\nfn main() { } // trailing");
    assert!(list.iter().all(|t| t.kind != TokenKind::Comment));
    assert_eq!(list.len(), 6);
}

#[test]
fn unclosed_string_stops_the_stream() {
    let (output, queue) = lex("fn \"abc");
    assert_eq!(output.tokens.kinds(), vec![TokenKind::Fn]);
    let err = output.error.unwrap();
    assert_eq!(err.kind, LexErrorKind::UnclosedString);
    assert_eq!((err.span.start, err.span.len(), err.column), (3, 1, 4));
    assert_eq!(queue.len(), 1);
}

#[test]
fn escapes() {
    assert_eq!(
        lex(r#""\q""#).0.error.unwrap().kind,
        LexErrorKind::InvalidEscape
    );
    assert_eq!(
        lex(r#""\x1""#).0.error.unwrap().kind,
        LexErrorKind::MalformedEscape
    );
    assert_eq!(
        lex(r#""\u12G4""#).0.error.unwrap().kind,
        LexErrorKind::MalformedEscape
    );
    assert!(lex(r#""\x1A é \U0001F600 \a\b\e\f\n\r\t\v\"\'\\""#).0.is_ok());
}

#[test]
fn identifier_length_boundary() {
    let (ok, queue) = lex(&"x".repeat(63));
    assert!(ok.is_ok());
    assert!(queue.is_empty());

    let (long, queue) = lex(&"x".repeat(64));
    assert_eq!(
        long.error.unwrap().kind,
        LexErrorKind::IdentifierTooLong { len: 64 }
    );
    assert_eq!(queue.messages(), vec!["identifier is too long: 64"]);
}

#[test]
fn numbers() {
    use TokenKind::*;
    assert_eq!(
        tokens("0 42 3.14 0b101 0xBEEF").kinds(),
        vec![Int, Int, Float, BinInt, HexInt]
    );
    for bad in ["1.", "1.5.2x", "0b2", "0xg", "7up"] {
        let (output, _) = lex(bad);
        assert!(output.has_errors(), "`{bad}` lexed");
    }
}

#[test]
fn positions_agree_with_line_offset_table() {
    let text = "import a;\n\n  fn f(x: const List<Int>;): Int {\n}\n// done\n fn g() { }";
    let table = LineOffsetTable::build(text);
    let list = tokens(text);
    assert!(!list.is_empty());
    for token in &list {
        let pos = table.position(token.span.start);
        assert_eq!(
            (pos.line, pos.column, pos.line_start),
            (token.line, token.column, token.line_start),
            "{token:?}"
        );
    }
}
