use super::*;
use crate::{lex, lex_with_comments, LexErrorKind};
use clover_diagnostic::{DiagnosticQueue, Severity};
use clover_ir::TokenKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn source(text: &str) -> SourceBuffer {
    SourceBuffer::new("test.cl", text)
}

fn kinds(text: &str) -> Vec<TokenKind> {
    let mut queue = DiagnosticQueue::new();
    let output = lex(&source(text), &mut queue);
    assert!(output.is_ok(), "unexpected error: {:?}", output.error);
    output.tokens.kinds()
}

#[test]
fn test_function_header() {
    use TokenKind::*;
    assert_eq!(
        kinds("fn bar(x: Int): Int { }"),
        vec![Fn, Ident, LParen, Ident, Colon, Ident, RParen, Colon, Ident, LBrace, RBrace]
    );
}

#[test]
fn test_every_fixed_spelling_is_one_token() {
    let table = TokenKind::KEYWORDS
        .iter()
        .chain(TokenKind::OPERATORS.iter())
        .chain(TokenKind::SYMBOLS.iter());
    for &kind in table {
        let Some(text) = kind.text() else {
            panic!("{kind:?} has no spelling");
        };
        let buffer = source(text);
        let tokens: Vec<_> = Lexer::new(&buffer).collect();
        assert_eq!(tokens.len(), 1, "`{text}` split into {tokens:?}");
        let token = tokens[0].clone().unwrap_or_else(|e| panic!("`{text}`: {e}"));
        assert_eq!(token.kind, kind);
        assert_eq!(token.len() as usize, text.len());
    }
}

#[test]
fn test_positions() {
    let buffer = source("import foo;\n\n  fn bar");
    let tokens: Vec<Token> = Lexer::new(&buffer).map(Result::unwrap).collect();

    let positions: Vec<_> = tokens
        .iter()
        .map(|t| (t.lexeme.as_str(), t.line, t.column, t.line_start, t.span.start))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("import", 1, 1, 0, 0),
            ("foo", 1, 8, 0, 7),
            (";", 1, 11, 0, 10),
            ("fn", 3, 3, 13, 15),
            ("bar", 3, 6, 13, 18),
        ]
    );
}

#[test]
fn test_crlf_and_tabs() {
    let buffer = source("a\r\n\tb");
    let tokens: Vec<Token> = Lexer::new(&buffer).map(Result::unwrap).collect();
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].column, 2);
}

#[test]
fn test_adjacent_operators() {
    use TokenKind::*;
    assert_eq!(kinds("a<<b>>c"), vec![Ident, Shl, Ident, Shr, Ident]);
    assert_eq!(kinds("x<=-1"), vec![Ident, LtEq, Minus, Int]);
    assert_eq!(kinds("!a&&b"), vec![Bang, Ident, AmpAmp, Ident]);
}

#[test]
fn test_numbers() {
    use TokenKind::*;
    assert_eq!(
        kinds("1 2.5 0b11 0xFF 0"),
        vec![Int, Float, BinInt, HexInt, Int]
    );
    assert_eq!(kinds("f(1.5,2)"), vec![Ident, LParen, Float, Comma, Int, RParen]);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    use TokenKind::*;
    assert_eq!(kinds("if iffy fnord import"), vec![If, Ident, Ident, Import]);
}

#[test]
fn test_literals() {
    use TokenKind::*;
    assert_eq!(
        kinds(r#"let s = "a\n\x41é"; let c = '\'';"#),
        vec![Let, Ident, Eq, String, Semicolon, Let, Ident, Eq, Char, Semicolon]
    );
}

#[test]
fn test_comments() {
    let buffer = source("// head\nfn x // tail\n");
    let mut queue = DiagnosticQueue::new();

    let plain = lex(&buffer, &mut queue);
    assert_eq!(plain.tokens.kinds(), vec![TokenKind::Fn, TokenKind::Ident]);

    let full = lex_with_comments(&buffer, &mut queue);
    assert_eq!(
        full.tokens.kinds(),
        vec![
            TokenKind::Comment,
            TokenKind::Fn,
            TokenKind::Ident,
            TokenKind::Comment
        ]
    );
    assert_eq!(full.tokens[3].lexeme, "// tail");
    assert!(queue.is_empty());
}

#[test]
fn test_empty_and_blank_input() {
    assert!(kinds("").is_empty());
    assert!(kinds("  \n\t\n").is_empty());
}

#[test]
fn test_unclosed_string() {
    let mut queue = DiagnosticQueue::new();
    let output = lex(&source("x = \"abc"), &mut queue);

    assert_eq!(output.tokens.kinds(), vec![TokenKind::Ident, TokenKind::Eq]);
    let err = output.error.unwrap();
    assert_eq!(err.kind, LexErrorKind::UnclosedString);
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(err.column, 5);

    let reported = queue.iter().next().unwrap();
    assert_eq!(
        reported.rendered,
        "test.cl:1:5: error: unclosed string literal\n    1 | x = \"abc\n      |     ^\n"
    );
}

#[test]
fn test_escape_errors() {
    let mut queue = DiagnosticQueue::new();
    let invalid = lex(&source(r#"  "\q""#), &mut queue);
    let err = invalid.error.unwrap();
    assert_eq!(err.kind, LexErrorKind::InvalidEscape);
    assert_eq!(err.span, Span::new(3, 5));
    assert_eq!(err.column, 4);

    let malformed = lex(&source(r#""\x1""#), &mut queue);
    assert_eq!(malformed.error.unwrap().kind, LexErrorKind::MalformedEscape);

    let fine = lex(&source(r#""\x1A""#), &mut queue);
    assert!(fine.is_ok());
    assert_eq!(queue.messages(), vec!["invalid escape sequence", "malformed escape sequence"]);
}

#[test]
fn test_identifier_length() {
    let mut queue = DiagnosticQueue::new();
    let ok = lex(&source(&"a".repeat(63)), &mut queue);
    assert!(ok.is_ok());
    assert!(queue.is_empty());

    let long = lex(&source(&format!("x {}", "b".repeat(64))), &mut queue);
    assert_eq!(
        long.error.unwrap().kind,
        LexErrorKind::IdentifierTooLong { len: 64 }
    );
    assert_eq!(long.tokens.len(), 1);

    let warnings = queue.with_severity(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "identifier is too long: 64");
    assert_eq!(warnings[0].column, 3);
    assert_eq!(warnings[0].notes, vec!["maximum identifier length is 63".to_string()]);
    assert!(!queue.has_errors());
}

#[test]
fn test_nothing_after_first_error() {
    let buffer = source("a 12ab b c");
    let items: Vec<_> = Lexer::new(&buffer).collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert_eq!(
        items[1].as_ref().unwrap_err().kind,
        LexErrorKind::InvalidSyntax
    );
}

#[test]
fn test_unexpected_character() {
    let mut queue = DiagnosticQueue::new();
    let output = lex(&source("a\n  @b"), &mut queue);
    let err = output.error.unwrap();
    assert_eq!(err.kind, LexErrorKind::UnexpectedToken);
    assert_eq!((err.line, err.column, err.line_start), (2, 3, 2));
    assert_eq!(queue.messages(), vec!["unexpected token"]);
}

#[test]
fn test_lexing_is_repeatable() {
    let buffer = source("fn main(): Int { return 0x1F + 2.5; }");
    let first: Vec<_> = Lexer::new(&buffer).collect();
    let second: Vec<_> = Lexer::new(&buffer).collect();
    assert_eq!(first, second);
}

fn token_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,10}",
        "[0-9]{1,6}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        "0x[0-9a-f]{1,4}",
        "\"[a-z ]{0,6}\"",
        Just("<<".to_string()),
        Just(">=".to_string()),
        Just("(".to_string()),
        Just(";".to_string()),
    ]
}

proptest! {
    #[test]
    fn lexemes_match_their_spans(
        parts in prop::collection::vec((token_text(), "[ \t\n]{1,3}"), 0..20)
    ) {
        let text: String = parts.iter().map(|(t, sep)| format!("{t}{sep}")).collect();
        let buffer = source(&text);
        let mut lines = 1;
        for item in Lexer::new(&buffer) {
            let token = item.unwrap();
            let view = buffer.substring_view(token.span.start, token.len()).unwrap();
            prop_assert_eq!(view, token.lexeme.as_str());
            let newlines_before = text[..token.span.start as usize].matches('\n').count() as u32;
            prop_assert_eq!(token.line, newlines_before + 1);
            prop_assert!(token.line >= lines);
            lines = token.line;
        }
    }

    #[test]
    fn lexer_never_panics(text in "\\PC{0,40}") {
        let buffer = source(&text);
        let items: Vec<_> = Lexer::new(&buffer).collect();
        let errors = items.iter().filter(|item| item.is_err()).count();
        prop_assert!(errors <= 1);
        if errors == 1 {
            prop_assert!(items.last().is_some_and(Result::is_err));
        }
    }
}
