use super::*;
use clover_diagnostic::{DiagnosticQueue, Severity};
use clover_lexer::lex;
use pretty_assertions::assert_eq;

fn run(text: &str) -> (ParseOutput, DiagnosticQueue) {
    let source = SourceBuffer::new("main.cl", text);
    let mut queue = DiagnosticQueue::new();
    let lexed = lex(&source, &mut queue);
    assert!(lexed.is_ok(), "lexing failed: {:?}", lexed.error);
    let output = parse(&source, &lexed.tokens, &mut queue);
    (output, queue)
}

#[test]
fn test_import_and_function() {
    let (output, queue) = run("import foo; fn bar(x: Int): Int { }");
    assert!(queue.is_empty());
    let root = output.root.unwrap();

    assert_eq!(root.imports.len(), 1);
    assert_eq!(root.imports[0].name, "foo");
    assert_eq!(root.functions.len(), 1);

    let bar = &root.functions[0];
    assert_eq!(bar.name, "bar");
    assert_eq!(bar.params.len(), 1);
    assert_eq!(bar.params[0].name, "x");
    assert_eq!(bar.params[0].ty.name, "Int");
    assert_eq!(bar.rtype.as_ref().map(|t| t.name.as_str()), Some("Int"));
    assert_eq!(root.span, Span::new(0, 35));
}

#[test]
fn test_missing_colon() {
    let (output, queue) = run("fn bar(x Int) { }");
    assert!(output.root.is_none());

    let err = output.error.unwrap();
    assert_eq!((err.line, err.column), (1, 10));

    let reported: Vec<_> = queue.iter().collect();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].severity, Severity::Error);
    assert_eq!(
        reported[0].rendered,
        "main.cl:1:10-13: error: expected `:`, got `identifier`\n    1 | fn bar(x Int) { }\n      |          ^~~\n"
    );
}

#[test]
fn test_empty_input() {
    let (output, queue) = run("  // only a comment\n");
    let root = output.root.unwrap();
    assert!(root.is_empty());
    assert!(queue.is_empty());
}

#[test]
fn test_top_level_unexpected_token() {
    let (output, queue) = run("import a;\nlet x");
    let err = output.error.unwrap();
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            found: Some(TokenKind::Let)
        }
    );
    assert_eq!((err.line, err.column), (2, 1));
    assert_eq!(queue.messages(), vec!["unexpected token"]);
}

#[test]
fn test_error_at_end_of_file() {
    let (output, queue) = run("fn main() {");
    let err = output.error.unwrap();
    assert_eq!(
        err.kind,
        ParseErrorKind::Expected {
            expected: TokenKind::RBrace,
            found: None
        }
    );
    assert_eq!(
        queue.iter().next().map(|d| d.rendered.as_str()),
        Some("main.cl:1:12: error: expected `}`, got end of file\n    1 | fn main() {\n      |            ^\n")
    );
}

#[test]
fn test_only_first_error_is_reported() {
    let (output, queue) = run("fn a( { }\nfn b(x Int) { }");
    assert!(output.has_errors());
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_warnings_do_not_fail_the_unit() {
    let (output, queue) = run("fn f(x: pub pub Int) { }");
    assert!(output.is_ok());
    assert_eq!(queue.with_severity(Severity::Warning).len(), 1);
    assert!(!queue.has_errors());
}
