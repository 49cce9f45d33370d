//! Shared helpers for phase tests.

use clover_diagnostic::DiagnosticQueue;
use clover_ir::ast::Root;
use clover_ir::TokenList;
use clover_lexer::LexOutput;
use clover_lexer_core::SourceBuffer;
use clover_parse::ParseOutput;

pub const FILE: &str = "test.cl";

pub fn source(text: &str) -> SourceBuffer {
    SourceBuffer::new(FILE, text)
}

/// Lex `text`, returning the output and everything reported.
pub fn lex(text: &str) -> (LexOutput, DiagnosticQueue) {
    let mut queue = DiagnosticQueue::new();
    let output = clover_lexer::lex(&source(text), &mut queue);
    (output, queue)
}

/// Tokens of `text`, which must lex cleanly.
pub fn tokens(text: &str) -> TokenList {
    let (output, queue) = lex(text);
    assert!(output.is_ok(), "lexing `{text}` failed: {:?}", queue.messages());
    output.tokens
}

/// Lex and parse `text`. Lexing must succeed.
pub fn parse(text: &str) -> (ParseOutput, DiagnosticQueue) {
    let source = source(text);
    let mut queue = DiagnosticQueue::new();
    let lexed = clover_lexer::lex(&source, &mut queue);
    assert!(lexed.is_ok(), "lexing `{text}` failed: {:?}", queue.messages());
    let output = clover_parse::parse(&source, &lexed.tokens, &mut queue);
    (output, queue)
}

/// Tree of `text`, which must parse cleanly.
pub fn root(text: &str) -> Root {
    let (output, queue) = parse(text);
    match output.root {
        Some(root) => root,
        None => panic!("parsing `{text}` failed: {:?}", queue.messages()),
    }
}

/// Plain rendering of everything `text` reports through lexing and
/// parsing, concatenated in order.
pub fn rendered(text: &str) -> String {
    let source = source(text);
    let mut queue = DiagnosticQueue::new();
    let lexed = clover_lexer::lex(&source, &mut queue);
    if lexed.is_ok() {
        clover_parse::parse(&source, &lexed.tokens, &mut queue);
    }
    queue.iter().map(|d| d.rendered.as_str()).collect()
}
