//! Parse error types.
//!
//! Parse errors are always fatal to the unit, so they carry no severity.
//! Each one records where it happened in the same shape a lexer error
//! does (span plus line/column of its first byte) and becomes an error
//! [`Diagnostic`] at the unit boundary.

use clover_diagnostic::{Diagnostic, Location};
use clover_ir::{Span, Token, TokenKind};
use clover_lexer_core::SourceBuffer;

/// What the parser was looking at when it gave up.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A specific token was required. `found` is `None` at end of file.
    #[error("expected `{expected}`, got {}", found_text(.found))]
    Expected {
        expected: TokenKind,
        found: Option<TokenKind>,
    },
    /// No production accepts the current token.
    #[error("unexpected token")]
    UnexpectedToken { found: Option<TokenKind> },
}

fn found_text(found: &Option<TokenKind>) -> String {
    match found {
        Some(kind) => format!("`{kind}`"),
        None => "end of file".to_owned(),
    }
}

/// A located parse error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub line_start: u32,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    /// Error pointing at `token`.
    #[cold]
    pub fn at_token(kind: ParseErrorKind, token: &Token) -> Self {
        ParseError {
            kind,
            span: token.span,
            line_start: token.line_start,
            line: token.line,
            column: token.column,
        }
    }

    /// Error at end of file: one column past `last`, or the very start of
    /// an empty stream.
    #[cold]
    pub fn at_end(kind: ParseErrorKind, last: Option<&Token>) -> Self {
        match last {
            Some(token) => ParseError {
                kind,
                span: Span::with_len(token.span.end, 1),
                line_start: token.line_start,
                line: token.line,
                column: token.column + token.len(),
            },
            None => ParseError {
                kind,
                span: Span::with_len(0, 1),
                line_start: 0,
                line: 1,
                column: 1,
            },
        }
    }

    pub fn location<'src>(&self, source: &'src SourceBuffer) -> Location<'src> {
        Location::new(
            source,
            self.span.start,
            self.span.len(),
            self.line_start,
            self.line,
            self.column,
        )
    }

    pub fn to_diagnostic<'src>(&self, source: &'src SourceBuffer) -> Diagnostic<'src> {
        Diagnostic::error(self.kind.to_string(), self.location(source))
    }
}
