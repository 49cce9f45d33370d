//! Recursive descent parser for Clover.
//!
//! Builds a [`Root`] from a finished [`TokenList`]. The first syntax error
//! aborts the unit: there is no resynchronization, and no partial tree is
//! returned. Warnings (duplicate modifiers) are emitted as they are found
//! and do not stop parsing.
//!
//! Productions return `Result<Option<T>, ParseError>`: `Ok(None)` means
//! "not mine, try the next one", `Err` aborts the unit.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use clover_diagnostic::{Diagnostic, DiagnosticEmitter, Location};
use clover_ir::ast::Root;
use clover_ir::{Span, Token, TokenKind, TokenList};
use clover_lexer_core::SourceBuffer;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Result of parsing one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    /// The tree, present only when parsing succeeded.
    pub root: Option<Root>,
    /// The error that aborted the unit. Its diagnostic has already been
    /// emitted.
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a SourceBuffer,
    emitter: &'a mut dyn DiagnosticEmitter,
}

impl<'a> Parser<'a> {
    pub fn new(
        source: &'a SourceBuffer,
        tokens: &'a TokenList,
        emitter: &'a mut dyn DiagnosticEmitter,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            source,
            emitter,
        }
    }

    /// Parse the whole token list. Nothing is emitted for the returned
    /// error; see [`parse`] for the reporting entry point.
    pub fn parse_root(&mut self) -> ParseResult<Root> {
        self.root()
    }

    #[inline]
    fn current(&self) -> Option<&Token> {
        self.cursor.current()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Span {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> ParseResult<Span> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn capture(&mut self, kind: TokenKind) -> ParseResult<(String, Span)> {
        self.cursor.capture(kind)
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.previous_span().end.max(start))
    }

    /// Emit a warning at the last consumed token.
    fn warn_previous(&mut self, message: String) {
        let Some(token) = self.cursor.previous() else {
            return;
        };
        let location = Location::of_token(self.source, token);
        self.emitter.emit(&Diagnostic::warning(message, location));
    }
}

/// Parse one unit, emitting the aborting error (if any) to `emitter`.
pub fn parse(
    source: &SourceBuffer,
    tokens: &TokenList,
    emitter: &mut dyn DiagnosticEmitter,
) -> ParseOutput {
    let result = Parser::new(source, tokens, emitter).parse_root();
    let output = match result {
        Ok(root) => ParseOutput {
            root: Some(root),
            error: None,
        },
        Err(err) => {
            emitter.emit(&err.to_diagnostic(source));
            ParseOutput {
                root: None,
                error: Some(err),
            }
        }
    };
    tracing::debug!(
        file = source.name(),
        imports = output.root.as_ref().map_or(0, |root| root.imports.len()),
        functions = output.root.as_ref().map_or(0, |root| root.functions.len()),
        failed = output.has_errors(),
        "parsed"
    );
    output
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
