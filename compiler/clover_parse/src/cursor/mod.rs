//! Token cursor for navigating the token stream.
//!
//! Tracks the index of the current token and of the last consumed one.
//! Both only move forward.
//!
//! # Closing nested type arguments
//!
//! The lexer always reads `>>` as one shift-right token, but
//! `List<Map<K, V>>` needs two closing `>`. [`Cursor::expect_type_close`]
//! consumes only the first half of a `>>` and leaves the second half as a
//! synthesized `>` one byte (and one column) further on, which the next
//! call then consumes like any other token.

use clover_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind};

/// Forward-only cursor over a finished token list.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    /// Index of the last consumed token.
    prev: Option<usize>,
    /// Index of the current token.
    pos: usize,
    prev_span: Span,
    /// Second half of a `>>` whose first half closed a type argument list.
    split: Option<Token>,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            prev: None,
            pos: 0,
            prev_span: Span::DUMMY,
            split: None,
        }
    }

    /// Index of the current token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Index of the last consumed token, if any.
    #[inline]
    pub fn previous_position(&self) -> Option<usize> {
        self.prev
    }

    /// The current token, or `None` at end of file.
    #[inline]
    pub fn current(&self) -> Option<&Token> {
        self.split.as_ref().or_else(|| self.tokens.get(self.pos))
    }

    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    /// The last consumed token. After half of a `>>` was consumed this is
    /// the whole `>>` token.
    pub fn previous(&self) -> Option<&'a Token> {
        self.prev.and_then(|index| self.tokens.get(index))
    }

    /// Span of what was last consumed.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.prev_span
    }

    /// Start offset of the current token, or the end of the last one at
    /// end of file.
    pub fn current_start(&self) -> u32 {
        self.current()
            .map_or(self.prev_span.end, |token| token.span.start)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().is_none()
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume the current token and return its span. Does nothing at end
    /// of file.
    pub fn advance(&mut self) -> Span {
        let Some(token) = self.current() else {
            return self.prev_span;
        };
        let span = token.span;
        trace!(
            pos = self.pos,
            kind = %token.kind,
            span_start = span.start,
            span_end = span.end,
            "advance"
        );
        self.split = None;
        self.prev = Some(self.pos);
        self.pos += 1;
        self.prev_span = span;
        span
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a `kind` token or fail.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.expected(kind))
        }
    }

    /// Consume a `kind` token and hand back its text.
    pub fn capture(&mut self, kind: TokenKind) -> Result<(String, Span), ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                let text = token.lexeme.clone();
                Ok((text, self.advance()))
            }
            _ => Err(self.expected(kind)),
        }
    }

    /// Consume the `>` closing a type argument list, splitting a `>>`.
    pub fn expect_type_close(&mut self) -> Result<Span, ParseError> {
        let tokens = self.tokens;
        if self.split.is_none() {
            if let Some(token) = tokens.get(self.pos).filter(|t| t.kind == TokenKind::Shr) {
                let first = Span::with_len(token.span.start, 1);
                trace!(pos = self.pos, span_start = first.start, "split `>>`");
                self.split = Some(Token::new(
                    TokenKind::Gt,
                    Span::with_len(token.span.start + 1, 1),
                    token.line_start,
                    token.line,
                    token.column + 1,
                    ">",
                ));
                self.prev = Some(self.pos);
                self.prev_span = first;
                return Ok(first);
            }
        }
        self.expect(TokenKind::Gt)
    }

    /// Error located at the current token (or just past the last one).
    #[cold]
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        match self.current() {
            Some(token) => ParseError::at_token(kind, token),
            None => ParseError::at_end(kind, self.tokens.last()),
        }
    }

    #[cold]
    #[inline(never)]
    fn expected(&self, kind: TokenKind) -> ParseError {
        self.error(ParseErrorKind::Expected {
            expected: kind,
            found: self.current_kind(),
        })
    }
}
