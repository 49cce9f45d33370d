//! Lexer error types.
//!
//! A [`LexError`] carries everything needed to point at the offending text
//! (span plus line/column of its first byte) so it can be turned into a
//! [`Diagnostic`] without re-scanning.

use clover_diagnostic::{Diagnostic, Location, Severity};
use clover_ir::Span;
use clover_lexer_core::{Cursor, SourceBuffer};

use crate::tables::MAX_IDENTIFIER_LENGTH;

/// What went wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unclosed string literal")]
    UnclosedString,
    #[error("unclosed character literal")]
    UnclosedChar,
    /// `\` followed by a character outside the escape set.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// `\x`, `\u` or `\U` with too few or non-hex digits.
    #[error("malformed escape sequence")]
    MalformedEscape,
    #[error("multiple characters in character literal")]
    MultipleChars,
    #[error("empty character literal")]
    EmptyChar,
    /// Reported as a warning, but the token is still rejected.
    #[error("identifier is too long: {len}")]
    IdentifierTooLong { len: u32 },
    /// A numeric or identifier run containing characters it may not.
    #[error("invalid syntax")]
    InvalidSyntax,
    #[error("expected digits after decimal point")]
    MissingFraction,
    #[error("unexpected token")]
    UnexpectedToken,
}

/// A located lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub line_start: u32,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    /// Error covering `len` bytes from `offset`, on the cursor's current line.
    #[cold]
    pub(crate) fn at(cursor: &Cursor<'_>, kind: LexErrorKind, offset: u32, len: u32) -> Self {
        LexError {
            kind,
            span: Span::with_len(offset, len.max(1)),
            line_start: cursor.line_start(),
            line: cursor.line(),
            column: cursor.column_at(offset),
        }
    }

    /// Error covering everything scanned for the current token.
    #[cold]
    pub(crate) fn pending(cursor: &Cursor<'_>, kind: LexErrorKind) -> Self {
        Self::at(cursor, kind, cursor.token_start(), cursor.pending_len())
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            LexErrorKind::IdentifierTooLong { .. } => Severity::Warning,
            _ => Severity::Error,
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
        let diagnostic = Diagnostic::new(self.severity(), self.kind.to_string(), self.location(source));
        match self.kind {
            LexErrorKind::IdentifierTooLong { .. } => diagnostic.with_note(format!(
                "maximum identifier length is {MAX_IDENTIFIER_LENGTH}"
            )),
            _ => diagnostic,
        }
    }
}
