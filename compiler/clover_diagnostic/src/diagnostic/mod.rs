//! Core diagnostic types.

use std::fmt;

use clover_ir::{Span, Token};
use clover_lexer_core::SourceBuffer;

/// Diagnostic severity level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Note,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Warnings and errors point at the offending source with a snippet;
    /// info and note are header-only.
    pub fn is_blocking(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a diagnostic points.
///
/// Built on demand from lexer cursor state or from a token; never stored
/// past the lifetime of the source it borrows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location<'src> {
    source: &'src SourceBuffer,
    pub offset: u32,
    pub line_start: u32,
    pub length: u32,
    pub line: u32,
    pub column: u32,
    pub scope: Option<String>,
}

impl<'src> Location<'src> {
    pub fn new(
        source: &'src SourceBuffer,
        offset: u32,
        length: u32,
        line_start: u32,
        line: u32,
        column: u32,
    ) -> Self {
        Location {
            source,
            offset,
            line_start,
            length,
            line,
            column,
            scope: None,
        }
    }

    /// Location covering a whole token.
    pub fn of_token(source: &'src SourceBuffer, token: &Token) -> Self {
        Self::new(
            source,
            token.span.start,
            token.span.len(),
            token.line_start,
            token.line,
            token.column,
        )
    }

    /// Attach a scope label such as the enclosing function name.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.source
    }

    pub fn file(&self) -> &'src str {
        self.source.name()
    }

    pub fn span(&self) -> Span {
        Span::with_len(self.offset, self.length)
    }

    /// Column one past the end of the located text.
    pub fn end_column(&self) -> u32 {
        self.column + self.length
    }

    /// The full source line containing this location, without its
    /// terminator. Empty if the line start lies outside the buffer.
    pub fn line_text(&self) -> &'src str {
        let len = self.source.line_length(self.line_start);
        self.source
            .substring_view(self.line_start, len)
            .unwrap_or_default()
    }
}

/// `file:line:col`, plus `-end` when the location spans several columns.
impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file(), self.line, self.column)?;
        if self.length > 1 {
            write!(f, "-{}", self.end_column())?;
        }
        Ok(())
    }
}

/// A reportable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'src> {
    pub severity: Severity,
    pub message: String,
    pub location: Location<'src>,
    /// Follow-up notes rendered after the main report, at the same location.
    pub notes: Vec<String>,
}

impl<'src> Diagnostic<'src> {
    pub fn new(severity: Severity, message: impl Into<String>, location: Location<'src>) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            location,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, location: Location<'src>) -> Self {
        Self::new(Severity::Error, message, location)
    }

    pub fn warning(message: impl Into<String>, location: Location<'src>) -> Self {
        Self::new(Severity::Warning, message, location)
    }

    pub fn note(message: impl Into<String>, location: Location<'src>) -> Self {
        Self::new(Severity::Note, message, location)
    }

    pub fn info(message: impl Into<String>, location: Location<'src>) -> Self {
        Self::new(Severity::Info, message, location)
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
