//! In-memory diagnostic collection.
//!
//! [`DiagnosticQueue`] is an emitter that keeps an owned copy of every
//! diagnostic, including its plain-text rendering. Tests use it to assert
//! on exact positions and messages without capturing stderr; tools use it
//! to post-process reports.

use crate::emitter::DiagnosticEmitter;
use crate::render;
use crate::{Diagnostic, Severity};

/// Owned record of an emitted diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportedDiagnostic {
    pub severity: Severity,
    pub message: String,
    pub scope: Option<String>,
    pub file: String,
    pub offset: u32,
    pub length: u32,
    pub line: u32,
    pub column: u32,
    pub notes: Vec<String>,
    /// Uncolored rendering, exactly as a terminal emitter would print it.
    pub rendered: String,
}

impl From<&Diagnostic<'_>> for ReportedDiagnostic {
    fn from(diagnostic: &Diagnostic<'_>) -> Self {
        let location = &diagnostic.location;
        ReportedDiagnostic {
            severity: diagnostic.severity,
            message: diagnostic.message.clone(),
            scope: location.scope.clone(),
            file: location.file().to_owned(),
            offset: location.offset,
            length: location.length,
            line: location.line,
            column: location.column,
            notes: diagnostic.notes.clone(),
            rendered: render::render_to_string(diagnostic, false),
        }
    }
}

/// Collects diagnostics in emission order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    reported: Vec<ReportedDiagnostic>,
    summary: Option<(usize, usize)>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportedDiagnostic> {
        self.reported.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Messages only, in emission order.
    pub fn messages(&self) -> Vec<&str> {
        self.reported.iter().map(|d| d.message.as_str()).collect()
    }

    /// Reports of one severity.
    pub fn with_severity(&self, severity: Severity) -> Vec<&ReportedDiagnostic> {
        self.reported
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    /// The last `emit_summary` call, as `(errors, warnings)`.
    pub fn summary(&self) -> Option<(usize, usize)> {
        self.summary
    }

    /// Remove and return everything collected so far.
    pub fn take(&mut self) -> Vec<ReportedDiagnostic> {
        std::mem::take(&mut self.reported)
    }

    fn count(&self, severity: Severity) -> usize {
        self.reported
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl DiagnosticEmitter for DiagnosticQueue {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>) {
        self.reported.push(ReportedDiagnostic::from(diagnostic));
    }

    fn flush(&mut self) {}

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        self.summary = Some((error_count, warning_count));
    }

    fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }
}

impl<'a> IntoIterator for &'a DiagnosticQueue {
    type Item = &'a ReportedDiagnostic;
    type IntoIter = std::slice::Iter<'a, ReportedDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.reported.iter()
    }
}
