//! Diagnostic Emitters
//!
//! The lexer and parser report through [`DiagnosticEmitter`] as they go;
//! what happens to a diagnostic is up to the emitter:
//! - [`TerminalEmitter`]: rendered text to any writer, optionally colored
//! - [`DiagnosticQueue`](crate::DiagnosticQueue): kept in memory for tests
//!   and tooling

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic<'_>);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic<'_>]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);

    /// Errors emitted so far.
    fn error_count(&self) -> usize;

    /// Warnings emitted so far.
    fn warning_count(&self) -> usize;
}
