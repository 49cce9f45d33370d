//! Diagnostic reporting for the Clover front end.
//!
//! A [`Diagnostic`] is a severity, a message and a [`Location`] that points
//! back into a [`SourceBuffer`](clover_lexer_core::SourceBuffer). Rendering
//! produces the classic two-part report:
//!
//! ```text
//! main.cl:1:10-13: error: expected `:`, got `identifier`
//!     1 | fn bar(x Int) { }
//!       |          ^~~
//! ```
//!
//! Rendering is a pure function of the diagnostic and a color flag; the
//! flag is resolved once by the caller (see [`ColorMode`]) and handed in
//! explicitly.

mod diagnostic;
pub mod emitter;
pub mod queue;
pub mod render;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use queue::{DiagnosticQueue, ReportedDiagnostic};
