//! Lexer for Clover.
//!
//! Turns a [`SourceBuffer`] into a [`TokenList`] by running an ordered
//! chain of recognizers at each token start (see `recognizers`). The first
//! malformed token stops the unit: its diagnostic is emitted, the tokens
//! committed before it are kept, and nothing after it is scanned.
//!
//! Comments are recognized like any other token but [`lex`] drops them
//! from its output; [`lex_with_comments`] keeps them.

mod escape;
mod lex_error;
mod lexer;
mod recognizers;
pub mod tables;

use clover_diagnostic::DiagnosticEmitter;
use clover_ir::{TokenKind, TokenList};
use clover_lexer_core::SourceBuffer;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;

/// Result of lexing one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    /// The error that stopped lexing, if any. Its diagnostic has already
    /// been emitted.
    pub error: Option<LexError>,
}

impl LexOutput {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_errors(&self) -> bool {
        self.error.is_some()
    }
}

/// Lex `source`, dropping comments.
pub fn lex(source: &SourceBuffer, emitter: &mut dyn DiagnosticEmitter) -> LexOutput {
    lex_filtered(source, emitter, false)
}

/// Lex `source`, keeping comment tokens in the output.
pub fn lex_with_comments(source: &SourceBuffer, emitter: &mut dyn DiagnosticEmitter) -> LexOutput {
    lex_filtered(source, emitter, true)
}

fn lex_filtered(
    source: &SourceBuffer,
    emitter: &mut dyn DiagnosticEmitter,
    keep_comments: bool,
) -> LexOutput {
    let mut output = LexOutput::default();
    for item in Lexer::new(source) {
        match item {
            Ok(token) if token.kind == TokenKind::Comment && !keep_comments => {}
            Ok(token) => output.tokens.push(token),
            Err(err) => {
                emitter.emit(&err.to_diagnostic(source));
                output.error = Some(err);
            }
        }
    }
    tracing::debug!(
        file = source.name(),
        tokens = output.tokens.len(),
        failed = output.has_errors(),
        "lexed"
    );
    output
}
