//! Run-level failures.

use clover_lexer_core::SourceError;

/// Why a compile run stopped.
///
/// `Lex` and `Parse` only name the unit; their located diagnostics were
/// emitted before the error was returned.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("no input files provided")]
    NoInputFiles,
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("could not lex `{file}`")]
    Lex { file: String },
    #[error("could not parse `{file}`")]
    Parse { file: String },
}

impl CompileError {
    /// Whether the error already has a located diagnostic on record.
    pub fn is_reported(&self) -> bool {
        matches!(self, CompileError::Lex { .. } | CompileError::Parse { .. })
    }
}
