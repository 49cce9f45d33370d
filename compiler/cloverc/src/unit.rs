//! One input file's trip through the front end.

use std::path::Path;

use clover_diagnostic::DiagnosticEmitter;
use clover_ir::ast::Root;
use clover_ir::TokenList;
use clover_lexer_core::{SourceBuffer, SourceError};

/// Source, tokens and tree of one file, plus whether any stage failed.
///
/// Stages run in order: [`lex`](Self::lex) fills the tokens,
/// [`parse`](Self::parse) fills the tree. A failed stage leaves the unit
/// failed and later stages refuse to run.
#[derive(Debug)]
pub struct CompileUnit {
    source: SourceBuffer,
    tokens: TokenList,
    root: Option<Root>,
    failed: bool,
}

impl CompileUnit {
    pub fn new(source: SourceBuffer) -> Self {
        CompileUnit {
            source,
            tokens: TokenList::new(),
            root: None,
            failed: false,
        }
    }

    /// Read `path` into a new unit. The file is closed before this returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        SourceBuffer::load(path).map(Self::new)
    }

    pub fn name(&self) -> &str {
        self.source.name()
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// The tree, once parsing succeeded.
    pub fn root(&self) -> Option<&Root> {
        self.root.as_ref()
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Lex the source. Returns `false` (and marks the unit failed) on the
    /// first malformed token, including an over-long identifier.
    pub fn lex(&mut self, emitter: &mut dyn DiagnosticEmitter) -> bool {
        if self.failed {
            return false;
        }
        let output = clover_lexer::lex(&self.source, emitter);
        self.failed = output.has_errors();
        self.tokens = output.tokens;
        !self.failed
    }

    /// Parse the tokens. Returns `false` (and marks the unit failed) on
    /// the first syntax error.
    pub fn parse(&mut self, emitter: &mut dyn DiagnosticEmitter) -> bool {
        if self.failed {
            return false;
        }
        let output = clover_parse::parse(&self.source, &self.tokens, emitter);
        self.failed = output.has_errors();
        self.root = output.root;
        !self.failed
    }
}
