//! The lexer driver: blank skipping, the recognizer chain and commits.

use clover_ir::{Span, Token};
use clover_lexer_core::{Cursor, SourceBuffer};

use crate::lex_error::LexError;
use crate::recognizers::{unexpected_token, Scan, RECOGNIZERS};

/// Streaming lexer over one source buffer.
///
/// Yields every token, comments included. The first error is yielded once
/// and ends the stream; tokens committed before it stay valid.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src SourceBuffer) -> Self {
        Lexer {
            cursor: source.cursor(),
            finished: false,
        }
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.cursor.source()
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.finished {
            return None;
        }
        self.cursor.skip_blank();
        if self.cursor.is_eof() {
            self.finished = true;
            return None;
        }

        for (name, recognize) in RECOGNIZERS {
            let saved = self.cursor;
            match recognize(&mut self.cursor) {
                Scan::Matched(kind) => {
                    let lexeme = self.cursor.commit();
                    tracing::trace!(
                        recognizer = name,
                        ?kind,
                        offset = lexeme.offset,
                        line = lexeme.line,
                        column = lexeme.column,
                        "token"
                    );
                    return Some(Ok(Token::new(
                        kind,
                        Span::with_len(lexeme.offset, lexeme.len),
                        lexeme.line_start,
                        lexeme.line,
                        lexeme.column,
                        lexeme.text,
                    )));
                }
                Scan::NotApplicable => self.cursor = saved,
                Scan::EndOfFile => {
                    self.finished = true;
                    return None;
                }
                Scan::Malformed(err) => return Some(Err(self.fail(name, err))),
            }
        }

        match unexpected_token(&self.cursor) {
            Scan::Malformed(err) => Some(Err(self.fail("fallback", err))),
            _ => {
                self.finished = true;
                None
            }
        }
    }

    fn fail(&mut self, recognizer: &str, err: LexError) -> LexError {
        tracing::debug!(recognizer, kind = %err.kind, offset = err.span.start, "lex error");
        self.finished = true;
        err
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
