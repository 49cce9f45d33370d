//! Scan position over a [`SourceBuffer`].
//!
//! The cursor tracks five numbers: the scan `offset`, the `token_start`
//! of the token being recognized, and the `line_start`/`line`/`column` of
//! that token. It is `Copy`, so saving and restoring state for
//! backtracking is a plain assignment:
//!
//! ```text
//! let saved = *cursor;
//! cursor.eat_span(DIGITS);
//! if cursor.current() != Some(b'.') {
//!     *cursor = saved;
//! }
//! ```
//!
//! `column` only moves when blanks are skipped or a token is committed;
//! scanning inside a token leaves it pointing at the token's first byte.

use std::fmt;

use crate::SourceBuffer;

/// Horizontal blanks. Buffers hold no `\r`; see [`SourceBuffer::new`].
const HORIZONTAL_BLANKS: &[u8] = b" \t";

/// Copyable scan state over a source buffer.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a SourceBuffer,
    offset: u32,
    token_start: u32,
    line_start: u32,
    line: u32,
    column: u32,
}

/// A committed token's text and position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub offset: u32,
    pub len: u32,
    pub line_start: u32,
    pub line: u32,
    pub column: u32,
    pub text: &'a str,
}

impl<'a> Cursor<'a> {
    /// Cursor at byte 0, line 1, column 1.
    pub fn new(source: &'a SourceBuffer) -> Self {
        Cursor {
            source,
            offset: 0,
            token_start: 0,
            line_start: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub fn source(&self) -> &'a SourceBuffer {
        self.source
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Offset where the token being recognized began.
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    #[inline]
    pub fn line_start(&self) -> u32 {
        self.line_start
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the token being recognized.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Column of an arbitrary offset on the current token's line.
    #[inline]
    pub fn column_at(&self, offset: u32) -> u32 {
        self.column + offset.saturating_sub(self.token_start)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Byte under the cursor.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.get(self.offset)
    }

    /// Byte `n` positions past the cursor.
    #[inline]
    pub fn peek(&self, n: u32) -> Option<u8> {
        self.source.get(self.offset.saturating_add(n))
    }

    /// Does the text at the cursor begin with `prefix`?
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.source
            .as_bytes()
            .get(self.offset as usize..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// Advance `n` bytes, clamped to the end of the buffer.
    #[inline]
    pub fn bump(&mut self, n: u32) {
        self.offset = self.offset.saturating_add(n).min(self.source.len());
    }

    /// Advance over one UTF-8 character.
    pub fn bump_char(&mut self) {
        let width = match self.current() {
            None => 0,
            Some(b) if b < 0x80 => 1,
            Some(b) if b >> 5 == 0b110 => 2,
            Some(b) if b >> 4 == 0b1110 => 3,
            Some(b) if b >> 3 == 0b1_1110 => 4,
            Some(_) => 1,
        };
        self.bump(width);
    }

    /// Advance over bytes in `accept`, returning how many were consumed.
    pub fn eat_span(&mut self, accept: &[u8]) -> u32 {
        let n = self.source.span(self.offset, accept);
        self.offset += n;
        n
    }

    /// Advance up to (not over) the next byte in `reject`.
    pub fn eat_until(&mut self, reject: &[u8]) -> u32 {
        let n = self.source.complement_span(self.offset, reject);
        self.offset += n;
        n
    }

    /// Advance up to (not over) the next `\n`, or to end of file.
    pub fn eat_until_newline(&mut self) -> u32 {
        let rest = self
            .source
            .as_bytes()
            .get(self.offset as usize..)
            .unwrap_or_default();
        let n = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        self.bump(n);
        n
    }

    /// Skip alternating runs of horizontal blanks and newlines, then start
    /// a new token at the resulting offset.
    ///
    /// Horizontal runs advance `column`; newline runs add their length to
    /// `line`, move `line_start` past the run and reset `column` to 1.
    pub fn skip_blank(&mut self) {
        loop {
            let blanks = self.eat_span(HORIZONTAL_BLANKS);
            self.column += blanks;

            let newlines = self.eat_span(b"\n");
            if newlines > 0 {
                self.line += newlines;
                self.line_start = self.offset;
                self.column = 1;
            }

            if blanks == 0 && newlines == 0 {
                break;
            }
        }
        self.token_start = self.offset;
    }

    /// Bytes scanned since `token_start`.
    #[inline]
    pub fn pending_len(&self) -> u32 {
        self.offset - self.token_start
    }

    /// Text scanned since `token_start`.
    pub fn pending(&self) -> &'a str {
        self.source
            .text()
            .get(self.token_start as usize..self.offset as usize)
            .unwrap_or_default()
    }

    /// Accept the scanned text as a token.
    ///
    /// Returns its position and moves `column` and `token_start` to where
    /// the next token would begin.
    pub fn commit(&mut self) -> Lexeme<'a> {
        let lexeme = Lexeme {
            offset: self.token_start,
            len: self.pending_len(),
            line_start: self.line_start,
            line: self.line,
            column: self.column,
            text: self.pending(),
        };
        self.column += lexeme.len;
        self.token_start = self.offset;
        lexeme
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("token_start", &self.token_start)
            .field("line_start", &self.line_start)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}
