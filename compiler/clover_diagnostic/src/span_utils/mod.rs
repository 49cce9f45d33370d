//! Offset to line/column mapping.
//!
//! Front-end locations all come from tokens. [`LineOffsetTable`] is for
//! tools and tests that only hold a byte offset; it pre-computes line
//! starts for O(log L) lookup.

/// A resolved position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinePosition {
    /// 1-based line number.
    pub line: u32,
    /// 1-based byte column.
    pub column: u32,
    /// Byte offset of the first byte of the line.
    pub line_start: u32,
}

/// Pre-computed line offset table.
///
/// ```
/// use clover_diagnostic::span_utils::LineOffsetTable;
///
/// let table = LineOffsetTable::build("line1\nline2\nline3");
///
/// assert_eq!(table.offset_to_line_col(0), (1, 1));
/// assert_eq!(table.offset_to_line_col(8), (2, 3));
/// assert_eq!(table.offset_to_line_col(12), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// offsets[0] = 0, offsets[i] = byte after the i-th `\n`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Scan `source` once for newlines.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            memchr::memchr_iter(b'\n', source.as_bytes())
                .map(|i| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Full position of `offset`. Columns count bytes, matching the lexer.
    pub fn position(&self, offset: u32) -> LinePosition {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0);
        LinePosition {
            line,
            column: offset - line_start + 1,
            line_start,
        }
    }

    /// 1-based `(line, column)` of `offset`.
    pub fn offset_to_line_col(&self, offset: u32) -> (u32, u32) {
        let pos = self.position(offset);
        (pos.line, pos.column)
    }

    /// Byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
