//! Owned, immutable source text for one input file.
//!
//! Text is normalized once at construction: a leading UTF-8 BOM is dropped
//! and `\r\n` and lone `\r` both become `\n`, so every later line count
//! agrees with what the lexer sees. After that the buffer never changes.

use std::io;
use std::path::{Path, PathBuf};

use crate::Cursor;

/// Errors from building or reading a [`SourceBuffer`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be opened or read.
    #[error("failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A read reached past the end of the buffer.
    #[error("offset {offset} (+{len}) is out of bounds for source of length {length}")]
    OutOfBounds { offset: u32, len: u32, length: u32 },
    /// A substring would split a multi-byte character.
    #[error("range {offset}..{end} does not fall on character boundaries")]
    NotCharBoundary { offset: u32, end: u32 },
}

/// Immutable text of one source file plus its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    name: String,
    text: String,
}

impl SourceBuffer {
    /// Build a buffer from in-memory text.
    ///
    /// `name` is what diagnostics print as the file part of a location.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let text = if memchr::memchr(b'\r', text.as_bytes()).is_some() {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text.to_owned()
        };
        SourceBuffer {
            name: name.into(),
            text,
        }
    }

    /// Read a file into a new buffer.
    ///
    /// The file handle is released before this returns, on success and on
    /// error alike.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), &text))
    }

    /// File identifier shown in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in bytes. Files over 4 GiB saturate at `u32::MAX`.
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Create a [`Cursor`] at the start of the buffer.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Byte at `offset`, `None` past the end.
    #[inline]
    pub fn get(&self, offset: u32) -> Option<u8> {
        self.as_bytes().get(offset as usize).copied()
    }

    /// Byte at `offset`.
    pub fn at(&self, offset: u32) -> Result<u8, SourceError> {
        self.get(offset).ok_or(SourceError::OutOfBounds {
            offset,
            len: 1,
            length: self.len(),
        })
    }

    /// The `len` bytes starting at `offset`, as text.
    ///
    /// A range ending exactly at the end of the buffer is valid.
    pub fn substring_view(&self, offset: u32, len: u32) -> Result<&str, SourceError> {
        let length = self.len();
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= length)
            .ok_or(SourceError::OutOfBounds {
                offset,
                len,
                length,
            })?;
        self.text
            .get(offset as usize..end as usize)
            .ok_or(SourceError::NotCharBoundary { offset, end })
    }

    /// Number of leading bytes from `offset` that are in `accept`.
    pub fn span(&self, offset: u32, accept: &[u8]) -> u32 {
        self.count_from(offset, |b| accept.contains(&b))
    }

    /// Number of leading bytes from `offset` that are not in `reject`.
    pub fn complement_span(&self, offset: u32, reject: &[u8]) -> u32 {
        self.count_from(offset, |b| !reject.contains(&b))
    }

    /// Length of the line starting at `line_start`, excluding its
    /// terminator (`\r` or `\n`).
    pub fn line_length(&self, line_start: u32) -> u32 {
        let rest = self.tail(line_start);
        let len = memchr::memchr2(b'\r', b'\n', rest).unwrap_or(rest.len());
        u32::try_from(len).unwrap_or(u32::MAX)
    }

    fn tail(&self, offset: u32) -> &[u8] {
        self.as_bytes().get(offset as usize..).unwrap_or_default()
    }

    fn count_from(&self, offset: u32, pred: impl Fn(u8) -> bool) -> u32 {
        let count = self.tail(offset).iter().take_while(|&&b| pred(b)).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}
