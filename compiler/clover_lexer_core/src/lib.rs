//! Low-level source handling for the Clover lexer.
//!
//! - [`SourceBuffer`]: immutable, newline-normalized file text with
//!   bounds-checked access and byte-set span scanning
//! - [`Cursor`]: the copyable scan position (offset, line, column) the
//!   lexer advances; copying it is the backtracking snapshot
//!
//! Everything here works on bytes. The token grammar is ASCII, so byte
//! offsets double as character offsets for every recognized token.

mod cursor;
mod source_buffer;

pub use cursor::{Cursor, Lexeme};
pub use source_buffer::{SourceBuffer, SourceError};
