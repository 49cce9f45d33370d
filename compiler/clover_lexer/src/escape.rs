//! Escape sequence validation inside string and character literals.
//!
//! Literals are kept as raw lexeme text; this only checks that every `\`
//! starts a well-formed escape:
//! - `\a \b \e \f \n \r \t \v \" \' \\`
//! - `\xHH`, `\uHHHH`, `\UHHHHHHHH` with exactly that many hex digits

use clover_lexer_core::Cursor;

use crate::lex_error::{LexError, LexErrorKind};
use crate::tables::{hex_escape_width, SHORT_ESCAPES};

/// Consume one escape sequence starting at the `\` under the cursor.
///
/// A `\` at end of file consumes only the backslash and succeeds, leaving
/// the caller to report the unclosed literal.
pub(crate) fn eat_escape(cursor: &mut Cursor<'_>) -> Result<(), LexError> {
    let start = cursor.offset();
    cursor.bump(1);

    let Some(marker) = cursor.current() else {
        return Ok(());
    };

    if SHORT_ESCAPES.contains(&marker) {
        cursor.bump(1);
        return Ok(());
    }

    if let Some(width) = hex_escape_width(marker) {
        cursor.bump(1);
        for _ in 0..width {
            match cursor.current() {
                Some(b) if b.is_ascii_hexdigit() => cursor.bump(1),
                _ => {
                    return Err(LexError::at(
                        cursor,
                        LexErrorKind::MalformedEscape,
                        start,
                        cursor.offset() - start,
                    ));
                }
            }
        }
        return Ok(());
    }

    let mut probe = *cursor;
    probe.bump_char();
    Err(LexError::at(
        cursor,
        LexErrorKind::InvalidEscape,
        start,
        probe.offset() - start,
    ))
}
