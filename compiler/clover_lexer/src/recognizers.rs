//! The recognizer chain.
//!
//! Each recognizer looks at the cursor and either claims the upcoming text
//! or declines. [`RECOGNIZERS`] is tried in order and the order resolves
//! ambiguity: comments before the `/` operator, operators before symbols,
//! keywords before identifiers, floats before integers. When nothing
//! matches, [`unexpected_token`] reports the character under the cursor, so
//! the chain as a whole always makes a decision.
//!
//! A recognizer that declines may leave the cursor anywhere; the driver
//! restores its snapshot before trying the next one.

use clover_ir::TokenKind;
use clover_lexer_core::Cursor;

use crate::escape::eat_escape;
use crate::lex_error::{LexError, LexErrorKind};
use crate::tables::{
    is_name_continue, is_name_start, lookup_keyword, DELIMITERS, DIGITS, MAX_IDENTIFIER_LENGTH,
};

/// Outcome of one recognizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Scan {
    /// The cursor now sits after a token of this kind; commit it.
    Matched(TokenKind),
    /// Not this recognizer's token.
    NotApplicable,
    /// Nothing left to scan.
    EndOfFile,
    /// This recognizer's token, but broken. Stops the stream.
    Malformed(LexError),
}

pub(crate) type Recognizer = fn(&mut Cursor<'_>) -> Scan;

pub(crate) const RECOGNIZERS: [(&str, Recognizer); 11] = [
    ("comment", comment),
    ("string", string),
    ("character", character),
    ("operator", operator),
    ("symbol", symbol),
    ("keyword", keyword),
    ("identifier", identifier),
    ("float", float),
    ("binary", binary_integer),
    ("hex", hex_integer),
    ("integer", integer),
];

/// `//` to end of line.
fn comment(cursor: &mut Cursor<'_>) -> Scan {
    if !cursor.starts_with(b"//") {
        return Scan::NotApplicable;
    }
    cursor.eat_until_newline();
    Scan::Matched(TokenKind::Comment)
}

fn string(cursor: &mut Cursor<'_>) -> Scan {
    if cursor.current() != Some(b'"') {
        return Scan::NotApplicable;
    }
    cursor.bump(1);
    loop {
        match cursor.current() {
            None | Some(b'\n') => return unclosed(cursor, LexErrorKind::UnclosedString),
            Some(b'"') => {
                cursor.bump(1);
                return Scan::Matched(TokenKind::String);
            }
            Some(b'\\') => {
                if let Err(err) = eat_escape(cursor) {
                    return Scan::Malformed(err);
                }
            }
            Some(_) => cursor.bump_char(),
        }
    }
}

fn character(cursor: &mut Cursor<'_>) -> Scan {
    if cursor.current() != Some(b'\'') {
        return Scan::NotApplicable;
    }
    cursor.bump(1);
    let mut chars = 0u32;
    loop {
        match cursor.current() {
            None | Some(b'\n') => return unclosed(cursor, LexErrorKind::UnclosedChar),
            Some(b'\'') => {
                cursor.bump(1);
                return match chars {
                    0 => Scan::Malformed(LexError::pending(cursor, LexErrorKind::EmptyChar)),
                    1 => Scan::Matched(TokenKind::Char),
                    _ => Scan::Malformed(LexError::pending(cursor, LexErrorKind::MultipleChars)),
                };
            }
            Some(b'\\') => {
                if let Err(err) = eat_escape(cursor) {
                    return Scan::Malformed(err);
                }
                chars += 1;
            }
            Some(_) => {
                cursor.bump_char();
                chars += 1;
            }
        }
    }
}

/// Unclosed literals point at the opening quote only.
fn unclosed(cursor: &Cursor<'_>, kind: LexErrorKind) -> Scan {
    Scan::Malformed(LexError::at(cursor, kind, cursor.token_start(), 1))
}

/// First entry of `table` whose spelling starts the remaining text.
fn fixed(cursor: &mut Cursor<'_>, table: &[TokenKind]) -> Scan {
    for &kind in table {
        let Some(text) = kind.text() else { continue };
        if cursor.starts_with(text.as_bytes()) {
            cursor.bump(u32::try_from(text.len()).unwrap_or(u32::MAX));
            return Scan::Matched(kind);
        }
    }
    Scan::NotApplicable
}

fn operator(cursor: &mut Cursor<'_>) -> Scan {
    fixed(cursor, &TokenKind::OPERATORS)
}

fn symbol(cursor: &mut Cursor<'_>) -> Scan {
    fixed(cursor, &TokenKind::SYMBOLS)
}

/// Advance to the next delimiter, returning the run's text.
fn eat_run<'a>(cursor: &mut Cursor<'a>) -> &'a str {
    cursor.eat_until(DELIMITERS);
    cursor.pending()
}

fn keyword(cursor: &mut Cursor<'_>) -> Scan {
    if !cursor.current().is_some_and(is_name_start) {
        return Scan::NotApplicable;
    }
    match lookup_keyword(eat_run(cursor)) {
        Some(kind) => Scan::Matched(kind),
        None => Scan::NotApplicable,
    }
}

fn identifier(cursor: &mut Cursor<'_>) -> Scan {
    if !cursor.current().is_some_and(is_name_start) {
        return Scan::NotApplicable;
    }
    let run = eat_run(cursor);
    if !run.bytes().all(is_name_continue) {
        return Scan::Malformed(LexError::pending(cursor, LexErrorKind::InvalidSyntax));
    }
    let len = cursor.pending_len();
    if len > MAX_IDENTIFIER_LENGTH {
        return Scan::Malformed(LexError::pending(
            cursor,
            LexErrorKind::IdentifierTooLong { len },
        ));
    }
    Scan::Matched(TokenKind::Ident)
}

/// `digits '.' digits`. Backs off (via the driver's snapshot) when the
/// integer part is not followed by `.`.
fn float(cursor: &mut Cursor<'_>) -> Scan {
    if !cursor.current().is_some_and(|b| b.is_ascii_digit()) {
        return Scan::NotApplicable;
    }
    let saved = *cursor;
    cursor.eat_span(DIGITS);
    if cursor.current() != Some(b'.') {
        *cursor = saved;
        return Scan::NotApplicable;
    }
    cursor.bump(1);
    if cursor.eat_span(DIGITS) == 0 {
        return Scan::Malformed(LexError::pending(cursor, LexErrorKind::MissingFraction));
    }
    if !at_delimiter(cursor) {
        cursor.eat_until(DELIMITERS);
        return Scan::Malformed(LexError::pending(cursor, LexErrorKind::InvalidSyntax));
    }
    Scan::Matched(TokenKind::Float)
}

fn at_delimiter(cursor: &Cursor<'_>) -> bool {
    cursor.current().map_or(true, |b| DELIMITERS.contains(&b))
}

/// Prefixed integer: the rest of the run must be non-empty and all `valid`.
fn prefixed_integer(
    cursor: &mut Cursor<'_>,
    prefix: &[u8],
    valid: fn(u8) -> bool,
    kind: TokenKind,
) -> Scan {
    if !cursor.starts_with(prefix) {
        return Scan::NotApplicable;
    }
    let run = eat_run(cursor).as_bytes();
    let digits = &run[prefix.len()..];
    if digits.is_empty() || !digits.iter().copied().all(valid) {
        return Scan::Malformed(LexError::pending(cursor, LexErrorKind::InvalidSyntax));
    }
    Scan::Matched(kind)
}

fn binary_integer(cursor: &mut Cursor<'_>) -> Scan {
    prefixed_integer(cursor, b"0b", |b| b == b'0' || b == b'1', TokenKind::BinInt)
}

fn hex_integer(cursor: &mut Cursor<'_>) -> Scan {
    prefixed_integer(cursor, b"0x", |b| b.is_ascii_hexdigit(), TokenKind::HexInt)
}

fn integer(cursor: &mut Cursor<'_>) -> Scan {
    if !cursor.current().is_some_and(|b| b.is_ascii_digit()) {
        return Scan::NotApplicable;
    }
    if !eat_run(cursor).bytes().all(|b| b.is_ascii_digit()) {
        return Scan::Malformed(LexError::pending(cursor, LexErrorKind::InvalidSyntax));
    }
    Scan::Matched(TokenKind::Int)
}

/// Last resort: nothing recognized the character under the cursor.
pub(crate) fn unexpected_token(cursor: &Cursor<'_>) -> Scan {
    if cursor.is_eof() {
        return Scan::EndOfFile;
    }
    let mut probe = *cursor;
    probe.bump_char();
    Scan::Malformed(LexError::at(
        cursor,
        LexErrorKind::UnexpectedToken,
        cursor.offset(),
        probe.offset() - cursor.offset(),
    ))
}
