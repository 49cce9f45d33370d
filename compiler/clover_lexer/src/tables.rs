//! Fixed lexical tables: delimiters, escapes, identifier limits and the
//! keyword lookup.
//!
//! Operator and symbol spellings live on [`TokenKind`] itself
//! ([`TokenKind::OPERATORS`], [`TokenKind::SYMBOLS`]); the recognizers walk
//! those arrays in order, so their order is the match priority.

use clover_ir::TokenKind;

/// Longest identifier accepted, in bytes.
pub const MAX_IDENTIFIER_LENGTH: u32 = 63;

/// Bytes that end an identifier or numeric run.
pub const DELIMITERS: &[u8] = b" \t\r\n.,:;()[]{}<>^'\"|/!?&%*-+=~";

/// Characters allowed after `\` in a string or character literal.
pub const SHORT_ESCAPES: &[u8] = b"abefnrtv\"'\\";

pub const DIGITS: &[u8] = b"0123456789";

#[inline]
pub fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
pub fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Number of hex digits a fixed-width escape takes, if `marker` starts one.
#[inline]
pub fn hex_escape_width(marker: u8) -> Option<u32> {
    match marker {
        b'x' => Some(2),
        b'u' => Some(4),
        b'U' => Some(8),
        _ => None,
    }
}

/// Look up a keyword by its exact text.
///
/// Length-bucketed: runs outside 2-8 bytes are rejected without any string
/// comparison.
#[inline]
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(2..=8).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "fn" => Some(TokenKind::Fn),
            "in" => Some(TokenKind::In),
            "as" => Some(TokenKind::As),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            "try" => Some(TokenKind::Try),
            "nil" => Some(TokenKind::Nil),
            "pub" => Some(TokenKind::Pub),
            _ => None,
        },
        4 => match text {
            "type" => Some(TokenKind::Type),
            "enum" => Some(TokenKind::Enum),
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "trait" => Some(TokenKind::Trait),
            "defer" => Some(TokenKind::Defer),
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            "match" => Some(TokenKind::Match),
            "false" => Some(TokenKind::False),
            "const" => Some(TokenKind::Const),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::Import),
            "struct" => Some(TokenKind::Struct),
            "typeof" => Some(TokenKind::Typeof),
            "return" => Some(TokenKind::Return),
            "static" => Some(TokenKind::Static),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}
