//! Token types for the Clover lexer.
//!
//! `TokenKind` is a closed, payload-free set: literal values are kept as
//! lexeme text on the [`Token`] and interpreted by later phases.

use super::Span;
use std::fmt;

/// A located token.
///
/// `line` and `column` are 1-based and describe where the token starts.
/// `line_start` is the byte offset of the first byte of that line, which is
/// what the diagnostic renderer needs to re-extract the source line.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line_start: u32,
    pub line: u32,
    pub column: u32,
    pub lexeme: String,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        span: Span,
        line_start: u32,
        line: u32,
        column: u32,
        lexeme: impl Into<String>,
    ) -> Self {
        Token {
            kind,
            span,
            line_start,
            line,
            column,
            lexeme: lexeme.into(),
        }
    }

    /// Length of the lexeme in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {} ({}:{})",
            self.kind, self.lexeme, self.span, self.line, self.column
        )
    }
}

/// Broad token classes, used by dumps and by the lexer's table lookups.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenCategory {
    Comment,
    Literal,
    Identifier,
    Keyword,
    Operator,
    Symbol,
}

/// Token kinds for Clover.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Primitives
    Comment,
    Ident,
    String,
    Char,
    Float,
    Int,
    BinInt,
    HexInt,

    // Keywords
    Import,
    Fn,
    Type,
    Trait,
    Defer,
    Struct,
    Enum,
    In,
    As,
    Typeof,
    If,
    Elif,
    Else,
    For,
    While,
    Continue,
    Break,
    Match,
    Return,
    Let,
    Try,
    Nil,
    True,
    False,
    Pub,
    Static,
    Const,

    // Operators
    Shl,      // <<
    Shr,      // >>
    AmpAmp,   // &&
    PipePipe, // ||
    EqEq,     // ==
    NotEq,    // !=
    LtEq,     // <=
    GtEq,     // >=
    Bang,     // !
    Amp,      // &
    Pipe,     // |
    Caret,    // ^
    Tilde,    // ~
    Lt,       // <
    Gt,       // >
    Eq,       // =
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Percent,  // %

    // Symbols
    Dot,
    Comma,
    Colon,
    Semicolon,
    Question,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

impl TokenKind {
    /// All keywords, in table order.
    pub const KEYWORDS: [TokenKind; 27] = [
        TokenKind::Import,
        TokenKind::Fn,
        TokenKind::Type,
        TokenKind::Trait,
        TokenKind::Defer,
        TokenKind::Struct,
        TokenKind::Enum,
        TokenKind::In,
        TokenKind::As,
        TokenKind::Typeof,
        TokenKind::If,
        TokenKind::Elif,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::While,
        TokenKind::Continue,
        TokenKind::Break,
        TokenKind::Match,
        TokenKind::Return,
        TokenKind::Let,
        TokenKind::Try,
        TokenKind::Nil,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Pub,
        TokenKind::Static,
        TokenKind::Const,
    ];

    /// All operators, two-character forms first so that a longest-match
    /// scan over this table never splits `<<` into two `<`.
    pub const OPERATORS: [TokenKind; 21] = [
        TokenKind::Shl,
        TokenKind::Shr,
        TokenKind::AmpAmp,
        TokenKind::PipePipe,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::Bang,
        TokenKind::Amp,
        TokenKind::Pipe,
        TokenKind::Caret,
        TokenKind::Tilde,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Eq,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
    ];

    /// All single-character punctuation symbols.
    pub const SYMBOLS: [TokenKind; 11] = [
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Question,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
    ];

    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::Comment => TokenCategory::Comment,
            TokenKind::Ident => TokenCategory::Identifier,
            TokenKind::String
            | TokenKind::Char
            | TokenKind::Float
            | TokenKind::Int
            | TokenKind::BinInt
            | TokenKind::HexInt => TokenCategory::Literal,
            TokenKind::Import
            | TokenKind::Fn
            | TokenKind::Type
            | TokenKind::Trait
            | TokenKind::Defer
            | TokenKind::Struct
            | TokenKind::Enum
            | TokenKind::In
            | TokenKind::As
            | TokenKind::Typeof
            | TokenKind::If
            | TokenKind::Elif
            | TokenKind::Else
            | TokenKind::For
            | TokenKind::While
            | TokenKind::Continue
            | TokenKind::Break
            | TokenKind::Match
            | TokenKind::Return
            | TokenKind::Let
            | TokenKind::Try
            | TokenKind::Nil
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Pub
            | TokenKind::Static
            | TokenKind::Const => TokenCategory::Keyword,
            TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::AmpAmp
            | TokenKind::PipePipe
            | TokenKind::EqEq
            | TokenKind::NotEq
            | TokenKind::LtEq
            | TokenKind::GtEq
            | TokenKind::Bang
            | TokenKind::Amp
            | TokenKind::Pipe
            | TokenKind::Caret
            | TokenKind::Tilde
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent => TokenCategory::Operator,
            TokenKind::Dot
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::Question
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::LBrace
            | TokenKind::RBrace => TokenCategory::Symbol,
        }
    }

    /// Source text of a fixed-spelling token, `None` for primitives whose
    /// text varies (identifiers, literals, comments).
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Comment
            | TokenKind::Ident
            | TokenKind::String
            | TokenKind::Char
            | TokenKind::Float
            | TokenKind::Int
            | TokenKind::BinInt
            | TokenKind::HexInt => return None,

            TokenKind::Import => "import",
            TokenKind::Fn => "fn",
            TokenKind::Type => "type",
            TokenKind::Trait => "trait",
            TokenKind::Defer => "defer",
            TokenKind::Struct => "struct",
            TokenKind::Enum => "enum",
            TokenKind::In => "in",
            TokenKind::As => "as",
            TokenKind::Typeof => "typeof",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Continue => "continue",
            TokenKind::Break => "break",
            TokenKind::Match => "match",
            TokenKind::Return => "return",
            TokenKind::Let => "let",
            TokenKind::Try => "try",
            TokenKind::Nil => "nil",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Pub => "pub",
            TokenKind::Static => "static",
            TokenKind::Const => "const",

            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Bang => "!",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",

            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Question => "?",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
        };
        Some(text)
    }

    /// Name used in diagnostics: the spelling for fixed tokens, the
    /// category name for everything else. All integer radices read as
    /// `integer`.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Ident => "identifier",
            TokenKind::String => "string",
            TokenKind::Char => "character",
            TokenKind::Float => "float",
            TokenKind::Int | TokenKind::BinInt | TokenKind::HexInt => "integer",
            other => other.text().unwrap_or("<unknown>"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The per-file token sequence handed from the lexer to the parser.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds in order, handy for assertions and dumps.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}
