//! Clover IR - shared front-end data types
//!
//! This crate contains the data structures exchanged between the Clover
//! front-end phases:
//! - [`Span`] for byte ranges in a source file
//! - [`Token`], [`TokenKind`] and [`TokenList`] for lexer output
//! - The syntax tree ([`ast`]) built by the parser
//!
//! Nothing here knows how to read files, scan text or report diagnostics;
//! those live in `clover_lexer_core`, `clover_lexer` and `clover_diagnostic`.

pub mod ast;
mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenCategory, TokenKind, TokenList};
