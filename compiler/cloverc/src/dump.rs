//! `--dump-tokens` and `--dump-ast` output.

use std::fmt::Write;

use clover_ir::ast::{pretty, Root};
use clover_ir::TokenList;

/// Token listing, one token per line.
pub fn tokens(name: &str, tokens: &TokenList) -> String {
    let mut out = format!("Tokens for '{name}' ({} tokens):\n", tokens.len());
    for token in tokens {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  {token:?}");
    }
    out
}

/// Indented syntax tree.
pub fn ast(name: &str, root: &Root) -> String {
    format!("Syntax tree for '{name}':\n{}", pretty::dump(root))
}
