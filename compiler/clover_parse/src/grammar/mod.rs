//! Grammar productions.
//!
//! ```text
//! Root        := (ImportStmt | FnDecl)*
//! ImportStmt  := "import" Identifier ";"
//! FnDecl      := "fn" Identifier Params (":" TypeSpec)? Block
//! Params      := "(" (Param ("," Param)*)? ")"
//! Param       := Identifier ":" ModifierSet TypeSpec
//! ModifierSet := ("static" | "const" | "pub")*
//! TypeSpec    := Identifier ("<" TypeSpec ("," TypeSpec)* ">")? ";"?
//! Block       := "{" "}"
//! ```

mod item;
mod ty;

use clover_ir::ast::{FnDecl, ImportStmt, Root};

use crate::{ParseErrorKind, ParseResult, Parser};

/// A production: `Ok(None)` when the current token does not start it.
pub(crate) type Production<'a, T> = fn(&mut Parser<'a>) -> ParseResult<Option<T>>;

/// Anything that may appear at the top level.
enum Item {
    Import(ImportStmt),
    Function(FnDecl),
}

impl<'a> Parser<'a> {
    pub(crate) fn root(&mut self) -> ParseResult<Root> {
        let start = self.cursor.current_start();
        let productions: [Production<'a, Item>; 2] = [
            |p| Ok(p.import_stmt()?.map(Item::Import)),
            |p| Ok(p.fn_decl()?.map(Item::Function)),
        ];

        let mut root = Root::default();
        while !self.cursor.is_at_end() {
            match self.parse_any(&productions)? {
                Item::Import(import) => root.imports.push(import),
                Item::Function(function) => root.functions.push(function),
            }
        }
        root.span = self.span_from(start);
        Ok(root)
    }

    /// Try each production in order; the first that applies wins. Fails
    /// with "unexpected token" when none does.
    pub(crate) fn parse_any<T>(&mut self, productions: &[Production<'a, T>]) -> ParseResult<T> {
        for production in productions {
            if let Some(node) = production(self)? {
                return Ok(node);
            }
        }
        Err(self.cursor.error(ParseErrorKind::UnexpectedToken {
            found: self.cursor.current_kind(),
        }))
    }
}
