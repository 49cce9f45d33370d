//! Type specs and modifier sets.

use clover_ir::ast::{Modifier, ModifierSet, TypeSpec};
use clover_ir::{Span, TokenKind};
use clover_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser};

fn modifier_of(kind: TokenKind) -> Option<Modifier> {
    match kind {
        TokenKind::Static => Some(Modifier::Static),
        TokenKind::Const => Some(Modifier::Const),
        TokenKind::Pub => Some(Modifier::Pub),
        _ => None,
    }
}

impl Parser<'_> {
    /// `Name`, `Name<A, B>`, optionally followed by `;` for nullable.
    pub(crate) fn type_spec(&mut self) -> ParseResult<TypeSpec> {
        ensure_sufficient_stack(|| self.type_spec_inner())
    }

    fn type_spec_inner(&mut self) -> ParseResult<TypeSpec> {
        let (name, name_span) = self.capture(TokenKind::Ident)?;
        let mut tparams = Vec::new();
        if self.eat(TokenKind::Lt) {
            loop {
                tparams.push(self.type_spec()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect_type_close()?;
        }
        let nullable = self.eat(TokenKind::Semicolon);
        Ok(TypeSpec {
            name,
            tparams,
            nullable,
            span: self.span_from(name_span.start),
        })
    }

    /// Zero or more of `static`, `const`, `pub`, in any order. A repeat is
    /// warned about and otherwise ignored.
    pub(crate) fn modifiers(&mut self) -> ModifierSet {
        let start = self.cursor.current_start();
        let mut set = ModifierSet::default();
        let mut seen_any = false;
        while let Some(modifier) = self.current().and_then(|token| modifier_of(token.kind)) {
            self.advance();
            seen_any = true;
            if !set.insert(modifier) {
                self.warn_previous(format!("duplicated `{}`", modifier.keyword()));
            }
        }
        set.span = if seen_any {
            self.span_from(start)
        } else {
            Span::with_len(start, 0)
        };
        set
    }
}
