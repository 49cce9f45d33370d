//! Imports, function declarations and their parts.

use clover_ir::ast::{Block, FnDecl, ImportStmt, ParamSpec};
use clover_ir::TokenKind;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `import name;`
    pub(crate) fn import_stmt(&mut self) -> ParseResult<Option<ImportStmt>> {
        if !self.check(TokenKind::Import) {
            return Ok(None);
        }
        let start = self.advance().start;
        let (name, _) = self.capture(TokenKind::Ident)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Some(ImportStmt {
            name,
            span: self.span_from(start),
        }))
    }

    /// `fn name(params) [: type] { }`
    pub(crate) fn fn_decl(&mut self) -> ParseResult<Option<FnDecl>> {
        if !self.check(TokenKind::Fn) {
            return Ok(None);
        }
        let start = self.advance().start;
        let (name, _) = self.capture(TokenKind::Ident)?;
        let _span = tracing::debug_span!("fn_decl", name = %name).entered();

        let params = self.params()?;
        let rtype = if self.eat(TokenKind::Colon) {
            Some(self.type_spec()?)
        } else {
            None
        };
        let body = self.block()?;
        Ok(Some(FnDecl {
            name,
            params,
            rtype,
            body,
            span: self.span_from(start),
        }))
    }

    fn params(&mut self) -> ParseResult<Vec<ParamSpec>> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.param()?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(params)
    }

    /// `name: modifiers Type`
    fn param(&mut self) -> ParseResult<ParamSpec> {
        let (name, name_span) = self.capture(TokenKind::Ident)?;
        self.expect(TokenKind::Colon)?;
        let modifiers = self.modifiers();
        let ty = self.type_spec()?;
        Ok(ParamSpec {
            name,
            modifiers,
            ty,
            span: self.span_from(name_span.start),
        })
    }

    fn block(&mut self) -> ParseResult<Block> {
        let start = self.expect(TokenKind::LBrace)?.start;
        self.expect(TokenKind::RBrace)?;
        Ok(Block {
            span: self.span_from(start),
        })
    }
}
