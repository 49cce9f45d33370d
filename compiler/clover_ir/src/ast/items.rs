//! Top-level items and their parts.

use super::{ModifierSet, TypeSpec};
use crate::Span;

/// A whole compile unit.
///
/// Both sequences keep source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Root {
    pub imports: Vec<ImportStmt>,
    pub functions: Vec<FnDecl>,
    pub span: Span,
}

impl Root {
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.functions.is_empty()
    }
}

/// `import name;`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImportStmt {
    pub name: String,
    pub span: Span,
}

/// `fn name(params) [: rtype] { }`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FnDecl {
    pub name: String,
    pub params: Vec<ParamSpec>,
    pub rtype: Option<TypeSpec>,
    pub body: Block,
    pub span: Span,
}

/// `name: modifiers Type`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamSpec {
    pub name: String,
    pub modifiers: ModifierSet,
    pub ty: TypeSpec,
    pub span: Span,
}

/// Function body. Statements are not parsed yet, so a block is just its
/// braces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub span: Span,
}

/// Variable declaration. No production builds one yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VarDecl {
    pub name: String,
    pub modifiers: ModifierSet,
    pub ty: TypeSpec,
    pub span: Span,
}

/// Constant declaration. No production builds one yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstDecl {
    pub name: String,
    pub modifiers: ModifierSet,
    pub ty: TypeSpec,
    pub span: Span,
}
