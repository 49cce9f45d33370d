//! Closed view over every syntax node kind.

use super::{Block, ConstDecl, FnDecl, ImportStmt, ModifierSet, ParamSpec, Root, TypeSpec, VarDecl};
use crate::Span;
use std::fmt;

/// Discriminant of a [`SyntaxNode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    ImportStmt,
    FnDecl,
    ParamSpec,
    ModifierSet,
    TypeSpec,
    Block,
    VarDecl,
    ConstDecl,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::ImportStmt => "import_stmt",
            NodeKind::FnDecl => "fn_decl",
            NodeKind::ParamSpec => "param_spec",
            NodeKind::ModifierSet => "mod_spec",
            NodeKind::TypeSpec => "type_spec",
            NodeKind::Block => "block",
            NodeKind::VarDecl => "var_decl",
            NodeKind::ConstDecl => "const_decl",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed reference to any node in the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    Root(&'a Root),
    ImportStmt(&'a ImportStmt),
    FnDecl(&'a FnDecl),
    ParamSpec(&'a ParamSpec),
    ModifierSet(&'a ModifierSet),
    TypeSpec(&'a TypeSpec),
    Block(&'a Block),
    VarDecl(&'a VarDecl),
    ConstDecl(&'a ConstDecl),
}

impl<'a> SyntaxNode<'a> {
    pub fn kind(self) -> NodeKind {
        match self {
            SyntaxNode::Root(_) => NodeKind::Root,
            SyntaxNode::ImportStmt(_) => NodeKind::ImportStmt,
            SyntaxNode::FnDecl(_) => NodeKind::FnDecl,
            SyntaxNode::ParamSpec(_) => NodeKind::ParamSpec,
            SyntaxNode::ModifierSet(_) => NodeKind::ModifierSet,
            SyntaxNode::TypeSpec(_) => NodeKind::TypeSpec,
            SyntaxNode::Block(_) => NodeKind::Block,
            SyntaxNode::VarDecl(_) => NodeKind::VarDecl,
            SyntaxNode::ConstDecl(_) => NodeKind::ConstDecl,
        }
    }

    pub fn span(self) -> Span {
        match self {
            SyntaxNode::Root(n) => n.span,
            SyntaxNode::ImportStmt(n) => n.span,
            SyntaxNode::FnDecl(n) => n.span,
            SyntaxNode::ParamSpec(n) => n.span,
            SyntaxNode::ModifierSet(n) => n.span,
            SyntaxNode::TypeSpec(n) => n.span,
            SyntaxNode::Block(n) => n.span,
            SyntaxNode::VarDecl(n) => n.span,
            SyntaxNode::ConstDecl(n) => n.span,
        }
    }

    /// Direct children in source order.
    pub fn children(self) -> Vec<SyntaxNode<'a>> {
        match self {
            SyntaxNode::Root(root) => root
                .imports
                .iter()
                .map(SyntaxNode::ImportStmt)
                .chain(root.functions.iter().map(SyntaxNode::FnDecl))
                .collect(),
            SyntaxNode::FnDecl(decl) => {
                let mut children: Vec<_> = decl.params.iter().map(SyntaxNode::ParamSpec).collect();
                if let Some(rtype) = &decl.rtype {
                    children.push(SyntaxNode::TypeSpec(rtype));
                }
                children.push(SyntaxNode::Block(&decl.body));
                children
            }
            SyntaxNode::ParamSpec(param) => vec![
                SyntaxNode::ModifierSet(&param.modifiers),
                SyntaxNode::TypeSpec(&param.ty),
            ],
            SyntaxNode::VarDecl(decl) => vec![
                SyntaxNode::ModifierSet(&decl.modifiers),
                SyntaxNode::TypeSpec(&decl.ty),
            ],
            SyntaxNode::ConstDecl(decl) => vec![
                SyntaxNode::ModifierSet(&decl.modifiers),
                SyntaxNode::TypeSpec(&decl.ty),
            ],
            SyntaxNode::TypeSpec(ty) => ty.tparams.iter().map(SyntaxNode::TypeSpec).collect(),
            SyntaxNode::ImportStmt(_) | SyntaxNode::ModifierSet(_) | SyntaxNode::Block(_) => {
                Vec::new()
            }
        }
    }

    /// Visit this node and all descendants pre-order, passing the depth
    /// below `self` (0 for `self`).
    pub fn walk(self, visit: &mut impl FnMut(SyntaxNode<'a>, usize)) {
        self.walk_at(0, visit);
    }

    fn walk_at(self, depth: usize, visit: &mut impl FnMut(SyntaxNode<'a>, usize)) {
        visit(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visit);
        }
    }
}

impl<'a> From<&'a Root> for SyntaxNode<'a> {
    fn from(root: &'a Root) -> Self {
        SyntaxNode::Root(root)
    }
}
