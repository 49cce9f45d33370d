//! Syntax tree for Clover source files.
//!
//! Every node is a plain owned struct; the [`Root`] of a compile unit owns
//! its entire subtree. [`SyntaxNode`] is the closed, borrowed view over all
//! node kinds used for generic traversal and dumping.
//!
//! # Module Structure
//!
//! - `items`: top-level items (`Root`, `ImportStmt`, `FnDecl`) and their parts
//! - `ty`: type specifications and modifier sets
//! - `node`: the `SyntaxNode` view and pre-order walking
//! - `pretty`: indented tree dump

mod items;
mod node;
pub mod pretty;
mod ty;

pub use items::{Block, ConstDecl, FnDecl, ImportStmt, ParamSpec, Root, VarDecl};
pub use node::{NodeKind, SyntaxNode};
pub use ty::{Modifier, ModifierSet, TypeSpec};
