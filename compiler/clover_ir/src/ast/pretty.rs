//! Indented tree dump, one node per line.
//!
//! ```text
//! root
//!   import_stmt foo
//!   fn_decl bar
//!     param_spec x
//!       mod_spec []
//!       type_spec Int
//!     type_spec Int
//!     block
//! ```

use super::{Root, SyntaxNode};
use std::fmt::Write;

/// Render `root` as an indented tree.
pub fn dump(root: &Root) -> String {
    let mut out = String::new();
    SyntaxNode::Root(root).walk(&mut |node, depth| {
        for _ in 0..depth {
            out.push_str("  ");
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", label(node));
    });
    out
}

fn label(node: SyntaxNode<'_>) -> String {
    let kind = node.kind();
    match node {
        SyntaxNode::Root(_) | SyntaxNode::Block(_) => kind.name().to_owned(),
        SyntaxNode::ImportStmt(n) => format!("{kind} {}", n.name),
        SyntaxNode::FnDecl(n) => format!("{kind} {}", n.name),
        SyntaxNode::ParamSpec(n) => format!("{kind} {}", n.name),
        SyntaxNode::VarDecl(n) => format!("{kind} {}", n.name),
        SyntaxNode::ConstDecl(n) => format!("{kind} {}", n.name),
        SyntaxNode::ModifierSet(n) => n.to_string(),
        SyntaxNode::TypeSpec(n) => {
            if n.nullable {
                format!("{kind} {}?", n.name)
            } else {
                format!("{kind} {}", n.name)
            }
        }
    }
}
