//! Parser phase tests.

use clover_ir::ast::{pretty, NodeKind, SyntaxNode};
use clover_parse::ParseErrorKind;
use clover_ir::TokenKind;
use pretty_assertions::assert_eq;

use crate::common::{parse, root};

#[test]
fn import_and_function() {
    let root = root("import foo; fn bar(x: Int): Int { }");
    assert_eq!(root.imports.len(), 1);
    assert_eq!(root.imports[0].name, "foo");

    let bar = &root.functions[0];
    assert_eq!(bar.name, "bar");
    assert_eq!(bar.params.len(), 1);
    assert_eq!(bar.params[0].name, "x");
    assert_eq!(bar.params[0].ty.name, "Int");
    assert_eq!(bar.rtype.as_ref().unwrap().name, "Int");
}

#[test]
fn missing_colon_points_at_type() {
    let (output, queue) = parse("fn bar(x Int) { }");
    assert!(output.root.is_none());
    let err = output.error.unwrap();
    assert_eq!(
        err.kind,
        ParseErrorKind::Expected {
            expected: TokenKind::Colon,
            found: Some(TokenKind::Ident)
        }
    );
    let reported = queue.iter().next().unwrap();
    assert_eq!((reported.line, reported.column, reported.length), (1, 10, 3));
    assert!(reported.message.starts_with("expected `:`"));
}

#[test]
fn nested_generic_closes_with_shift_right() {
    let root = root("fn f(m: List<Map<K,V>>) { }");
    let ty = &root.functions[0].params[0].ty;
    assert_eq!(ty.name, "List");
    assert_eq!(ty.tparams.len(), 1);
    let map = &ty.tparams[0];
    assert_eq!(map.name, "Map");
    let names: Vec<_> = map.tparams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["K", "V"]);
}

#[test]
fn tree_dump() {
    let root = root("import a;\nfn main(args: pub List<Str>;, n: Int): Int { }");
    assert_eq!(
        pretty::dump(&root),
        "\
root
  import_stmt a
  fn_decl main
    param_spec args
      mod_spec [P]
      type_spec List?
        type_spec Str
    param_spec n
      mod_spec []
      type_spec Int
    type_spec Int
    block
"
    );
}

#[test]
fn walk_visits_every_node() {
    let root = root("fn f(a: A<B>, b: C) { } fn g() { }");
    let mut kinds = Vec::new();
    SyntaxNode::from(&root).walk(&mut |node, _| kinds.push(node.kind()));
    let fn_count = kinds.iter().filter(|k| **k == NodeKind::FnDecl).count();
    let type_count = kinds.iter().filter(|k| **k == NodeKind::TypeSpec).count();
    assert_eq!((fn_count, type_count), (2, 3));
    assert_eq!(kinds[0], NodeKind::Root);
}

#[test]
fn duplicate_modifier_is_a_warning() {
    let (output, queue) = parse("fn f(x: const static const Int) { }");
    let root = output.root.unwrap();
    let modifiers = root.functions[0].params[0].modifiers;
    assert!(modifiers.is_const && modifiers.is_static && !modifiers.is_pub);
    assert_eq!(queue.messages(), vec!["duplicated `const`"]);
    assert!(!queue.has_errors());
}

#[test]
fn first_error_aborts_the_unit() {
    let (output, queue) = parse("fn a() { }\nfn b(,) { }\nfn c( { }");
    assert!(output.root.is_none());
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.iter().next().unwrap().line, 2);
}
