//! Multi-file runs, through the library and through the `clover` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use clover_diagnostic::DiagnosticQueue;
use cloverc::{try_compile, CompileError};
use pretty_assertions::assert_eq;

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn clover(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clover"))
        .args(args)
        .current_dir(dir)
        .env_remove("CLOVER_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn all_units_pass() {
    let dir = tempfile::tempdir().unwrap();
    let paths = [
        write(dir.path(), "a.cl", "import b;\nfn main(): Int { }\n"),
        write(dir.path(), "b.cl", "fn helper(x: const Int, y: List<Int>;) { }\n"),
    ];
    let mut queue = DiagnosticQueue::new();
    let summary = try_compile(&paths, &mut queue).unwrap();
    assert_eq!(summary.len(), 2);
    assert!(queue.is_empty());
}

#[test]
fn later_units_are_not_started_after_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let paths = [
        write(dir.path(), "a.cl", "fn a( { }\n"),
        write(dir.path(), "b.cl", "fn b(x Int) { }\n"),
    ];
    let mut queue = DiagnosticQueue::new();
    let err = try_compile(&paths, &mut queue).unwrap_err();
    assert!(matches!(err, CompileError::Parse { .. }));

    let files: Vec<_> = queue.iter().map(|d| d.file.clone()).collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("a.cl"));
}

#[test]
fn binary_succeeds_silently() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ok.cl", "fn main() { }\n");
    let out = clover(&["--color=never", "ok.cl"], dir.path());
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    assert!(out.stdout.is_empty());
}

#[test]
fn binary_reports_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bad.cl", "fn bar(x Int) { }\n");
    let out = clover(&["--color=never", "bad.cl"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stderr).unwrap(),
        "\
bad.cl:1:10-13: error: expected `:`, got `identifier`
    1 | fn bar(x Int) { }
      |          ^~~
error: aborting due to previous error
"
    );
}

#[test]
fn binary_without_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let out = clover(&["--color=never"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stderr).unwrap(),
        "error: no input files provided\n"
    );
}

#[test]
fn binary_dumps_tokens() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "t.cl", "import io;");
    let out = clover(&["--dump-tokens", "t.cl"], dir.path());
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Tokens for 't.cl' (3 tokens):\n  Import \"import\" @ 0..6 (1:1)\n  Ident \"io\" @ 7..9 (1:8)\n  Semicolon \";\" @ 9..10 (1:10)\n"
    );
}

#[test]
fn binary_rejects_unknown_options() {
    let dir = tempfile::tempdir().unwrap();
    let out = clover(&["--frobnicate"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("error: unknown option `--frobnicate`\n"));
    assert!(stderr.contains("Usage: clover"));
}

#[test]
fn binary_version() {
    let dir = tempfile::tempdir().unwrap();
    let out = clover(&["--version"], dir.path());
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().starts_with("clover "));
}
