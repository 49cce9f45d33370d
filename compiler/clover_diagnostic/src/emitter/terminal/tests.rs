#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::Location;
use clover_lexer_core::SourceBuffer;
use pretty_assertions::assert_eq;

fn emit_one(colors: bool) -> String {
    let src = SourceBuffer::new("main.cl", "fn bar(x Int) { }");
    let mut emitter = TerminalEmitter::new(Vec::new(), colors);
    emitter.emit(&Diagnostic::error(
        "expected `:`, got `identifier`",
        Location::new(&src, 9, 3, 0, 1, 10),
    ));
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = emit_one(false);
    assert!(text.starts_with("main.cl:1:10-13: error: expected `:`"));
    assert!(text.contains("    1 | fn bar(x Int) { }\n"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = emit_one(true);
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn test_with_color_mode() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
    assert!(!emitter.uses_colors());
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Auto, true);
    assert!(emitter.uses_colors());
}

#[test]
fn test_counts_errors_and_warnings() {
    let src = SourceBuffer::new("t.cl", "x");
    let loc = Location::new(&src, 0, 1, 0, 1, 1);
    let mut emitter = TerminalEmitter::new(Vec::new(), false);
    emitter.emit(&Diagnostic::warning("w", loc.clone()));
    emitter.emit(&Diagnostic::note("n", loc.clone()));
    emitter.emit(&Diagnostic::error("e", loc));
    assert_eq!(emitter.error_count(), 1);
    assert_eq!(emitter.warning_count(), 1);
}

#[test]
fn test_summary_single_error() {
    let mut emitter = TerminalEmitter::new(Vec::new(), false);
    emitter.emit_summary(1, 0);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text, "error: aborting due to previous error\n");
}

#[test]
fn test_summary_errors_and_warnings() {
    let mut emitter = TerminalEmitter::new(Vec::new(), false);
    emitter.emit_summary(3, 2);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: aborting due to 3 previous errors; 2 warnings emitted\n"
    );
}

#[test]
fn test_summary_warnings_only() {
    let mut emitter = TerminalEmitter::new(Vec::new(), false);
    emitter.emit_summary(0, 1);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text, "warning: 1 warning emitted\n");
}

#[test]
fn test_summary_nothing_to_report() {
    let mut emitter = TerminalEmitter::new(Vec::new(), false);
    emitter.emit_summary(0, 0);
    assert!(emitter.into_inner().is_empty());
}
