//! Exact rendering of front-end diagnostics.

use clover_diagnostic::render::render_to_string;
use clover_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, Location, TerminalEmitter};
use pretty_assertions::assert_eq;

use crate::common::{rendered, source};

#[test]
fn parse_error_snippet() {
    assert_eq!(
        rendered("fn bar(x Int) { }"),
        "\
test.cl:1:10-13: error: expected `:`, got `identifier`
    1 | fn bar(x Int) { }
      |          ^~~
"
    );
}

#[test]
fn lex_error_on_later_line() {
    assert_eq!(
        rendered("import a;\n  x = 'ab';"),
        "\
test.cl:2:7-11: error: multiple characters in character literal
    2 |   x = 'ab';
      |       ^~~~
"
    );
}

#[test]
fn too_long_identifier_warning_with_note() {
    let name = "n".repeat(64);
    let text = format!("import {name};");
    assert_eq!(
        rendered(&text),
        format!(
            "test.cl:1:8-72: warning: identifier is too long: 64\n    1 | {text}\n      |        ^{}\ntest.cl:1:8-72: note: maximum identifier length is 63\n",
            "~".repeat(63)
        )
    );
}

#[test]
fn tabs_are_kept_in_padding() {
    assert_eq!(
        rendered("\tfn f(x Int) { }"),
        "\
test.cl:1:9-12: error: expected `:`, got `identifier`
    1 | \tfn f(x Int) { }
      | \t       ^~~
"
    );
}

#[test]
fn end_of_file_error() {
    assert_eq!(
        rendered("fn f()\n"),
        "\
test.cl:1:7: error: expected `{`, got end of file
    1 | fn f()
      |       ^
"
    );
}

#[test]
fn gutter_grows_past_four_digits() {
    let mut text = "\n".repeat(12_344);
    text.push_str("fn f(x Int) { }");
    let out = rendered(&text);
    assert_eq!(
        out,
        "\
test.cl:12345:8-11: error: expected `:`, got `identifier`
 12345 | fn f(x Int) { }
       |        ^~~
"
    );
}

#[test]
fn scope_label() {
    let src = source("fn f() { }");
    let location = Location::new(&src, 3, 1, 0, 1, 4).with_scope("f");
    let diag = Diagnostic::error("something odd", location);
    assert_eq!(
        render_to_string(&diag, false),
        "test.cl:1:4: f: error: something odd\n    1 | fn f() { }\n      |    ^\n"
    );
}

#[test]
fn colored_output_matches_plain_modulo_escapes() {
    let src = source("fn f(x Int) { }");
    let diag = Diagnostic::error(
        "expected `:`, got `identifier`",
        Location::new(&src, 7, 3, 0, 1, 8),
    );

    let mut colored = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    colored.emit(&diag);
    let colored = String::from_utf8(colored.into_inner()).unwrap();
    assert!(colored.contains("\x1b[1;31merror\x1b[0m"));

    let stripped = strip_ansi(&colored);
    assert_eq!(stripped, render_to_string(&diag, false));
}

#[test]
fn info_and_note_have_no_snippet() {
    let src = source("fn f() { }");
    let info = Diagnostic::info("checked 1 file", Location::new(&src, 0, 2, 0, 1, 1));
    assert_eq!(render_to_string(&info, false), "test.cl:1:1-3: info: checked 1 file\n");
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn lone_carriage_return_starts_a_line() {
    assert_eq!(
        rendered("a\rb $"),
        "\
test.cl:2:3: error: unexpected token
    2 | b $
      |   ^
"
    );
}

#[test]
fn multibyte_characters_get_one_mark_each() {
    assert_eq!(
        rendered("x = 'éé';"),
        "\
test.cl:1:5-11: error: multiple characters in character literal
    1 | x = 'éé';
      |     ^~~~
"
    );
}
