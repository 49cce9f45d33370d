//! Text rendering of a single diagnostic.
//!
//! Layout for warnings and errors:
//!
//! ```text
//! <file>:<line>:<col>[-<end>]: [<scope>: ]<severity>: <message>
//!  <line, right-aligned to the gutter> | <source line>
//!  <gutter of spaces>                  | <padding>^~~~
//! ```
//!
//! Header columns count bytes. The snippet marks one `^`/`~` per character,
//! so a multi-byte character gets a single mark.
//!
//! Info and note diagnostics print the header line only. Attached notes
//! follow as extra `note` headers at the same location.
//!
//! With colors on, the location is bold and the severity label and caret
//! run take the severity color. Stripping the escape codes yields exactly
//! the uncolored output.

use std::io::{self, Write};

use crate::{Diagnostic, Location, Severity};

/// Minimum width of the line-number gutter.
pub const MIN_GUTTER_WIDTH: usize = 4;

/// ANSI color codes for terminal output.
pub(crate) mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const INFO: &str = "\x1b[1;37m"; // Bold white
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

pub(crate) fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => colors::INFO,
        Severity::Note => colors::NOTE,
        Severity::Warning => colors::WARNING,
        Severity::Error => colors::ERROR,
    }
}

/// Width of the line-number gutter: `max(4, digits(line))`.
pub fn gutter_width(line: u32) -> usize {
    let digits = line.checked_ilog10().map_or(1, |d| d as usize + 1);
    digits.max(MIN_GUTTER_WIDTH)
}

/// Render `diagnostic` into `out`.
pub fn render<W: Write + ?Sized>(
    out: &mut W,
    diagnostic: &Diagnostic<'_>,
    colors: bool,
) -> io::Result<()> {
    let location = &diagnostic.location;
    write_header(
        out,
        location,
        diagnostic.severity,
        &diagnostic.message,
        colors,
    )?;
    if diagnostic.severity.is_blocking() {
        write_snippet(out, location, diagnostic.severity, colors)?;
    }
    for note in &diagnostic.notes {
        write_header(out, location, Severity::Note, note, colors)?;
    }
    Ok(())
}

/// Render `diagnostic` to a `String`.
pub fn render_to_string(diagnostic: &Diagnostic<'_>, colors: bool) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(&mut out, diagnostic, colors);
    String::from_utf8_lossy(&out).into_owned()
}

fn write_colored<W: Write + ?Sized>(
    out: &mut W,
    text: &str,
    color: &str,
    colors: bool,
) -> io::Result<()> {
    if colors {
        write!(out, "{color}{text}{}", colors::RESET)
    } else {
        write!(out, "{text}")
    }
}

fn write_header<W: Write + ?Sized>(
    out: &mut W,
    location: &Location<'_>,
    severity: Severity,
    message: &str,
    colors: bool,
) -> io::Result<()> {
    write_colored(out, &location.to_string(), colors::BOLD, colors)?;
    write!(out, ": ")?;
    if let Some(scope) = &location.scope {
        write!(out, "{scope}: ")?;
    }
    write_colored(out, severity.label(), severity_color(severity), colors)?;
    writeln!(out, ": {message}")
}

fn write_snippet<W: Write + ?Sized>(
    out: &mut W,
    location: &Location<'_>,
    severity: Severity,
    colors: bool,
) -> io::Result<()> {
    let width = gutter_width(location.line);
    let line_text = location.line_text();
    writeln!(out, " {:>width$} | {line_text}", location.line)?;

    let start = location.offset.saturating_sub(location.line_start);
    let padding = caret_padding(line_text, start);
    let marker = caret_run(marked_chars(line_text, start, location.length));
    write!(out, " {:width$} | {padding}", "")?;
    write_colored(out, &marker, severity_color(severity), colors)?;
    writeln!(out)
}

/// Blank prefix that lines the caret up under byte `prefix_len` of the line.
///
/// One output character per source character; tabs stay tabs so the caret
/// lands under the same column in a terminal.
fn caret_padding(line_text: &str, prefix_len: u32) -> String {
    let prefix = line_text
        .char_indices()
        .take_while(|&(i, _)| i < prefix_len as usize)
        .map(|(_, c)| if c == '\t' { '\t' } else { ' ' });
    let mut padding: String = prefix.collect();
    // A location past the end of the line (end of file) still gets its
    // column.
    let covered = u32::try_from(line_text.len()).unwrap_or(u32::MAX);
    for _ in covered..prefix_len {
        padding.push(' ');
    }
    padding
}

/// Characters in the `length` bytes at byte `start` of the line. Bytes
/// past the end of the line count one each.
fn marked_chars(line_text: &str, start: u32, length: u32) -> u32 {
    let start = start as usize;
    let end = start.saturating_add(length as usize);
    let within_end = end.min(line_text.len());
    let within_bytes = within_end.saturating_sub(start);
    let within = line_text
        .get(start..within_end)
        .map_or(within_bytes, |text| text.chars().count());
    let past = end.saturating_sub(line_text.len().max(start));
    u32::try_from(within + past).unwrap_or(u32::MAX)
}

/// `^` followed by `length - 1` tildes.
fn caret_run(length: u32) -> String {
    let mut run = String::from("^");
    for _ in 1..length {
        run.push('~');
    }
    run
}
