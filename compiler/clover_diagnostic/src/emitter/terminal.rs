//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::render::{self, colors};
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Decide from the environment and terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean.
    ///
    /// For `Auto`, `detected` is the caller's environment probe result
    /// (terminal type, override variables, TTY check). It is ignored for
    /// `Always` and `Never`.
    pub fn should_use_colors(self, detected: bool) -> bool {
        match self {
            ColorMode::Auto => detected,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    errors: usize,
    warnings: usize,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create an emitter with an already-resolved color capability.
    pub fn new(writer: W, colors: bool) -> Self {
        TerminalEmitter {
            writer,
            colors,
            errors: 0,
            warnings: 0,
        }
    }

    /// Create an emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `detected` - Environment probe result (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, detected: bool) -> Self {
        Self::new(writer, mode.should_use_colors(detected))
    }

    pub fn uses_colors(&self) -> bool {
        self.colors
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, detected: bool) -> Self {
        TerminalEmitter::new(io::stderr(), mode.should_use_colors(detected))
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic<'_>) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Note | Severity::Info => {}
        }
        let _ = render::render(&mut self.writer, diagnostic, self.colors);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);

            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };

            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {} warning{} emitted",
                    warning_count,
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {} warning{} emitted",
                warning_count,
                plural_s(warning_count)
            );
        }
    }

    fn error_count(&self) -> usize {
        self.errors
    }

    fn warning_count(&self) -> usize {
        self.warnings
    }
}

#[cfg(test)]
mod tests;
