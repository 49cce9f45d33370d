//! Terminal color detection.
//!
//! Run once at startup; the result is a plain `bool` handed to the
//! diagnostic emitter, so nothing downstream consults the environment.

use std::io::IsTerminal;

use clover_diagnostic::ColorMode;

/// Environment variable forcing colors on (`1`) or off (`0`).
pub const COLORS_ENV: &str = "CLOVER_COLORS";

/// The environment facts color detection looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorProbe {
    pub override_var: Option<String>,
    pub term: Option<String>,
    pub stderr_is_terminal: bool,
}

impl ColorProbe {
    /// Read the probe from the current process.
    pub fn from_env() -> Self {
        ColorProbe {
            override_var: std::env::var(COLORS_ENV).ok(),
            term: std::env::var("TERM").ok(),
            stderr_is_terminal: std::io::stderr().is_terminal(),
        }
    }

    /// Whether diagnostics should be colored when the mode is `auto`.
    ///
    /// The override wins; then a color-capable `TERM` (an `xterm` variant
    /// or anything ending in `-256color`) turns colors on and `dumb` turns
    /// them off; otherwise colors follow whether stderr is a terminal.
    pub fn supports_color(&self) -> bool {
        match self.override_var.as_deref().map(str::trim) {
            Some("1") => return true,
            Some("0") => return false,
            _ => {}
        }
        match self.term.as_deref() {
            Some("dumb") => false,
            Some(term) if term.contains("xterm") || term.ends_with("-256color") => true,
            _ => self.stderr_is_terminal,
        }
    }
}

/// Resolve `mode` against the current process environment.
pub fn use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Auto => ColorProbe::from_env().supports_color(),
        ColorMode::Always | ColorMode::Never => mode.should_use_colors(false),
    }
}
