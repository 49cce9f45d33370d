//! The compile pipeline: every input through every front-end stage.

use std::io::Write;
use std::path::{Path, PathBuf};

use clover_diagnostic::{DiagnosticEmitter, TerminalEmitter};

use crate::{color, dump, BuildOptions, CompileError, CompileUnit};

/// A stage a unit just finished successfully.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexed,
    Parsed,
}

/// Every unit of a successful run, in input order.
#[derive(Debug, Default)]
pub struct CompileSummary {
    pub units: Vec<CompileUnit>,
}

impl CompileSummary {
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Compile `paths` in order, stopping at the first unit that fails.
pub fn try_compile<P: AsRef<Path>>(
    paths: &[P],
    emitter: &mut dyn DiagnosticEmitter,
) -> Result<CompileSummary, CompileError> {
    try_compile_with(paths, emitter, |_, _| {})
}

/// [`try_compile`], calling `on_phase` after each stage a unit passes.
pub fn try_compile_with<P, F>(
    paths: &[P],
    emitter: &mut dyn DiagnosticEmitter,
    mut on_phase: F,
) -> Result<CompileSummary, CompileError>
where
    P: AsRef<Path>,
    F: FnMut(Phase, &CompileUnit),
{
    if paths.is_empty() {
        return Err(CompileError::NoInputFiles);
    }

    let mut summary = CompileSummary::default();
    for path in paths {
        let path = path.as_ref();
        let _span = tracing::info_span!("unit", file = %path.display()).entered();

        let mut unit = CompileUnit::load(path)?;
        if !unit.lex(emitter) {
            return Err(CompileError::Lex {
                file: unit.name().to_owned(),
            });
        }
        on_phase(Phase::Lexed, &unit);

        if !unit.parse(emitter) {
            return Err(CompileError::Parse {
                file: unit.name().to_owned(),
            });
        }
        on_phase(Phase::Parsed, &unit);

        summary.units.push(unit);
    }
    tracing::debug!(units = summary.len(), "front end finished");
    Ok(summary)
}

/// Run the front end as the `clover` binary does: diagnostics to
/// `emitter`, requested dumps to `out`. Returns whether every unit passed.
///
/// Failures without a source location (no inputs, unreadable file) are
/// printed to stderr; a summary line follows any failure.
pub fn run(
    options: &BuildOptions,
    emitter: &mut dyn DiagnosticEmitter,
    out: &mut dyn Write,
) -> bool {
    tracing::debug!(
        inputs = options.inputs.len(),
        output = %options.output.display(),
        debug_symbols = options.debug_symbols,
        "compile"
    );

    let result = try_compile_with(&options.inputs, emitter, |phase, unit| {
        let text = match phase {
            Phase::Lexed if options.dump_tokens => dump::tokens(unit.name(), unit.tokens()),
            Phase::Parsed if options.dump_ast => match unit.root() {
                Some(root) => dump::ast(unit.name(), root),
                None => return,
            },
            _ => return,
        };
        // A closed stdout is not worth failing the compile over.
        let _ = out.write_all(text.as_bytes());
    });

    let ok = match result {
        Ok(_) => true,
        Err(err) => {
            if !err.is_reported() {
                eprintln!("error: {err}");
            }
            tracing::debug!(error = %err, "compile failed");
            false
        }
    };

    let (errors, warnings) = (emitter.error_count(), emitter.warning_count());
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    let _ = out.flush();
    ok
}

/// Compile `paths` with default options, reporting to stderr.
pub fn compile<P: Into<PathBuf> + Clone>(paths: &[P]) -> bool {
    let options = BuildOptions::for_inputs(paths.iter().cloned());
    let mut emitter = TerminalEmitter::new(std::io::stderr(), color::use_colors(options.color));
    run(&options, &mut emitter, &mut std::io::stdout())
}
