//! Command-line options.
//!
//! ```text
//! clover [options] [--] <file>...
//! ```
//!
//! Output name and debug symbols are carried for later compiler stages;
//! the front end itself only reads the inputs, the dump flags and the
//! color mode.

use std::path::PathBuf;

use clover_diagnostic::ColorMode;

/// Output name used when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "a.clx";

pub const USAGE: &str = "\
Usage: clover [options] [--] <file>...

Options:
  -o <file>              Output file (default: a.clx)
  -d                     Emit debug symbols
  --color=<when>         Colorize diagnostics: auto, always, never
  --dump-tokens          Print each file's tokens after lexing
  --dump-ast             Print each file's syntax tree after parsing
  -h, --help             Print this help
  -v, --version          Print the compiler version
";

/// Options for one compile run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct BuildOptions {
    /// Source files, compiled in this order.
    pub inputs: Vec<PathBuf>,
    /// Output file (`-o`).
    pub output: PathBuf,
    /// Emit debug symbols (`-d`).
    pub debug_symbols: bool,
    /// Print tokens after lexing (`--dump-tokens`).
    pub dump_tokens: bool,
    /// Print the tree after parsing (`--dump-ast`).
    pub dump_ast: bool,
    /// Diagnostic coloring (`--color`).
    pub color: ColorMode,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            inputs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            debug_symbols: false,
            dump_tokens: false,
            dump_ast: false,
            color: ColorMode::Auto,
        }
    }
}

impl BuildOptions {
    /// Options for compiling `inputs` with everything else defaulted.
    pub fn for_inputs<I, P>(inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        BuildOptions {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..BuildOptions::default()
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Build(BuildOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` requires an argument")]
    MissingArgument(String),
    #[error("invalid color mode `{0}` (expected auto, always or never)")]
    InvalidColor(String),
}

/// Parse a `--color` value.
pub fn parse_color_mode(value: &str) -> Option<ColorMode> {
    match value {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

/// Parse command-line arguments, excluding the program name.
///
/// `-h` and `-v` win as soon as they are seen. Zero input files is not an
/// error here; the pipeline reports it.
pub fn parse_args<I, S>(args: I) -> Result<Command, OptionsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = BuildOptions::default();
    let mut args = args.into_iter().map(Into::into);
    let mut only_files = false;

    while let Some(arg) = args.next() {
        if only_files || arg == "-" || !arg.starts_with('-') {
            options.inputs.push(PathBuf::from(arg));
            continue;
        }
        match arg.as_str() {
            "--" => only_files = true,
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-d" => options.debug_symbols = true,
            "--dump-tokens" => options.dump_tokens = true,
            "--dump-ast" => options.dump_ast = true,
            "-o" => {
                let Some(output) = args.next() else {
                    return Err(OptionsError::MissingArgument(arg));
                };
                options.output = PathBuf::from(output);
            }
            _ => {
                if let Some(output) = arg.strip_prefix("--output=") {
                    options.output = PathBuf::from(output);
                } else if let Some(value) = arg.strip_prefix("--color=") {
                    options.color = parse_color_mode(value)
                        .ok_or_else(|| OptionsError::InvalidColor(value.to_owned()))?;
                } else {
                    return Err(OptionsError::UnknownOption(arg));
                }
            }
        }
    }

    Ok(Command::Build(options))
}
