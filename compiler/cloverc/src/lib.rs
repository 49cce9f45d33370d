//! Clover compiler front end.
//!
//! Drives each input file through the front end, strictly in order:
//!
//! ```text
//! path ──► SourceBuffer ──► lex() ──► TokenList ──► parse() ──► Root
//! ```
//!
//! The first unit that fails to load, lex or parse stops the run; later
//! units are never started. Diagnostics are emitted as they are found, so
//! by the time a stage reports failure its explanation has already been
//! printed.

pub mod color;
pub mod dump;
mod error;
pub mod options;
mod pipeline;
pub mod tracing_setup;
mod unit;

pub use error::CompileError;
pub use options::{parse_args, BuildOptions, Command, OptionsError};
pub use pipeline::{compile, run, try_compile, try_compile_with, CompileSummary, Phase};
pub use unit::CompileUnit;
