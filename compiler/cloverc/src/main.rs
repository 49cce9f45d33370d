//! Clover compiler CLI.

use clover_diagnostic::TerminalEmitter;
use cloverc::options::USAGE;
use cloverc::{color, parse_args, run, tracing_setup, Command};

fn main() {
    tracing_setup::init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Build(options)) => options,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return;
        }
        Ok(Command::Version) => {
            println!("clover {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(1);
        }
    };

    let mut emitter = TerminalEmitter::new(std::io::stderr(), color::use_colors(options.color));
    let mut stdout = std::io::stdout().lock();
    if !run(&options, &mut emitter, &mut stdout) {
        std::process::exit(1);
    }
}
