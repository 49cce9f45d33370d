//! Tracing subscriber setup for the `clover` binary.
//!
//! Library crates only emit events. The binary installs a subscriber when
//! `CLOVER_LOG` (falling back to `RUST_LOG`) holds a filter such as
//! `clover_parse=trace`. With `CLOVER_LOG_TREE=1` spans print as an
//! indented tree instead of flat lines.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

pub const LOG_ENV: &str = "CLOVER_LOG";
pub const LOG_TREE_ENV: &str = "CLOVER_LOG_TREE";

/// The filter directives to use, if logging was requested.
pub fn log_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|directives| !directives.trim().is_empty())
}

/// Initialize tracing once. Safe to call more than once; does nothing if
/// no filter is set or another subscriber is already installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = log_directives() else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let tree = std::env::var(LOG_TREE_ENV).is_ok_and(|value| value == "1");

        let installed = if tree {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init()
        };
        if installed.is_err() {
            eprintln!("warning: a tracing subscriber is already installed; {LOG_ENV} ignored");
        }
    });
}
