//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `marble-core` and
//! `marble-adapters` only emit spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)   | Filter level |
//! |-----------|--------------|
//! | (none)    | WARN         |
//! | `-v`      | INFO         |
//! | `-vv`     | DEBUG        |
//! | `-vvv`    | TRACE        |
//! | `--quiet` | ERROR        |
//!
//! The `--debug` Marble flag raises the level to at least DEBUG.
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Name of the Marble flag that turns on debug logging.
pub const DEBUG_FLAG: &str = "--debug";

/// Initialise the global tracing subscriber.
///
/// Must be called once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs, debug_flag: bool) -> anyhow::Result<()> {
    let level = derive_level(args, debug_flag);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "marble={level},marble_core={level},marble_adapters={level}"
        ))
    });

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `true` if `--debug` appears among the Marble tokens.
///
/// Checked before the core parser runs so that parsing itself is logged.
pub fn wants_debug<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|t| t.as_ref() == DEBUG_FLAG)
}

/// Translate the verbosity counter, quiet flag and `--debug` to a level.
fn derive_level(args: &GlobalArgs, debug_flag: bool) -> &'static str {
    if args.quiet {
        return "error";
    }
    match (args.verbose, debug_flag) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    }
}
