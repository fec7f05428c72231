//! Global arguments that apply to every invocation.
//!
//! Declared here and flattened into [`super::Cli`]. They must come before the
//! framework positional; everything after it belongs to Marble's own flag
//! grammar.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all invocations.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). Any value other than an empty string,
    /// `0`, `false`, `no` or `off` counts as set.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        env = "MARBLE_CONFIG",
        value_name = "FILE",
        help = "Configuration file path [default: ~/.config/marble.config.json]"
    )]
    pub config: Option<PathBuf>,
}
