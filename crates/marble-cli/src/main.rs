//! # Marble CLI
//!
//! Scaffolds framework projects into a configured projects directory.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber.
//! 3. Build the [`OutputManager`].
//! 4. Run the scaffold command.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                        |
//! |------|--------------------------------|
//! |  0   | Success, `--ping`, help, usage |
//! |  1   | Any failure                    |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
    logging::{init_logging, wants_debug},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && console::Term::stderr().features().colors_supported();

    if let Err(e) = init_logging(&cli.global, wants_debug(&cli.args)) {
        return handle_error(
            CliError::Logging {
                message: format!("{e:#}"),
            },
            verbose,
            color,
        );
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let output = OutputManager::new(&cli.global);

    match run(&cli, &output) {
        Ok(()) => {
            info!("Marble completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

#[instrument(skip_all)]
fn run(cli: &Cli, output: &OutputManager) -> CliResult<()> {
    commands::scaffold::execute(&cli.args, &cli.global, output)
}

/// Log the error, print it with suggestions and pick the exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        assert!(Cli::command().get_author().is_some());
    }
}
