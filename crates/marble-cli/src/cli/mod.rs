//! CLI argument definitions using the clap derive API.
//!
//! clap only owns the global options and `--help` / `--version`. The
//! framework, project name and Marble flags are captured verbatim and handed
//! to the core parser, which knows their arity rules.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "marble",
    bin_name = "marble",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Framework project scaffolder",
    long_about = "Marble creates a new project directory for a framework \
                  under the projects directory named in \
                  ~/.config/marble.config.json.",
    after_help = "FRAMEWORKS:\n\
        \x20 express, react, vue\n\
        \n\
        FLAGS (after the project name):\n\
        \x20 --ping                      Exit before the project directory is created\n\
        \x20 --debug                     Enable debug logging\n\
        \x20 --install-packages <PKG>... Packages to add to the new project\n\
        \x20 --use-nodemon               (express) Run the dev server under nodemon\n\
        \x20 --use-express-session       (express) Add express-session middleware\n\
        \n\
        EXAMPLES:\n\
        \x20 marble express my-api\n\
        \x20 marble express my-api --use-nodemon --install-packages cors helmet\n\
        \x20 marble -v express my-api --ping",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Framework, project name, then Marble flags.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "<framework> <project name> [--flag [value...]]..."
    )]
    pub args: Vec<String>,
}
