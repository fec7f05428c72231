//! Terminal output for results.
//!
//! Logs go to stderr through tracing; this is what the user is meant to read
//! on stdout.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;

/// Writes styled lines to stdout, honouring `--quiet` and `--no-color`.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || !Term::stdout().features().colors_supported(),
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
        };
        OutputManager::new(&args)
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
        assert!(out.success("done").is_ok());
    }

    #[test]
    fn no_color_flag_disables_styling() {
        assert!(make_manager(false, true).no_color);
    }
}
