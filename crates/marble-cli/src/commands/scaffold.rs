//! The one thing `marble` does: scaffold a project.
//!
//! Responsibility: wire adapters into [`MarbleApp`], run it on the raw
//! tokens, and describe the outcome. No business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use marble_adapters::LocalFilesystem;
use marble_core::{
    application::{MarbleApp, RunOutcome, ScaffoldOutcome},
    domain::{Arity, FlagRegistry, FlagSet, FlagSpec, FrameworkKind, Platform, ProjectConfig},
};

use crate::{
    cli::GlobalArgs, config::ConfigLocation, error::CliResult, output::OutputManager,
};

/// One line of user-facing output, tagged with its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Header(String),
    Plain(String),
    Info(String),
    Success(String),
    Warning(String),
}

/// Execute a scaffold run against the local machine.
#[instrument(skip_all, fields(tokens = args.len()))]
pub fn execute(args: &[String], global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let app = MarbleApp::builtin(Box::new(LocalFilesystem::new()));
    let location = ConfigLocation::resolve(global.config.as_deref())?;

    let lines = scaffold(&app, &Platform::current(), &location, args)?;
    emit(&lines, output)
}

/// Run the whole pipeline and describe what happened.
///
/// 1. Check the platform and installed dependencies
/// 2. Load the config file
/// 3. Hand the tokens to the core
pub fn scaffold(
    app: &MarbleApp,
    platform: &Platform,
    location: &ConfigLocation,
    args: &[String],
) -> CliResult<Vec<Line>> {
    debug!(platform = %platform, "Running preflight checks");
    app.preflight(platform)?;

    let config = location.load()?;

    let lines = match app.run(args, &config)? {
        RunOutcome::FlagsOnly(flags) => {
            debug!(flags = flags.len(), "No framework and project name given");
            usage(app)
        }
        RunOutcome::Scaffolded {
            framework,
            flags,
            outcome,
        } => {
            let mut lines = unrecognized(app.flag_registry(), framework, &flags);
            lines.extend(report(framework, &config, &outcome));
            lines
        }
    };
    Ok(lines)
}

fn emit(lines: &[Line], output: &OutputManager) -> CliResult<()> {
    for line in lines {
        match line {
            Line::Header(text) => output.header(text)?,
            Line::Plain(text) => output.print(text)?,
            Line::Info(text) => output.info(text)?,
            Line::Success(text) => output.success(text)?,
            Line::Warning(text) => output.warning(text)?,
        }
    }
    Ok(())
}

fn report(framework: FrameworkKind, config: &ProjectConfig, outcome: &ScaffoldOutcome) -> Vec<Line> {
    let mut lines = vec![Line::Info(format!(
        "New project directory will be generated in: {}",
        config.properties.projects_directory
    ))];
    match outcome {
        ScaffoldOutcome::Pinged => {
            info!(framework = %framework, "Ping requested");
            lines.push(Line::Info(
                "Debug mode exits before project directory creation".into(),
            ));
        }
        ScaffoldOutcome::Created { path, files } => {
            lines.push(Line::Success(format!(
                "Created {framework} project at {}",
                path.display()
            )));
            lines.extend(
                files
                    .iter()
                    .map(|file| Line::Plain(format!("  {}", relative_to(file, path).display()))),
            );
        }
    }
    lines
}

fn relative_to<'a>(file: &'a Path, base: &Path) -> &'a Path {
    file.strip_prefix(base).unwrap_or(file)
}

/// Unknown flags are kept by the parser; tell the user they had no effect.
fn unrecognized(registry: &FlagRegistry, framework: FrameworkKind, flags: &FlagSet) -> Vec<Line> {
    flags
        .iter()
        .filter(|(name, _)| registry.lookup(name, Some(framework)).is_none())
        .map(|(name, _)| {
            Line::Warning(format!("Ignoring unrecognized flag for {framework}: {name}"))
        })
        .collect()
}

fn usage(app: &MarbleApp) -> Vec<Line> {
    let mut lines = vec![
        Line::Header("Usage: marble <framework> <project name> [--flag [value...]]...".into()),
        Line::Plain(String::new()),
        Line::Plain(format!(
            "Frameworks: {}",
            app.framework_registry().names().join(", ")
        )),
        Line::Plain(String::new()),
        Line::Plain("Flags:".into()),
    ];
    lines.extend(
        app.flag_registry()
            .global()
            .iter()
            .map(|spec| Line::Plain(flag_line(spec, None))),
    );
    for framework in app.framework_registry().iter() {
        lines.extend(
            app.flag_registry()
                .for_framework(framework)
                .iter()
                .map(|spec| Line::Plain(flag_line(spec, Some(framework)))),
        );
    }
    lines
}

fn flag_line(spec: &FlagSpec, framework: Option<FrameworkKind>) -> String {
    let operand = match spec.arity {
        Arity::None => String::new(),
        Arity::Fixed(n) if n.get() == 1 => " <value>".into(),
        Arity::Fixed(n) => format!(" <value x{n}>"),
        Arity::Variadic => " <value>...".into(),
    };
    let scope = framework
        .map(|kind| format!("({kind}) "))
        .unwrap_or_default();
    format!(
        "  {:<32}{scope}{}",
        format!("{}{operand}", spec.name),
        spec.description
    )
}
