//! Application services (use case orchestrators).

mod app;
mod dispatcher;
mod express;
mod generator;
mod parser;
mod preflight;

pub use app::{MarbleApp, RunOutcome};
pub use dispatcher::GeneratorDispatcher;
pub use express::{ExpressGenerator, SENTINEL_CONTENT, SENTINEL_FILE};
pub use generator::{Generator, ScaffoldOutcome, UnimplementedGenerator};
pub use parser::ArgumentParser;
pub use preflight::Preflight;
