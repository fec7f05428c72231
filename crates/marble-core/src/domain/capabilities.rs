//! Flag and framework registries.
//!
//! Each recognized flag is described exactly once by a [`FlagSpec`] in one of
//! the static tables below. The tables are only the *built-in data*: the
//! parser, dispatcher and application never read them directly. They receive
//! an owned [`FlagRegistry`] / [`FrameworkRegistry`] built once at start-up.
//!
//! # Adding a New Flag
//!
//! 1. Add one [`FlagSpec`] to [`GLOBAL_FLAGS`] or the framework's table
//! 2. If it is framework-scoped, make sure [`FlagRegistry::builtin`] registers
//!    that table under the framework
//! 3. That's it: parsing derives from the registry

use std::collections::HashMap;
use std::num::NonZeroUsize;

use crate::domain::error::DomainError;
use crate::domain::value_objects::FrameworkKind;

// ── Arity ─────────────────────────────────────────────────────────────────────

/// How many trailing tokens a flag consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Takes no value.
    None,
    /// Claims up to `n` immediately following non-flag tokens.
    Fixed(NonZeroUsize),
    /// Claims every following non-flag token until the next `--` token.
    Variadic,
}

impl Arity {
    /// Shorthand for the only fixed arity the built-in tables use.
    pub const ONE: Arity = Arity::Fixed(NonZeroUsize::MIN);
}

// ── Flag definitions ──────────────────────────────────────────────────────────

/// Describes one recognized flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    /// Full flag token, including the leading `--`.
    pub name: &'static str,
    pub arity: Arity,
    /// One-line help text shown in usage listings.
    pub description: &'static str,
}

impl FlagSpec {
    pub const fn new(name: &'static str, arity: Arity, description: &'static str) -> Self {
        Self {
            name,
            arity,
            description,
        }
    }
}

/// Flags valid for every framework.
pub static GLOBAL_FLAGS: &[FlagSpec] = &[
    FlagSpec::new(
        "--ping",
        Arity::None,
        "Exit before the project directory is created",
    ),
    FlagSpec::new("--debug", Arity::None, "Enable debug logging"),
    FlagSpec::new(
        "--install-packages",
        Arity::Variadic,
        "Packages to add to the new project",
    ),
];

/// Flags valid only when `express` is selected.
pub static EXPRESS_FLAGS: &[FlagSpec] = &[
    FlagSpec::new("--use-nodemon", Arity::None, "Run the dev server under nodemon"),
    FlagSpec::new(
        "--use-express-session",
        Arity::None,
        "Add express-session middleware",
    ),
];

// ── FlagRegistry ──────────────────────────────────────────────────────────────

/// Immutable table of recognized flags, scoped globally and per framework.
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    global: Vec<FlagSpec>,
    frameworks: HashMap<FrameworkKind, Vec<FlagSpec>>,
}

impl FlagRegistry {
    /// An empty registry; every flag is unrecognized.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry Marble ships with.
    pub fn builtin() -> Self {
        GLOBAL_FLAGS
            .iter()
            .fold(Self::new(), |registry, spec| registry.with_global(*spec))
            .with_framework_flags(FrameworkKind::Express, EXPRESS_FLAGS)
    }

    /// Register a flag valid for every framework.
    pub fn with_global(mut self, spec: FlagSpec) -> Self {
        self.global.push(spec);
        self
    }

    /// Register flags valid only for `kind`.
    pub fn with_framework_flags(mut self, kind: FrameworkKind, specs: &[FlagSpec]) -> Self {
        self.frameworks
            .entry(kind)
            .or_default()
            .extend_from_slice(specs);
        self
    }

    /// Resolve the arity of `name`.
    ///
    /// The global table is consulted first, then the active framework's.
    /// `None` means the flag is unrecognized, which is not an error.
    pub fn lookup(&self, name: &str, active: Option<FrameworkKind>) -> Option<Arity> {
        let scoped = active
            .and_then(|kind| self.frameworks.get(&kind))
            .map(Vec::as_slice)
            .unwrap_or_default();

        self.global
            .iter()
            .chain(scoped)
            .find(|spec| spec.name == name)
            .map(|spec| spec.arity)
    }

    /// Flags valid for every framework.
    pub fn global(&self) -> &[FlagSpec] {
        &self.global
    }

    /// Flags valid only for `kind` (empty if it has none).
    pub fn for_framework(&self, kind: FrameworkKind) -> &[FlagSpec] {
        self.frameworks
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

// ── FrameworkRegistry ─────────────────────────────────────────────────────────

/// The set of frameworks a user may select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkRegistry {
    frameworks: Vec<FrameworkKind>,
}

impl FrameworkRegistry {
    pub fn new(frameworks: impl IntoIterator<Item = FrameworkKind>) -> Self {
        Self {
            frameworks: frameworks.into_iter().collect(),
        }
    }

    /// Every framework Marble can name.
    pub fn builtin() -> Self {
        Self::new(FrameworkKind::ALL)
    }

    /// Membership test on the raw identifier.
    pub fn is_supported(&self, name: &str) -> bool {
        self.frameworks.iter().any(|kind| kind.as_str() == name)
    }

    /// Resolve `name` to a framework, or explain which ones are available.
    pub fn resolve(&self, name: &str) -> Result<FrameworkKind, DomainError> {
        self.frameworks
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| DomainError::UnsupportedFramework {
                name: name.to_string(),
                supported: self.names(),
            })
    }

    /// Identifiers in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.frameworks.iter().map(|kind| kind.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = FrameworkKind> + '_ {
        self.frameworks.iter().copied()
    }
}

impl Default for FrameworkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_resolve_without_framework() {
        let registry = FlagRegistry::builtin();
        assert_eq!(registry.lookup("--ping", None), Some(Arity::None));
        assert_eq!(registry.lookup("--debug", None), Some(Arity::None));
        assert_eq!(
            registry.lookup("--install-packages", None),
            Some(Arity::Variadic)
        );
    }

    #[test]
    fn framework_flags_need_their_framework() {
        let registry = FlagRegistry::builtin();
        assert_eq!(registry.lookup("--use-nodemon", None), None);
        assert_eq!(
            registry.lookup("--use-nodemon", Some(FrameworkKind::React)),
            None
        );
        assert_eq!(
            registry.lookup("--use-nodemon", Some(FrameworkKind::Express)),
            Some(Arity::None)
        );
    }

    #[test]
    fn global_table_wins_over_framework_table() {
        let registry = FlagRegistry::new()
            .with_global(FlagSpec::new("--out", Arity::ONE, ""))
            .with_framework_flags(
                FrameworkKind::Vue,
                &[FlagSpec::new("--out", Arity::Variadic, "")],
            );
        assert_eq!(
            registry.lookup("--out", Some(FrameworkKind::Vue)),
            Some(Arity::ONE)
        );
    }

    #[test]
    fn unknown_flag_is_not_found() {
        let registry = FlagRegistry::builtin();
        assert_eq!(registry.lookup("--nope", Some(FrameworkKind::Express)), None);
    }

    #[test]
    fn for_framework_is_empty_without_flags() {
        let registry = FlagRegistry::builtin();
        assert_eq!(registry.for_framework(FrameworkKind::Express).len(), 2);
        assert!(registry.for_framework(FrameworkKind::Vue).is_empty());
    }

    #[test]
    fn express_is_supported_angular_is_not() {
        let registry = FrameworkRegistry::builtin();
        assert!(registry.is_supported("express"));
        assert!(!registry.is_supported("angular"));
        assert!(!registry.is_supported("Express"));
    }

    #[test]
    fn resolve_reports_registry_contents() {
        let registry = FrameworkRegistry::new([FrameworkKind::Express]);
        assert_eq!(registry.resolve("express").unwrap(), FrameworkKind::Express);
        match registry.resolve("vue").unwrap_err() {
            DomainError::UnsupportedFramework { supported, .. } => {
                assert_eq!(supported, vec!["express"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn builtin_names_are_in_order() {
        assert_eq!(
            FrameworkRegistry::builtin().names(),
            vec!["express", "react", "vue"]
        );
    }
}
