//! Argument Parser - turns the raw argv tail into a [`FlagSet`].
//!
//! The grammar is deliberately permissive: nothing here can fail. Unknown
//! flags are recorded with no value, stray positionals are dropped, and it is
//! up to the caller to decide whether the result makes sense.

use tracing::{debug, trace};

use crate::domain::{Arity, FlagRegistry, FlagSet, FrameworkKind};

/// Flag that is still collecting trailing values.
#[derive(Debug)]
struct Pending {
    flag: String,
    /// `None` while a variadic flag is open.
    remaining: Option<usize>,
}

/// Arity-aware flag tokenizer.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentParser<'a> {
    registry: &'a FlagRegistry,
}

impl<'a> ArgumentParser<'a> {
    pub fn new(registry: &'a FlagRegistry) -> Self {
        Self { registry }
    }

    /// Parse `tokens` left to right.
    ///
    /// `tokens` is the full argv tail, framework and project name included.
    /// Those two positionals are discarded naturally because no flag is open
    /// when they are seen. Framework-scoped flags are only recognized when
    /// `active` names their framework.
    ///
    /// - A `--` token is recorded with no value. If its arity takes values it
    ///   becomes the pending flag, otherwise the pending flag is cleared.
    /// - Any other token is appended to the pending flag, or dropped if there
    ///   is none. A `Fixed(n)` flag closes after `n` values; a variadic flag
    ///   stays open until the next `--` token.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S], active: Option<FrameworkKind>) -> FlagSet {
        let mut flags = FlagSet::new();
        let mut pending: Option<Pending> = None;

        for token in tokens {
            let token: &str = token.as_ref();
            if token.starts_with("--") {
                flags.insert(token);
                pending = match self.registry.lookup(token, active) {
                    Some(Arity::Fixed(n)) => Some(Pending {
                        flag: token.to_string(),
                        remaining: Some(n.get()),
                    }),
                    Some(Arity::Variadic) => Some(Pending {
                        flag: token.to_string(),
                        remaining: None,
                    }),
                    Some(Arity::None) => None,
                    None => {
                        debug!(flag = token, "Unrecognized flag recorded without value");
                        None
                    }
                };
                continue;
            }

            let Some(open) = pending.as_mut() else {
                trace!(token, "Positional token ignored");
                continue;
            };

            flags.push_value(&open.flag, token);
            if let Some(remaining) = open.remaining.as_mut() {
                *remaining -= 1;
                if *remaining == 0 {
                    pending = None;
                }
            }
        }

        flags
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
