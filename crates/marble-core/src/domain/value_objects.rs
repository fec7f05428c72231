//! Domain value objects: FrameworkKind, Platform.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. Which
//! frameworks are *offered* to the user lives in the framework registry;
//! which flags a framework accepts lives in the flag registry. This file only
//! defines the types and their string representations; turning user input
//! into a `FrameworkKind` is the framework registry's job.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its `as_str` arm here
//! 2. Add the variant to `FrameworkKind::ALL`
//! 3. Wire a generator for it in the dispatcher (the `match` there is
//!    exhaustive, so the compiler points at the spot)

use serde::{Deserialize, Serialize};
use std::fmt;

// ── FrameworkKind ─────────────────────────────────────────────────────────────

/// A framework Marble knows how to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkKind {
    Express,
    React,
    Vue,
}

impl FrameworkKind {
    /// Every variant, in registry order.
    pub const ALL: [FrameworkKind; 3] = [Self::Express, Self::React, Self::Vue];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::React => "react",
            Self::Vue => "vue",
        }
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Platform ──────────────────────────────────────────────────────────────────

/// Operating system the process runs on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Other(String),
}

impl Platform {
    /// Detect the platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Other(os) => os,
        }
    }

    /// Whether Marble can run here at all.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Linux)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
