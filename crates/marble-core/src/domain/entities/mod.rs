//! Domain entities.

pub mod config;
pub mod flag_set;
pub mod properties;
