//! Configuration types
//!
//! Board-agnostic instrument settings, embedded at build time as a small
//! TOML file and parsed on boot.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError, ConfigErrorKind};
pub use types::*;
