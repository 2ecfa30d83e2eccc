//! Configuration loading and merging
//!
//! Defaults come from an optional config file and are overridden by CLI flags
//! (or their environment variables): CLI > config file > built-in defaults.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
