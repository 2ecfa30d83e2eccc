//! tag-replacer: replace delimited placeholders in a file
//!
//! Replacement pairs are loaded from an inline JSON/YAML/CSV string, a replacer
//! file, or a list of environment variables, then substituted into the input
//! file text in list order.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod replacer;
pub mod substitute;

pub use domain::{Config, Delimiters, Format, ReplacementPair, ReplacementSet, SourceType};
pub use error::TagError;
pub use replacer::{load_replacer, EnvLookup, ProcessEnv};
pub use substitute::{replace_in_file, replace_tags, substitute, ReplaceRequest, Substitution};
