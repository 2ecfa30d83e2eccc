//! Replacer loading (inline string, file, environment)

use std::fs;
use std::path::Path;

use crate::domain::{Format, ReplacementSet, SourceType};
use crate::error::TagError;

pub mod csv;
pub mod document;
pub mod env;

pub use env::{EnvLookup, ProcessEnv};

/// Load replacement pairs from `source`.
///
/// Dispatches on the source type:
/// - `file` → format detected from the extension, then [`parse_content`]
/// - `string` → [`parse_content`] with the explicit `format`
/// - `environment` → [`env::load_environment`]; `format` is ignored
pub fn load_replacer(
    source: &str,
    source_type: SourceType,
    format: Format,
    env: &dyn EnvLookup,
) -> Result<ReplacementSet, TagError> {
    let set = match source_type {
        SourceType::File => load_file(Path::new(source))?,
        SourceType::String => parse_content(source, format)?,
        SourceType::Environment => env::load_environment(source, env),
    };
    tracing::debug!("Loaded {} replacement pair(s) from {} source", set.len(), source_type);
    Ok(set)
}

/// Load a replacer file, picking the format from its extension.
pub fn load_file(path: &Path) -> Result<ReplacementSet, TagError> {
    let Some(format) = Format::from_extension(path) else {
        return Err(TagError::UnsupportedFormat(format!(
            "Unsupported file format for {}. Please use JSON, CSV, or YAML.",
            path.display()
        )));
    };

    let content = fs::read_to_string(path)
        .map_err(|source| TagError::SourceRead { path: path.to_path_buf(), source })?;

    parse_content(&content, format)
}

/// Parse structured replacer content in the given format.
pub fn parse_content(content: &str, format: Format) -> Result<ReplacementSet, TagError> {
    match format {
        Format::Json => document::parse_json(content),
        Format::Yaml => document::parse_yaml(content),
        Format::Csv => csv::parse_csv(content),
    }
}
