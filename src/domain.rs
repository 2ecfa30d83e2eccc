//! Core types shared by the loader, the substitutor, and the CLI

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::TagError;

/// A single substitution rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplacementPair {
    pub key: String,
    pub value: String,
}

impl ReplacementPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Ordered replacement pairs for one run.
///
/// Order matters: pairs are applied one after another, so duplicate keys and
/// chained placeholders resolve by position in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementSet {
    pairs: Vec<ReplacementPair>,
}

impl ReplacementSet {
    pub fn new(pairs: Vec<ReplacementPair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[ReplacementPair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReplacementPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Keys in load order, duplicates included.
    pub fn keys(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.key.as_str()).collect()
    }
}

impl From<Vec<ReplacementPair>> for ReplacementSet {
    fn from(pairs: Vec<ReplacementPair>) -> Self {
        Self::new(pairs)
    }
}

impl FromIterator<ReplacementPair> for ReplacementSet {
    fn from_iter<I: IntoIterator<Item = ReplacementPair>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReplacementSet {
    type Item = &'a ReplacementPair;
    type IntoIter = std::slice::Iter<'a, ReplacementPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Where the replacer descriptor comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    String,
    File,
    Environment,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::String => "string",
            SourceType::File => "file",
            SourceType::Environment => "environment",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SourceType::String),
            "file" => Ok(SourceType::File),
            "environment" => Ok(SourceType::Environment),
            other => Err(TagError::UnsupportedFormat(format!(
                "Invalid replacer type '{}'. Use 'string', 'file', or 'environment'.",
                other
            ))),
        }
    }
}

/// Structured replacer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Csv => "csv",
        }
    }

    /// Detect the format of a replacer file from its extension (case-insensitive).
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "csv" => Some(Format::Csv),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            "csv" => Ok(Format::Csv),
            other => Err(TagError::UnsupportedFormat(format!(
                "Invalid format type '{}'. Use 'json', 'yaml', or 'csv'.",
                other
            ))),
        }
    }
}

pub const DEFAULT_START_TAG: &str = "{{";
pub const DEFAULT_END_TAG: &str = "}}";

/// Start and end markers around a placeholder key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub start: String,
    pub end: String,
}

impl Delimiters {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }

    pub fn placeholder(&self, key: &str) -> String {
        format!("{}{}{}", self.start, key, self.end)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(DEFAULT_START_TAG, DEFAULT_END_TAG)
    }
}

/// Run defaults, from the config file and then CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub format: Format,
    pub start_tag: String,
    pub end_tag: String,
}

impl Config {
    pub fn delimiters(&self) -> Delimiters {
        Delimiters::new(self.start_tag.clone(), self.end_tag.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_type: SourceType::default(),
            format: Format::default(),
            start_tag: DEFAULT_START_TAG.to_string(),
            end_tag: DEFAULT_END_TAG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_extension(Path::new("r.json")), Some(Format::Json));
        assert_eq!(Format::from_extension(Path::new("r.CSV")), Some(Format::Csv));
        assert_eq!(Format::from_extension(Path::new("dir/r.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_extension(Path::new("r.Yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_extension(Path::new("r.txt")), None);
        assert_eq!(Format::from_extension(Path::new("replacer")), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("file".parse::<SourceType>().unwrap(), SourceType::File);
        assert_eq!("environment".parse::<SourceType>().unwrap(), SourceType::Environment);
        assert_eq!("yaml".parse::<Format>().unwrap(), Format::Yaml);

        let err = "url".parse::<SourceType>().unwrap_err();
        assert!(matches!(err, TagError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("Invalid replacer type"));

        let err = "xml".parse::<Format>().unwrap_err();
        assert!(err.to_string().contains("Invalid format type"));
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(Delimiters::default().placeholder("NAME"), "{{NAME}}");
        assert_eq!(Delimiters::new("${", "}").placeholder("HOME"), "${HOME}");
    }
}
