//! JSON and YAML replacer documents
//!
//! Both formats share one logical shape: `{ "replace": [ {"key": .., "value": ..} ] }`.

use serde::Deserialize;

use crate::domain::{Format, ReplacementPair, ReplacementSet};
use crate::error::TagError;

#[derive(Debug, Deserialize)]
struct ReplacerDocument {
    replace: Vec<ReplacementPair>,
}

pub fn parse_json(content: &str) -> Result<ReplacementSet, TagError> {
    let doc: ReplacerDocument =
        serde_json::from_str(content).map_err(|e| TagError::parse(Format::Json, e))?;
    Ok(doc.replace.into())
}

pub fn parse_yaml(content: &str) -> Result<ReplacementSet, TagError> {
    let doc: ReplacerDocument =
        serde_yaml::from_str(content).map_err(|e| TagError::parse(Format::Yaml, e))?;
    Ok(doc.replace.into())
}
