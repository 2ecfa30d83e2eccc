//! CLI overrides on top of file config

use crate::domain::{Config, Format, SourceType};
use crate::error::TagError;

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source_type: Option<String>,
    pub format: Option<String>,
    pub start_tag: Option<String>,
    pub end_tag: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Result<Config, TagError> {
    if let Some(source_type) = cli.source_type {
        config.source_type = source_type.parse::<SourceType>()?;
    }
    if let Some(format) = cli.format {
        config.format = format.parse::<Format>()?;
    }
    if let Some(start_tag) = cli.start_tag {
        config.start_tag = start_tag;
    }
    if let Some(end_tag) = cli.end_tag {
        config.end_tag = end_tag;
    }
    Ok(config)
}
