//! Command-line interface for tag-replacer

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::SourceType;
use crate::replacer::ProcessEnv;
use crate::substitute::{replace_tags, ReplaceRequest};

/// Replace tags in a file based on a JSON, CSV, YAML, or environment replacer
#[derive(Parser, Debug)]
#[command(name = "tag-replacer")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Replacer JSON/YAML/CSV string, replacer file path, or comma-separated
    /// environment variable names
    #[arg(value_name = "REPLACER", required_unless_present = "replacer_flag")]
    pub replacer: Option<String>,

    /// Same as the positional REPLACER
    #[arg(short = 'r', long = "replacer", value_name = "REPLACER", conflicts_with = "replacer")]
    pub replacer_flag: Option<String>,

    /// Replacer source: 'string', 'file', or 'environment' [default: string]
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub source_type: Option<String>,

    /// Format of a string replacer: 'json', 'yaml', or 'csv' [default: json]
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Input file path
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    pub infile: PathBuf,

    /// Output file path
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub outfile: PathBuf,

    /// Start tag for placeholders [default: {{]
    #[arg(
        long = "start_tag",
        alias = "start-tag",
        value_name = "TAG",
        env = "TAG_REPLACER_START_TAG"
    )]
    pub start_tag: Option<String>,

    /// End tag for placeholders [default: }}]
    #[arg(long = "end_tag", alias = "end-tag", value_name = "TAG", env = "TAG_REPLACER_END_TAG")]
    pub end_tag: Option<String>,

    /// Path to config file (tag-replacer.toml or .tag-replacer.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(cli)
}

// RUST_LOG in the environment always takes precedence; otherwise WARN, or DEBUG with --verbose.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Resolve settings and run the load → read → substitute → write pipeline.
pub fn execute(cli: Cli) -> Result<()> {
    let Some(source) = cli.replacer.or(cli.replacer_flag) else {
        anyhow::bail!("A replacer must be given, either as REPLACER or with --replacer");
    };

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides {
            source_type: cli.source_type,
            format: cli.format,
            start_tag: cli.start_tag,
            end_tag: cli.end_tag,
        },
    )?;

    if config.source_type == SourceType::Environment {
        tracing::debug!("Ignoring format '{}' for environment replacer", config.format);
    }

    let request = ReplaceRequest {
        delimiters: config.delimiters(),
        source,
        source_type: config.source_type,
        format: config.format,
        input: cli.infile,
        output: cli.outfile,
    };

    replace_tags(&request, &ProcessEnv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_and_defaults() {
        let cli = Cli::try_parse_from(["tag-replacer", "{}", "--in", "a.txt", "--out", "b.txt"])
            .expect("parse");
        assert_eq!(cli.replacer.as_deref(), Some("{}"));
        assert!(cli.source_type.is_none());
        assert!(cli.format.is_none());
        assert_eq!(cli.infile, PathBuf::from("a.txt"));
        assert_eq!(cli.outfile, PathBuf::from("b.txt"));
    }

    #[test]
    fn test_parse_replacer_flag_and_short_options() {
        let cli = Cli::try_parse_from([
            "tag-replacer",
            "-r",
            "FOO,BAR",
            "-t",
            "environment",
            "-i",
            "in.txt",
            "-o",
            "out.txt",
            "--start-tag",
            "<%",
            "--end_tag",
            "%>",
        ])
        .expect("parse");
        assert_eq!(cli.replacer_flag.as_deref(), Some("FOO,BAR"));
        assert_eq!(cli.source_type.as_deref(), Some("environment"));
        assert_eq!(cli.start_tag.as_deref(), Some("<%"));
        assert_eq!(cli.end_tag.as_deref(), Some("%>"));
    }

    #[test]
    fn test_replacer_is_required() {
        let result = Cli::try_parse_from(["tag-replacer", "--in", "a", "--out", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_positional_and_flag_conflict() {
        let result = Cli::try_parse_from([
            "tag-replacer",
            "{}",
            "--replacer",
            "{}",
            "--in",
            "a",
            "--out",
            "b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_in_and_out_are_required() {
        assert!(Cli::try_parse_from(["tag-replacer", "{}", "--in", "a"]).is_err());
        assert!(Cli::try_parse_from(["tag-replacer", "{}", "--out", "b"]).is_err());
    }
}
