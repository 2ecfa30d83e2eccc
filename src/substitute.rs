//! Placeholder substitution
//!
//! Pairs are applied one after another over the already-substituted text, so
//! a value that contains another pair's placeholder is expanded again when
//! that later pair runs. Earlier pairs never see text produced by later ones.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Delimiters, Format, ReplacementSet, SourceType};
use crate::error::TagError;
use crate::replacer::{load_replacer, EnvLookup};

/// Result of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    /// Total placeholder occurrences replaced across all pairs.
    pub replacements: usize,
}

/// Replace every `<start><key><end>` in `text`, pair by pair in set order.
///
/// Placeholders without a matching pair are left verbatim.
pub fn substitute(text: &str, set: &ReplacementSet, delimiters: &Delimiters) -> Substitution {
    let mut current = text.to_string();
    let mut replacements = 0;

    for pair in set {
        let placeholder = delimiters.placeholder(&pair.key);
        // An empty pattern would match between every character.
        if placeholder.is_empty() {
            tracing::debug!("Skipping pair with empty placeholder");
            continue;
        }

        let count = current.matches(placeholder.as_str()).count();
        if count == 0 {
            continue;
        }
        tracing::debug!("Replacing {} occurrence(s) of {}", count, placeholder);
        current = current.replace(placeholder.as_str(), &pair.value);
        replacements += count;
    }

    Substitution { text: current, replacements }
}

/// Read `input`, substitute, and write the result to `output`.
///
/// Nothing is written when the input can't be read.
pub fn replace_in_file(
    input: &Path,
    output: &Path,
    set: &ReplacementSet,
    delimiters: &Delimiters,
) -> Result<Substitution, TagError> {
    let content = fs::read_to_string(input)
        .map_err(|source| TagError::InputRead { path: input.to_path_buf(), source })?;

    let result = substitute(&content, set, delimiters);

    fs::write(output, &result.text)
        .map_err(|source| TagError::OutputWrite { path: output.to_path_buf(), source })?;

    Ok(result)
}

/// Everything one run needs: where the pairs come from and which files to rewrite.
#[derive(Debug, Clone)]
pub struct ReplaceRequest {
    pub source: String,
    pub source_type: SourceType,
    pub format: Format,
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiters: Delimiters,
}

/// Load the replacer, then rewrite the input file into the output file.
pub fn replace_tags(
    request: &ReplaceRequest,
    env: &dyn EnvLookup,
) -> Result<Substitution, TagError> {
    let set = load_replacer(&request.source, request.source_type, request.format, env)?;
    let result = replace_in_file(&request.input, &request.output, &set, &request.delimiters)?;
    tracing::info!(
        "Wrote {} ({} replacement(s) from {} pair(s))",
        request.output.display(),
        result.replacements,
        set.len()
    );
    Ok(result)
}
