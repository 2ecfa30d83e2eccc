//! CSV replacers
//!
//! The first non-blank line names the columns; `key` and `value` are located by
//! header name, so column order and extra columns don't matter. Cells are split
//! on commas and trimmed; quoting is not interpreted.

use crate::domain::{Format, ReplacementPair, ReplacementSet};
use crate::error::TagError;

const KEY_HEADER: &str = "key";
const VALUE_HEADER: &str = "value";

/// Parse CSV replacer content.
///
/// Malformed rows (too few cells, or an empty key) are skipped with a warning
/// rather than failing the whole replacer.
pub fn parse_csv(content: &str) -> Result<ReplacementSet, TagError> {
    let mut lines = content.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return Ok(ReplacementSet::default());
    };

    let headers = split_row(header_line);
    let key_idx = headers.iter().position(|h| *h == KEY_HEADER);
    let value_idx = headers.iter().position(|h| *h == VALUE_HEADER);
    let (Some(key_idx), Some(value_idx)) = (key_idx, value_idx) else {
        return Err(TagError::parse(
            Format::Csv,
            format!("CSV must contain '{}' and '{}' headers", KEY_HEADER, VALUE_HEADER),
        ));
    };
    let min_cells = key_idx.max(value_idx) + 1;

    let mut pairs = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        let cells = split_row(line);

        if cells.len() < min_cells {
            tracing::warn!(
                "Skipping CSV line {}: expected at least {} values, found {}",
                line_no,
                min_cells,
                cells.len()
            );
            continue;
        }

        let key = cells[key_idx];
        if key.is_empty() {
            tracing::warn!("Skipping CSV line {}: empty key", line_no);
            continue;
        }

        pairs.push(ReplacementPair::new(key, cells[value_idx]));
    }

    Ok(pairs.into())
}

fn split_row(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let set = parse_csv("key,value\nNAME,Alice\nCITY,Oslo\n").expect("parse");
        assert_eq!(
            set.pairs(),
            &[ReplacementPair::new("NAME", "Alice"), ReplacementPair::new("CITY", "Oslo")]
        );
    }

    #[test]
    fn test_columns_located_by_header_name() {
        let set = parse_csv("note, value ,key\nignored,Alice,NAME\n").expect("parse");
        assert_eq!(set.pairs(), &[ReplacementPair::new("NAME", "Alice")]);
    }

    #[test]
    fn test_cells_are_trimmed_and_crlf_handled() {
        let set = parse_csv("key,value\r\n  NAME ,  Alice  \r\n").expect("parse");
        assert_eq!(set.pairs(), &[ReplacementPair::new("NAME", "Alice")]);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let csv = "key,value\nONLYKEY\n,orphan\n\nNAME,Alice\n";
        let set = parse_csv(csv).expect("parse");
        assert_eq!(set.pairs(), &[ReplacementPair::new("NAME", "Alice")]);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let set = parse_csv("key,value\nBLANK,\n").expect("parse");
        assert_eq!(set.pairs(), &[ReplacementPair::new("BLANK", "")]);
    }

    #[test]
    fn test_missing_headers_is_parse_error() {
        let err = parse_csv("name,val\nA,1\n").unwrap_err();
        assert!(matches!(err, TagError::Parse { format: Format::Csv, .. }));
    }

    #[test]
    fn test_empty_content_yields_empty_set() {
        assert!(parse_csv("").expect("parse").is_empty());
        assert!(parse_csv("\n  \n").expect("parse").is_empty());
        assert!(parse_csv("key,value\n").expect("parse").is_empty());
    }
}
