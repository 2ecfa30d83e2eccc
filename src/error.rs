//! Error taxonomy for loading replacers and rewriting files

use std::io;
use std::path::PathBuf;

use crate::domain::Format;

#[derive(Debug, thiserror::Error)]
pub enum TagError {
    /// The replacer file could not be read.
    #[error("Error reading replacer from file {}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Replacer content was malformed or had the wrong shape.
    #[error("Error decoding {format} replacer: {message}")]
    Parse { format: Format, message: String },

    /// Unknown source type, format name, or replacer file extension.
    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("Error reading input file {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing to output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TagError {
    pub(crate) fn parse(format: Format, err: impl std::fmt::Display) -> Self {
        TagError::Parse { format, message: err.to_string() }
    }
}
