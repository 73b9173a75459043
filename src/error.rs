use std::path::PathBuf;

use thiserror::Error;

/// Malformed line in a Debian control file. Fatal to the whole file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: no stanza to append value to: \"{text}\"")]
    NoStanza { line: usize, text: String },

    #[error("line {line}: line doesn't have a ':' separator: \"{text}\"")]
    MissingSeparator { line: usize, text: String },
}

/// Failure to turn a parsed control file into an override model.
#[derive(Debug, Error)]
pub enum Dep5Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    /// `stanza` is the 0-based index of the stanza in declaration order.
    #[error("stanza {stanza} has a Files field but no {field} field")]
    MissingField { stanza: usize, field: &'static str },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[derive(Debug, Error)]
#[error("invalid glob pattern {pattern:?}: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: globset::Error,
}

/// Anything that aborts a scan. There is no partial result.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("malformed override file {}: {source}", .path.display())]
    Dep5 {
        path: PathBuf,
        #[source]
        source: Dep5Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
