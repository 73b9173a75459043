use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resolved REUSE data for one file. Never has both lists empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub license_identifiers: Vec<String>,
    pub copyright_statements: Vec<String>,
    pub source: ReuseSource,
}

impl FileResult {
    /// Returns `None` when there is nothing to report for `path`.
    pub fn new(
        path: PathBuf,
        license_identifiers: Vec<String>,
        copyright_statements: Vec<String>,
        source: ReuseSource,
    ) -> Option<Self> {
        if license_identifiers.is_empty() && copyright_statements.is_empty() {
            return None;
        }
        Some(Self {
            path,
            license_identifiers,
            copyright_statements,
            source,
        })
    }
}

/// Which resolution tier produced a [`FileResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReuseSource {
    /// Tags in the file itself.
    Inline,
    /// Tags in `<file>.license`.
    Sidecar,
    /// A matching `.reuse/dep5` stanza.
    Dep5,
}

impl std::fmt::Display for ReuseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReuseSource::Inline => write!(f, "inline"),
            ReuseSource::Sidecar => write!(f, "sidecar"),
            ReuseSource::Dep5 => write!(f, "dep5"),
        }
    }
}

/// Deduplicated union of many [`FileResult`]s, in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedResult {
    pub license_identifiers: Vec<String>,
    pub copyright_statements: Vec<String>,
}

/// Everything a report renderer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub files: Vec<FileResult>,
    pub combined: CombinedResult,
}
