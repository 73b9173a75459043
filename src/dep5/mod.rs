//! DEP5 override model: directory-wide license/copyright declarations keyed
//! by glob pattern, read from `.reuse/dep5`.
//!
//! - [`control_file`] — the underlying RFC2822-style stanza parser.
//!
//! Multiple `Files` stanzas may match one path; the one declared last wins,
//! so general stanzas go first and specific overrides after them.

pub mod control_file;

use std::path::Path;

use crate::error::Dep5Error;
use crate::matcher::PatternSet;

use control_file::{ControlFile, Stanza};

/// One `Files` stanza of a DEP5 file.
#[derive(Debug, Clone)]
pub struct OverrideEntry {
    pub files: PatternSet,
    /// One statement per line of the `Copyright` field.
    pub copyright: Vec<String>,
    /// The `License` field, verbatim.
    pub license: String,
}

impl OverrideEntry {
    /// Convert a stanza. Stanzas without a `Files` field (e.g. the header
    /// stanza) yield `Ok(None)`.
    pub fn from_stanza(index: usize, stanza: &Stanza) -> Result<Option<Self>, Dep5Error> {
        let Some(files) = stanza.get("Files") else {
            return Ok(None);
        };
        let copyright = stanza.get("Copyright").ok_or(Dep5Error::MissingField {
            stanza: index,
            field: "Copyright",
        })?;
        let license = stanza.get("License").ok_or(Dep5Error::MissingField {
            stanza: index,
            field: "License",
        })?;

        let files = PatternSet::new(files.split('\n').filter(|p| !p.is_empty()))?;

        Ok(Some(OverrideEntry {
            files,
            copyright: copyright.split('\n').map(str::to_string).collect(),
            license: license.to_string(),
        }))
    }
}

/// Immutable set of override entries, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Dep5 {
    entries: Vec<OverrideEntry>,
}

impl Dep5 {
    pub fn parse(text: &str) -> Result<Self, Dep5Error> {
        let file = ControlFile::parse(text)?;
        Self::from_control_file(&file)
    }

    pub fn from_control_file(file: &ControlFile) -> Result<Self, Dep5Error> {
        let mut entries = Vec::new();
        for (index, stanza) in file.stanzas.iter().enumerate() {
            if let Some(entry) = OverrideEntry::from_stanza(index, stanza)? {
                entries.push(entry);
            }
        }
        Ok(Self { entries })
    }

    /// Entry for a root-relative `path`; the last declared match wins.
    pub fn find(&self, path: &Path) -> Option<&OverrideEntry> {
        self.entries.iter().rev().find(|e| e.files.matches(path))
    }

    /// Like [`Dep5::find`] for a `path` under `base`.
    pub fn find_under(&self, base: &Path, path: &Path) -> Option<&OverrideEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.files.matches_under(base, path))
    }

    pub fn entries(&self) -> &[OverrideEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEP5: &str = "\
Format: https://www.debian.org/doc/packaging-manuals/copyright-format/1.0/
Upstream-Name: example

Files: *
Copyright: 2024 Example Org
License: MIT

Files: vendor/*
Copyright: 2020 Vendor A
 2021 Vendor B
License: Apache-2.0
";

    #[test]
    fn test_header_stanza_is_dropped() {
        let dep5 = Dep5::parse(DEP5).unwrap();
        assert_eq!(dep5.entries().len(), 2);
    }

    #[test]
    fn test_last_declared_match_wins() {
        let dep5 = Dep5::parse(DEP5).unwrap();

        let vendor = dep5.find(Path::new("vendor/x.c")).unwrap();
        assert_eq!(vendor.license, "Apache-2.0");
        assert_eq!(vendor.copyright, vec!["2020 Vendor A", "2021 Vendor B"]);

        let other = dep5.find(Path::new("other.c")).unwrap();
        assert_eq!(other.license, "MIT");
        assert_eq!(other.copyright, vec!["2024 Example Org"]);
    }

    #[test]
    fn test_general_stanza_after_specific_shadows_it() {
        let text = "Files: vendor/*\nCopyright: V\nLicense: Apache-2.0\n\n\
                    Files: *\nCopyright: O\nLicense: MIT\n";
        let dep5 = Dep5::parse(text).unwrap();
        assert_eq!(dep5.find(Path::new("vendor/x.c")).unwrap().license, "MIT");
    }

    #[test]
    fn test_multiline_files_field() {
        let text = "Files: docs/*\n  *.png\n\nCopyright: X\nLicense: CC0-1.0\n";
        // The blank line above ends the stanza, so Copyright is missing.
        assert!(matches!(
            Dep5::parse(text),
            Err(Dep5Error::MissingField {
                stanza: 0,
                field: "Copyright"
            })
        ));

        let text = "Files: docs/*\n  *.png\nCopyright: X\nLicense: CC0-1.0\n";
        let dep5 = Dep5::parse(text).unwrap();
        let entry = &dep5.entries()[0];
        assert_eq!(entry.files.patterns(), ["docs/*", "*.png"]);
        assert!(dep5.find(Path::new("logo.png")).is_some());
        assert!(dep5.find(Path::new("docs/index.md")).is_some());
        assert!(dep5.find(Path::new("src/main.rs")).is_none());
    }

    #[test]
    fn test_missing_license_is_an_error() {
        let text = "Files: *\nCopyright: X\n";
        assert!(matches!(
            Dep5::parse(text),
            Err(Dep5Error::MissingField {
                field: "License",
                ..
            })
        ));
    }

    #[test]
    fn test_format_error_propagates() {
        assert!(matches!(
            Dep5::parse("Files *\n"),
            Err(Dep5Error::Format(_))
        ));
    }

    #[test]
    fn test_find_under_base() {
        let dep5 = Dep5::parse(DEP5).unwrap();
        let base = Path::new("/repo");
        let entry = dep5.find_under(base, Path::new("/repo/vendor/x.c")).unwrap();
        assert_eq!(entry.license, "Apache-2.0");
        assert!(dep5.find_under(base, Path::new("/other/x.c")).is_none());
    }

    #[test]
    fn test_no_match() {
        let dep5 = Dep5::parse("Files: vendor/*\nCopyright: X\nLicense: MIT\n").unwrap();
        assert!(dep5.find(Path::new("src/lib.rs")).is_none());
        assert!(Dep5::default().find(Path::new("any")).is_none());
    }
}
