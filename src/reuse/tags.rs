use once_cell::sync::Lazy;
use regex::Regex;

pub const LICENSE_MARKER: &str = "SPDX-License-Identifier:";
pub const IGNORE_START: &str = "REUSE-IgnoreStart";
pub const IGNORE_END: &str = "REUSE-IgnoreEnd";

/// Tried in this order; every pattern that matches a line contributes one
/// statement, so a single line may yield several.
static COPYRIGHT_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"SPDX-(?:File|Snippet)CopyrightText:\s*(.*)").unwrap(),
        Regex::new(r"Copyright\s?(?:\([Cc]\))?\s+(.*)").unwrap(),
        Regex::new(r"©\s+(.*)").unwrap(),
    ]
});

/// Inline REUSE tags found in one file's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    pub licenses: Vec<String>,
    pub copyrights: Vec<String>,
}

impl Tags {
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty() && self.copyrights.is_empty()
    }
}

/// Extract license identifiers and copyright statements from `text`.
///
/// Returns `None` when neither list has an entry.
pub fn extract(text: &str) -> Option<Tags> {
    let lines = text.split(['\r', '\n']).filter(|l| !l.is_empty());

    let mut tags = Tags::default();
    for line in skip_ignored(lines) {
        if let Some((_, rest)) = line.split_once(LICENSE_MARKER) {
            tags.licenses.push(rest.trim().to_string());
        }

        for pattern in COPYRIGHT_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(line) {
                tags.copyrights.push(caps[1].to_string());
            }
        }
    }

    (!tags.is_empty()).then_some(tags)
}

/// Drop lines between ignore markers, and the marker lines themselves.
/// Markers toggle a flag; they do not nest.
fn skip_ignored<'a>(lines: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    let mut ignoring = false;
    lines.filter(move |line| {
        if line.contains(IGNORE_START) {
            ignoring = true;
            return false;
        }
        if line.contains(IGNORE_END) {
            ignoring = false;
            return false;
        }
        !ignoring
    })
}
