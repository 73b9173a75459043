use std::collections::HashSet;
use std::path::Path;

use crate::matcher::normalize;
use crate::models::{CombinedResult, FileResult};

/// Merge per-file results into one deduplicated summary.
///
/// Results are visited in ascending order of their path relative to `base`
/// and each value is kept at its first occurrence. Comparison is exact and
/// case-sensitive.
pub fn combine(base: &Path, results: &[FileResult]) -> CombinedResult {
    let mut ordered: Vec<(String, &FileResult)> = results
        .iter()
        .map(|r| (relative_key(base, &r.path), r))
        .collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut combined = CombinedResult::default();
    let mut seen_licenses = HashSet::new();
    let mut seen_copyrights = HashSet::new();

    for (_, result) in ordered {
        for license in &result.license_identifiers {
            if seen_licenses.insert(license.as_str()) {
                combined.license_identifiers.push(license.clone());
            }
        }
        for statement in &result.copyright_statements {
            if seen_copyrights.insert(statement.as_str()) {
                combined.copyright_statements.push(statement.clone());
            }
        }
    }

    combined
}

fn relative_key(base: &Path, path: &Path) -> String {
    normalize(path.strip_prefix(base).unwrap_or(path))
}
