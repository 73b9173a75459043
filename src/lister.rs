use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::matcher::PatternSet;

const VCS_DIR: &str = ".git";
const LICENSE_TEXT_FILE: &str = "LICENSE.txt";
const LICENSES_DIR: &str = "LICENSES";

/// Enumerate candidate files under `root`, sorted by path.
///
/// Skips the `.git` directory, `LICENSE.txt`, files directly inside a
/// `LICENSES` directory, anything matched by the root `.gitignore` (unless
/// disabled) and anything matched by `config.exclude`.
pub fn list_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let gitignore = if config.respect_gitignore {
        load_gitignore(root)?
    } else {
        None
    };
    let exclude = PatternSet::path_aware(config.exclude.iter().cloned())?;

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_vcs_dir(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || is_license_text(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if gitignore.as_ref().is_some_and(|set| set.matches(relative)) {
            tracing::trace!("{}: ignored by .gitignore", relative.display());
            continue;
        }
        if exclude.matches(relative) {
            tracing::trace!("{}: excluded by config", relative.display());
            continue;
        }

        files.push(entry.into_path());
    }

    tracing::info!("{} candidate files under {}", files.len(), root.display());
    Ok(files)
}

fn is_vcs_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VCS_DIR
}

fn is_license_text(path: &Path) -> bool {
    if path.file_name().is_some_and(|n| n == LICENSE_TEXT_FILE) {
        return true;
    }
    path.parent()
        .and_then(Path::file_name)
        .is_some_and(|n| n == LICENSES_DIR)
}

fn load_gitignore(root: &Path) -> Result<Option<PatternSet>, ScanError> {
    let path = root.join(".gitignore");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ScanError::Io { path, source }),
    };

    let globs: Vec<String> = content.lines().flat_map(gitignore_globs).collect();
    Ok(Some(PatternSet::path_aware_lenient(globs)?))
}

/// Translate one `.gitignore` line into root-relative globs.
///
/// Covers the common subset: comments, anchoring with `/`, directory-only
/// patterns with a trailing `/`, and unanchored patterns matching at any
/// depth. Negations are skipped; globs that fail to compile are skipped
/// when the set is built.
fn gitignore_globs(line: &str) -> Vec<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Vec::new();
    }
    if line.starts_with('!') {
        tracing::warn!("unsupported .gitignore negation skipped: {}", line);
        return Vec::new();
    }

    let dir_only = line.ends_with('/');
    let pattern = line.trim_end_matches('/');
    let anchored = pattern.contains('/');
    let pattern = pattern.trim_start_matches('/');
    if pattern.is_empty() {
        return Vec::new();
    }

    let base = if anchored {
        pattern.to_string()
    } else {
        format!("**/{}", pattern)
    };

    if dir_only {
        vec![format!("{}/**", base)]
    } else {
        vec![format!("{}/**", base), base]
    }
}
