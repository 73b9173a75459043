use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::PatternError;

/// A compiled set of glob patterns matched against slash-separated paths
/// relative to a scan root.
///
/// Supports `*`, `?`, `**` and character classes. By default `*` also
/// matches `/`, as DEP5 `Files` patterns require; [`PatternSet::path_aware`]
/// builds a set where only `**` crosses directory boundaries.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(patterns, false, false)
    }

    pub fn path_aware<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(patterns, true, false)
    }

    /// Like [`PatternSet::path_aware`], but patterns that fail to compile
    /// are logged and left out instead of failing the whole set.
    pub fn path_aware_lenient<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(patterns, true, true)
    }

    fn build<I, S>(
        patterns: I,
        literal_separator: bool,
        skip_invalid: bool,
    ) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept: Vec<String> = Vec::new();
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern: String = pattern.into();
            let glob = match GlobBuilder::new(&pattern)
                .literal_separator(literal_separator)
                .backslash_escape(true)
                .build()
            {
                Ok(glob) => glob,
                Err(source) if skip_invalid => {
                    tracing::warn!("skipping invalid glob pattern {:?}: {}", pattern, source);
                    continue;
                }
                Err(source) => return Err(PatternError { pattern, source }),
            };
            builder.add(glob);
            kept.push(pattern);
        }
        let set = builder.build().map_err(|source| PatternError {
            pattern: kept.join(", "),
            source,
        })?;
        Ok(Self {
            patterns: kept,
            set,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Match a path that is already relative to the scan root.
    pub fn matches(&self, candidate: &Path) -> bool {
        self.set.is_match(normalize(candidate))
    }

    /// Match `candidate` after making it relative to `base`.
    /// Paths outside `base` never match.
    pub fn matches_under(&self, base: &Path, candidate: &Path) -> bool {
        candidate
            .strip_prefix(base)
            .map(|rel| self.matches(rel))
            .unwrap_or(false)
    }
}

/// Render a path with `/` separators and without a leading `./`.
pub fn normalize(path: &Path) -> String {
    let s = path.to_string_lossy().replace('\\', "/");
    match s.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => s,
    }
}
