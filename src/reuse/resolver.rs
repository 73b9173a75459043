use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::dep5::Dep5;
use crate::error::ScanError;
use crate::models::{FileResult, ReuseSource};
use crate::reuse::tags;

/// Resolves the REUSE data of single files under one root.
///
/// Tiers are tried in order and the first one with data wins:
/// 1. tags inside the file
/// 2. tags inside `<file>.license`
/// 3. the last matching DEP5 stanza
pub struct Resolver<'a> {
    root: &'a Path,
    dep5: &'a Dep5,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Path, dep5: &'a Dep5) -> Self {
        Self { root, dep5 }
    }

    pub async fn resolve(&self, path: &Path) -> Result<Option<FileResult>, ScanError> {
        if let Some(result) = self.from_file(path, path, ReuseSource::Inline).await? {
            return Ok(Some(result));
        }

        let sidecar = sidecar_path(path);
        if let Some(result) = self.from_file(path, &sidecar, ReuseSource::Sidecar).await? {
            return Ok(Some(result));
        }

        let result = self.dep5.find_under(self.root, path).and_then(|entry| {
            FileResult::new(
                path.to_path_buf(),
                vec![entry.license.clone()],
                entry.copyright.clone(),
                ReuseSource::Dep5,
            )
        });
        if result.is_some() {
            tracing::debug!("{}: resolved from dep5", path.display());
        } else {
            tracing::debug!("{}: no REUSE data", path.display());
        }
        Ok(result)
    }

    async fn from_file(
        &self,
        path: &Path,
        tagged: &Path,
        source: ReuseSource,
    ) -> Result<Option<FileResult>, ScanError> {
        let Some(text) = read_text(tagged).await? else {
            return Ok(None);
        };
        let Some(found) = tags::extract(&text) else {
            return Ok(None);
        };
        tracing::debug!("{}: resolved from {} tags", path.display(), source);
        Ok(FileResult::new(
            path.to_path_buf(),
            found.licenses,
            found.copyrights,
            source,
        ))
    }
}

/// `<path>.license`
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".license");
    PathBuf::from(name)
}

/// Read a file as text, replacing invalid UTF-8. A missing file is `None`.
pub async fn read_text(path: &Path) -> Result<Option<String>, ScanError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ScanError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
