use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use indicatif::ProgressBar;

use crate::dep5::Dep5;
use crate::error::ScanError;
use crate::models::FileResult;
use crate::reuse::resolver::{read_text, Resolver};

/// Location of the DEP5 override file, relative to the scan root.
pub const DEP5_PATH: &str = ".reuse/dep5";

/// Load `<root>/.reuse/dep5`. A missing file yields an empty model.
pub async fn load_dep5(root: &Path) -> Result<Dep5, ScanError> {
    let path = root.join(DEP5_PATH);
    let Some(text) = read_text(&path).await? else {
        tracing::debug!("no override file at {}", path.display());
        return Ok(Dep5::default());
    };

    let dep5 = Dep5::parse(&text).map_err(|source| ScanError::Dep5 {
        path: path.clone(),
        source,
    })?;
    tracing::info!(
        "loaded {} override entries from {}",
        dep5.entries().len(),
        path.display()
    );
    Ok(dep5)
}

/// Resolve every file in `files`, at most `jobs` at a time.
///
/// Files without REUSE data are left out. The first I/O error aborts the
/// whole scan. Output follows the order of `files`.
pub async fn resolve_all(
    root: &Path,
    dep5: &Dep5,
    files: &[PathBuf],
    jobs: usize,
    progress: Option<&ProgressBar>,
) -> Result<Vec<FileResult>, ScanError> {
    let resolver = Resolver::new(root, dep5);
    let mut results = Vec::new();

    for batch in files.chunks(jobs.max(1)) {
        let resolved = try_join_all(batch.iter().map(|path| resolver.resolve(path))).await?;
        results.extend(resolved.into_iter().flatten());

        if let Some(pb) = progress {
            pb.inc(batch.len() as u64);
        }
    }

    tracing::info!(
        "{} of {} files carry REUSE data",
        results.len(),
        files.len()
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::lister::list_files;
    use crate::models::ReuseSource;
    use crate::reuse::combiner::combine;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(
            root,
            ".reuse/dep5",
            "Format: https://www.debian.org/doc/packaging-manuals/copyright-format/1.0/\n\n\
             Files: *\nCopyright: 2024 A\nLicense: MIT\n\n\
             Files: vendor/*\nCopyright: 2019 Vendor\nLicense: Apache-2.0\n",
        );
        write(root, "LICENSES/MIT.txt", "MIT License text");
        write(
            root,
            "src/main.rs",
            "// SPDX-FileCopyrightText: 2024 A\n// SPDX-License-Identifier: MIT\n",
        );
        write(root, "logo.png", "\u{89}PNG");
        write(
            root,
            "logo.png.license",
            "SPDX-FileCopyrightText: 2022 Designer\nSPDX-License-Identifier: CC-BY-4.0\n",
        );
        write(root, "vendor/x.c", "int x;\n");
        dir
    }

    async fn scan(root: &Path, jobs: usize) -> Vec<FileResult> {
        let files = list_files(root, &ScanConfig::default()).unwrap();
        let dep5 = load_dep5(root).await.unwrap();
        resolve_all(root, &dep5, &files, jobs, None).await.unwrap()
    }

    #[tokio::test]
    async fn test_missing_dep5_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_dep5(dir.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dep5_with_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            ".reuse/dep5",
            "\u{feff}Files: *\nCopyright: 2024 A\nLicense: MIT\n",
        );
        let dep5 = load_dep5(dir.path()).await.unwrap();
        assert_eq!(dep5.entries().len(), 1);
        assert_eq!(dep5.find(Path::new("a.c")).unwrap().license, "MIT");
    }

    #[tokio::test]
    async fn test_malformed_dep5_aborts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), ".reuse/dep5", "Files: *\n orphan ok\nno separator\n");
        let err = load_dep5(dir.path()).await.unwrap_err();
        assert!(matches!(err, ScanError::Dep5 { .. }));
    }

    #[tokio::test]
    async fn test_full_scan() {
        let dir = fixture();
        let root = dir.path();
        let results = scan(root, 2).await;

        let find = |rel: &str| {
            results
                .iter()
                .find(|r| r.path == root.join(rel))
                .unwrap_or_else(|| panic!("no result for {}", rel))
        };

        assert_eq!(find("src/main.rs").source, ReuseSource::Inline);
        assert_eq!(find("logo.png").source, ReuseSource::Sidecar);
        assert_eq!(find("logo.png").license_identifiers, vec!["CC-BY-4.0"]);
        assert_eq!(find("vendor/x.c").source, ReuseSource::Dep5);
        assert_eq!(find("vendor/x.c").license_identifiers, vec!["Apache-2.0"]);
        assert!(results
            .iter()
            .all(|r| !r.path.starts_with(root.join("LICENSES"))));

        let combined = combine(root, &results);
        assert_eq!(
            combined.copyright_statements.iter().filter(|c| *c == "2024 A").count(),
            1
        );
    }

    #[tokio::test]
    async fn test_scan_is_idempotent_and_width_independent() {
        let dir = fixture();
        let root = dir.path();

        let first = combine(root, &scan(root, 1).await);
        let second = combine(root, &scan(root, 64).await);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_zero_jobs_is_clamped() {
        let dir = fixture();
        let root = dir.path();
        assert_eq!(scan(root, 0).await, scan(root, 8).await);
    }

    #[tokio::test]
    async fn test_unreadable_file_aborts_scan() {
        let dir = fixture();
        let root = dir.path();
        let dep5 = load_dep5(root).await.unwrap();
        // A directory passed as a file fails to read with a non-NotFound error.
        let files = vec![root.join("src/main.rs"), root.join("vendor")];
        let err = resolve_all(root, &dep5, &files, 4, None).await.unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }
}
