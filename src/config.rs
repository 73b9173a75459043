use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.reuse-checkr/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Scan behaviour.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Controls which files are scanned and how many are read at once.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Number of files resolved concurrently. Defaults to `64`.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
    /// Skip paths matched by the root `.gitignore`. Defaults to `true`.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
    /// Extra root-relative globs to leave out of the scan.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_jobs() -> usize {
    64
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            jobs: default_jobs(),
            respect_gitignore: true,
            exclude: Vec::new(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.reuse-checkr/config.toml`
/// 3. `~/.config/reuse-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".reuse-checkr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("reuse-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}
