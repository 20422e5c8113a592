//! Re-encoder configuration stored in `reencode.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "reencode.toml";

/// Files rewritten when neither the config file nor the command line names any.
pub const DEFAULT_PATHS: &[&str] = &[
    "README.md",
    "src/types/menu.ts",
    "src/data/menu.json",
    "src/pages/menu.tsx",
];

/// Re-encoder configuration (TOML).
///
/// Missing fields fall back to [`ReencodeConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReencodeConfig {
    /// Files to rewrite, in the order they are processed.
    pub paths: Vec<PathBuf>,

    /// Drop a leading UTF-8 byte-order mark when rewriting.
    pub strip_bom: bool,
}

impl Default for ReencodeConfig {
    fn default() -> Self {
        Self {
            paths: DEFAULT_PATHS.iter().map(PathBuf::from).collect(),
            strip_bom: true,
        }
    }
}

impl ReencodeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            return Err(anyhow!("paths must be a non-empty array"));
        }
        for (index, path) in self.paths.iter().enumerate() {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("paths[{}] must be non-empty", index));
            }
        }
        Ok(())
    }

    /// Path list for a run: command-line paths win over the configured list.
    pub fn resolve_paths(&self, overrides: &[PathBuf]) -> Vec<PathBuf> {
        if overrides.is_empty() {
            self.paths.clone()
        } else {
            overrides.to_vec()
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReencodeConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReencodeConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = ReencodeConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReencodeConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), paths = cfg.paths.len(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ReencodeConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
