use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What a multi-page run does when one page fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Record the failed page and keep going with the rest of the chunk.
    #[default]
    Continue,
    /// Stop every worker before its next page once any page has failed.
    FailFast,
}

/// Global configuration loaded from `~/.config/pagefetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagefetchConfig {
    /// Extension used for multi-page downloads when `--format` is not given.
    pub default_extension: String,
    /// Connect timeout in seconds for each GET.
    pub connect_timeout_secs: u64,
    /// Optional total transfer timeout in seconds (None = wait as long as the server takes).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Worker count for multi-page runs (None = available parallelism).
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default)]
    pub error_policy: ErrorPolicy,
}

impl Default for PagefetchConfig {
    fn default() -> Self {
        Self {
            default_extension: "jpg".to_string(),
            connect_timeout_secs: 30,
            timeout_secs: None,
            workers: None,
            error_policy: ErrorPolicy::Continue,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagefetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, writing the defaults there if the file is missing.
pub fn load_or_init_at(path: &Path) -> Result<PagefetchConfig> {
    if !path.exists() {
        let default_cfg = PagefetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: PagefetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagefetchConfig> {
    load_or_init_at(&config_path()?)
}
