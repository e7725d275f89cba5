//! Path utilities for simple-cli-news

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "SIMPLE_CLI_NEWS_CONFIG_DIR";

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Get the config directory
///
/// `SIMPLE_CLI_NEWS_CONFIG_DIR` wins when set and non-empty, otherwise the
/// platform config directory for `canaryprism/simple-cli-news` is used.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    ProjectDirs::from("", "canaryprism", "simple-cli-news")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .context("Failed to determine the config directory (is $HOME set?)")
}

/// Get the config file path
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}
