//! Persistent user configuration
//!
//! The config is a small JSON document stored in the platform config
//! directory (see [`crate::utils::paths::config_file`]):
//!
//! ```json
//! {
//!   "apikey": "0123456789abcdef",
//!   "language": "en"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::NewsError;
use crate::utils::paths::ensure_dir;

/// Language used when nothing has been configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// User configuration stored in `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// NewsAPI key
    pub apikey: String,

    /// Language articles are requested in
    pub language: String,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            apikey: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl NewsConfig {
    /// Read the config, returning `None` if it is missing or unreadable
    pub fn read(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no config loaded");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unparsable config");
                None
            }
        }
    }

    /// Read the config or fall back to defaults
    pub fn load(path: &Path) -> Self {
        Self::read(path).unwrap_or_default()
    }

    /// Write the config, creating parent directories as needed
    pub fn write(&self, path: &Path) -> Result<(), NewsError> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)
                .map_err(|e| NewsError::config(path, "Failed to create config directory", Some(e)))?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            NewsError::config(path, "Failed to serialize config", Some(e.into()))
        })?;
        fs::write(path, content)
            .map_err(|e| NewsError::config(path, "Failed to write config", Some(e.into())))?;

        debug!(path = %path.display(), "config written");
        Ok(())
    }

    pub fn set_apikey(&mut self, apikey: impl Into<String>) -> &mut Self {
        self.apikey = apikey.into();
        self
    }

    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = language.into();
        self
    }

    /// Whether a non-blank api key is stored
    pub fn has_apikey(&self) -> bool {
        !self.apikey.trim().is_empty()
    }

    /// The api key with everything past the first four characters masked
    pub fn masked_apikey(&self) -> String {
        self.apikey
            .chars()
            .enumerate()
            .map(|(i, c)| if i < 4 { c } else { '*' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NewsConfig::default();
        assert_eq!(config.apikey, "");
        assert_eq!(config.language, "en");
        assert!(!config.has_apikey());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let mut config = NewsConfig::default();
        config.set_apikey("abc123").set_language("de");
        config.write(&path).unwrap();

        let read = NewsConfig::read(&path).unwrap();
        assert_eq!(read, config);
        assert!(read.has_apikey());
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        assert!(NewsConfig::read(&path).is_none());
        assert_eq!(NewsConfig::load(&path), NewsConfig::default());
    }

    #[test]
    fn test_read_corrupt_file_falls_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(NewsConfig::read(&path).is_none());
        assert_eq!(NewsConfig::load(&path).language, "en");
    }

    #[test]
    fn test_partial_and_unknown_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"apikey":"k","theme":"dark"}"#).unwrap();

        let config = NewsConfig::read(&path).unwrap();
        assert_eq!(config.apikey, "k");
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_masked_apikey() {
        let mut config = NewsConfig::default();
        config.set_apikey("abcdefgh");
        assert_eq!(config.masked_apikey(), "abcd****");

        config.set_apikey("ab");
        assert_eq!(config.masked_apikey(), "ab");
    }

    #[test]
    fn test_blank_apikey_is_missing() {
        let mut config = NewsConfig::default();
        config.set_apikey("   ");
        assert!(!config.has_apikey());
    }
}
