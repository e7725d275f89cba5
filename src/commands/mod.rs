//! Command implementations
//!
//! Each command module provides a clap-derived struct and execute method.

pub mod config;
pub mod list;
pub mod news;

use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::debug;

use crate::api::NewsClient;
use crate::config::NewsConfig;
use crate::error::NewsError;
use crate::utils::paths;

/// State shared by all commands of one invocation
#[derive(Debug)]
pub struct Session {
    /// Location of `config.json`
    pub config_path: PathBuf,

    /// Config as loaded at startup
    pub config: NewsConfig,

    /// NewsAPI base URL
    pub api_url: Url,
}

impl Session {
    /// Resolve the config path and load the config
    pub fn load(api_url: Url) -> Result<Self> {
        let config_path = paths::config_file()?;
        let config = NewsConfig::load(&config_path);
        debug!(path = %config_path.display(), language = %config.language, "loaded config");

        Ok(Self {
            config_path,
            config,
            api_url,
        })
    }

    /// The stored api key, or an error telling the user how to set one
    pub fn apikey(&self) -> Result<&str, NewsError> {
        if self.config.has_apikey() {
            Ok(self.config.apikey.trim())
        } else {
            Err(NewsError::missing_api_key())
        }
    }

    /// Build a client for the configured endpoint
    pub fn client(&self) -> Result<NewsClient> {
        NewsClient::new(self.api_url.clone()).context("Failed to create HTTP client")
    }
}
