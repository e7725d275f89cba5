//! Config command - Inspect the stored configuration
//!
//! Usage:
//!   simple-cli-news config show   # Print path, masked api key and language
//!   simple-cli-news config path   # Print the config file path

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use super::Session;

/// Inspect the stored configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Print the config file path
    Path,
}

impl ConfigCommand {
    /// Execute the config command
    pub fn execute(self, session: &Session) -> Result<()> {
        match self.action {
            ConfigAction::Show => {
                let config = &session.config;
                let apikey = if config.has_apikey() {
                    config.masked_apikey()
                } else {
                    style("<not set>").red().to_string()
                };

                println!("Config:   {}", session.config_path.display());
                println!("Api key:  {}", apikey);
                println!("Language: {}", config.language);
            }
            ConfigAction::Path => println!("{}", session.config_path.display()),
        }

        Ok(())
    }
}
