//! List command - List possible args for various commands
//!
//! Usage:
//!   simple-cli-news list sources              # All sources
//!   simple-cli-news list sources --country us # Sources from one country

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;

use super::Session;
use crate::api::{Source, SourcesRequest};
use crate::utils::terminal;

/// List possible args for various commands
#[derive(Args, Debug)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

/// List subcommands
#[derive(Subcommand, Debug)]
pub enum ListAction {
    /// List possible sources
    Sources(SourcesArgs),
}

#[derive(Args, Debug)]
pub struct SourcesArgs {
    /// List sources from a country using its 2-Digit ISO code
    #[arg(short = 'c', long, visible_alias = "location")]
    pub country: Option<String>,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(self, session: &Session) -> Result<()> {
        match self.action {
            ListAction::Sources(args) => args.execute(session),
        }
    }
}

impl SourcesArgs {
    fn execute(self, session: &Session) -> Result<()> {
        let request = SourcesRequest {
            apikey: session.apikey()?.to_string(),
            country: self.country,
        };
        let client = session.client()?;

        let spinner = terminal::create_spinner("Fetching sources...");
        let result = client.sources(&request);
        spinner.finish_and_clear();

        let sources = result.context("Failed to fetch sources")?.sources;

        if sources.is_empty() {
            println!("{}", style("Failed to find any sources").red());
            return Ok(());
        }

        for source in &sources {
            println!("{}", render_source(source));
        }

        Ok(())
    }
}

/// Format a source as its name, description and id followed by a blank line
pub fn render_source(source: &Source) -> String {
    format!(
        "{}\n{}\n{}\n",
        style(&source.name).green().bold(),
        style(&source.description).yellow(),
        style(&source.id).yellow()
    )
}
