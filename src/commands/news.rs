//! News command - Print headlines or search results
//!
//! Usage:
//!   simple-cli-news                          # Top headlines
//!   simple-cli-news -c us --category sports  # Filtered headlines
//!   simple-cli-news -q <keyword>             # Articles from the last 10 days
//!   simple-cli-news -s <source-id>           # Articles from a source
//!   simple-cli-news -a <apikey>              # Store the api key
//!   simple-cli-news -l <language>            # Store the default language

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Args;
use console::style;
use tracing::debug;

use super::Session;
use crate::api::request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::api::{Article, Category, Endpoint, NewsRequest};
use crate::utils::terminal;

/// How far back `/everything` searches go
pub const SEARCH_WINDOW_DAYS: i64 = 10;

/// Options of the default (headlines/search) action
#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Update the config with an api key from NewsApi
    #[arg(short = 'a', long, visible_alias = "key", value_name = "APIKEY")]
    pub apikey: Option<String>,

    /// Search news from the past 10 days
    #[arg(short = 'q', long, visible_alias = "search")]
    pub query: Option<String>,

    /// Get news from a certain source with its ID
    #[arg(short = 's', long, value_name = "ID")]
    pub source: Option<String>,

    /// Set how many articles should be displayed
    #[arg(
        short = 'p',
        long,
        visible_aliases = ["pagesize", "pgsize", "pg-size", "page_size"],
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64)
    )]
    pub page_size: u32,

    /// Set the default language
    #[arg(short = 'l', long, visible_alias = "lang")]
    pub language: Option<String>,

    /// Headlines from a country using its 2-letter ISO code
    #[arg(short = 'c', long, conflicts_with_all = ["query", "source"])]
    pub country: Option<String>,

    /// Headlines from a category
    #[arg(long, value_enum, conflicts_with_all = ["query", "source"])]
    pub category: Option<Category>,
}

impl NewsArgs {
    /// Execute the default action
    pub fn execute(self, mut session: Session) -> Result<()> {
        if self.apikey.is_some() || self.language.is_some() {
            return self.update_config(&mut session);
        }

        let request = self.build_request(&session)?;
        let client = session.client()?;

        let spinner = terminal::create_spinner("Fetching articles...");
        let result = client.news(&request);
        spinner.finish_and_clear();

        let news = result.context("Failed to fetch articles")?;
        debug!(total = news.total_results, shown = news.articles.len(), "fetched articles");

        if news.articles.is_empty() {
            println!("{}", style("Failed to find any articles").red());
            return Ok(());
        }

        for article in &news.articles {
            println!("{}", render_article(article));
        }

        Ok(())
    }

    /// The first option given on the command line, as its long flag
    pub fn first_given_option(&self) -> Option<&'static str> {
        [
            ("--apikey", self.apikey.is_some()),
            ("--query", self.query.is_some()),
            ("--source", self.source.is_some()),
            ("--page-size", self.page_size != DEFAULT_PAGE_SIZE),
            ("--language", self.language.is_some()),
            ("--country", self.country.is_some()),
            ("--category", self.category.is_some()),
        ]
        .into_iter()
        .find_map(|(flag, given)| given.then_some(flag))
    }

    /// Store the api key and/or language, then stop
    fn update_config(&self, session: &mut Session) -> Result<()> {
        if let Some(ref apikey) = self.apikey {
            session.config.set_apikey(apikey.trim());
        }
        if let Some(ref language) = self.language {
            session.config.set_language(language.trim());
        }

        session.config.write(&session.config_path)?;

        if self.apikey.is_some() {
            terminal::print_success("Saved api key");
        }
        if let Some(ref language) = self.language {
            terminal::print_success(&format!("Default language set to '{}'", language.trim()));
        }

        Ok(())
    }

    /// Pick the endpoint and assemble the request
    fn build_request(&self, session: &Session) -> Result<NewsRequest> {
        let apikey = session.apikey()?;

        let endpoint = if self.query.is_some() || self.source.is_some() {
            Endpoint::Everything {
                from: Some(Utc::now() - Duration::days(SEARCH_WINDOW_DAYS)),
            }
        } else {
            Endpoint::Headlines {
                country: self.country.clone(),
                category: self.category,
            }
        };

        Ok(NewsRequest {
            endpoint,
            apikey: apikey.to_string(),
            sources: self.source.clone(),
            query: self.query.clone(),
            page_size: self.page_size,
            language: session.config.language.clone(),
        })
    }
}

/// Format an article as a blank line, the title and its link
pub fn render_article(article: &Article) -> String {
    format!(
        "\n{}\n{}",
        style(&article.title).yellow(),
        style(format!(">>> {}", article.url)).blue()
    )
}
