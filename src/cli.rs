//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use reqwest::Url;

use crate::api::DEFAULT_BASE_URL;
use crate::commands::{config::ConfigCommand, list::ListCommand, news::NewsArgs, Session};
use crate::utils::terminal;

/// simple-cli-news - NewsAPI headlines in your terminal
///
/// Without a subcommand, prints the current top headlines. Use --query or
/// --source to search recent articles instead.
#[derive(Parser, Debug)]
#[command(name = "simple-cli-news")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Prints version information and then exits
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// NewsAPI base URL
    #[arg(
        long,
        global = true,
        hide = true,
        env = "NEWSAPI_URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = parse_api_url
    )]
    pub api_url: Url,

    #[command(flatten)]
    pub news: NewsArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List possible args for various commands
    List(ListCommand),

    /// Inspect the stored configuration
    Config(ConfigCommand),
}

impl Cli {
    /// Parse the process arguments, exiting with a usage error on bad input
    pub fn parse_args() -> Self {
        let cli = Self::parse();
        if let Err(e) = cli.check_subcommand_args() {
            e.exit();
        }
        cli
    }

    /// Reject news options given alongside a subcommand, which would ignore them
    fn check_subcommand_args(&self) -> Result<(), clap::Error> {
        match (&self.command, self.news.first_given_option()) {
            (Some(_), Some(option)) => Err(Self::command().error(
                ErrorKind::ArgumentConflict,
                format!("'{}' cannot be used with a subcommand", option),
            )),
            _ => Ok(()),
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            terminal::disable_colors();
        }

        let session = Session::load(self.api_url)?;

        match self.command {
            Some(Commands::List(cmd)) => cmd.execute(&session),
            Some(Commands::Config(cmd)) => cmd.execute(&session),
            None => self.news.execute(session),
        }
    }
}

/// Parse the API base URL, treating an empty value as unset
fn parse_api_url(value: &str) -> Result<Url, String> {
    let value = value.trim();
    let value = if value.is_empty() { DEFAULT_BASE_URL } else { value };
    Url::parse(value).map_err(|e| e.to_string())
}
