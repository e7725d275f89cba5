//! simple-cli-news - NewsAPI headlines in your terminal
//!
//! Prints top headlines or recent search results from
//! [NewsAPI](https://newsapi.org) and lists the sources it knows about.
//!
//! ## Architecture
//!
//! ```text
//! cli.rs → commands/ → api/ (reqwest + serde_json)
//!                    → config.rs (directories + serde_json)
//! ```

mod api;
mod cli;
mod commands;
mod config;
mod error;
mod utils;

use std::process::ExitCode;

use console::style;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::NewsError;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<NewsError>() {
                Some(news_error) => {
                    // The outermost message is the command's context when one was attached
                    let outer = err.to_string();
                    let context = (outer != news_error.to_string()).then_some(outer.as_str());
                    news_error.display_with_hints(context);
                }
                None => eprintln!("\n{} {:#}\n", style("ERROR:").red().bold(), err),
            }
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing subscriber, honouring RUST_LOG when set
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
