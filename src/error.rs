//! Error types and helpers for user-friendly error messages
//!
//! Every variant that the user can fix themselves carries a hint that is
//! printed below the error by [`NewsError::display_with_hints`].

use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while talking to NewsAPI or handling the local config
#[derive(Error, Debug)]
pub enum NewsError {
    /// No API key has been stored yet
    #[error("No NewsAPI key configured")]
    MissingApiKey { hint: String },

    /// NewsAPI rejected the key (HTTP 401)
    #[error("Apikey is invalid")]
    InvalidApiKey { hint: String },

    /// NewsAPI answered with an error document or a non-success status
    #[error("NewsAPI error ({code}): {message}")]
    Api {
        code: String,
        message: String,
        hint: Option<String>,
    },

    /// Transport-level failure
    #[error("Request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the document we expected
    #[error("Failed to parse NewsAPI response")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the config file failed
    #[error("Configuration error for {}: {message}", .path.display())]
    Config {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl NewsError {
    /// Create a missing api key error
    pub fn missing_api_key() -> Self {
        Self::MissingApiKey {
            hint: hints::set_api_key().to_string(),
        }
    }

    /// Create an invalid api key error
    pub fn invalid_api_key() -> Self {
        Self::InvalidApiKey {
            hint: hints::set_api_key().to_string(),
        }
    }

    /// Create an API error, attaching a hint for codes the user can act on
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let hint = hints::for_api_code(&code).map(str::to_string);
        Self::Api {
            code,
            message: message.into(),
            hint,
        }
    }

    /// Create a config error
    pub fn config(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// The hint shown below the error, if any
    pub fn hint(&self) -> Option<&str> {
        match self {
            NewsError::MissingApiKey { hint } | NewsError::InvalidApiKey { hint } => Some(hint),
            NewsError::Api { hint, .. } => hint.as_deref(),
            NewsError::Http { .. } => Some(hints::network()),
            NewsError::Decode { .. } | NewsError::Config { .. } => None,
        }
    }

    /// Format the error, its causes and hint
    ///
    /// `context` is the message of an outer layer wrapping this error, shown
    /// first with this error as its cause.
    pub fn render_with_hints(&self, context: Option<&str>) -> String {
        use console::style;

        let mut out = String::new();
        match context {
            Some(context) => {
                out.push_str(&format!("\n{} {}\n", style("ERROR:").red().bold(), context));
                out.push_str(&format!("  {} {}\n", style("caused by:").dim(), self));
            }
            None => out.push_str(&format!("\n{} {}\n", style("ERROR:").red().bold(), self)),
        }

        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str(&format!("  {} {}\n", style("caused by:").dim(), cause));
            source = cause.source();
        }

        if let Some(hint) = self.hint() {
            out.push_str(&format!("\n{} {}\n", style("HINT:").yellow().bold(), hint));
        }

        out
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self, context: Option<&str>) {
        eprintln!("{}", self.render_with_hints(context));
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for a missing or rejected api key
    pub fn set_api_key() -> &'static str {
        "Please set a valid apikey with 'simple-cli-news -a [apikey from newsapi.org]'"
    }

    /// Get hint for transport failures
    pub fn network() -> &'static str {
        "Check your network connection. If you use a proxy, make sure\n\
         HTTPS_PROXY is set. A custom endpoint can be set with NEWSAPI_URL."
    }

    /// Get hint for a NewsAPI error code
    pub fn for_api_code(code: &str) -> Option<&'static str> {
        match code {
            "apiKeyDisabled" | "apiKeyExhausted" | "apiKeyInvalid" | "apiKeyMissing" => {
                Some(set_api_key())
            }
            "rateLimited" => Some(
                "You have been rate limited. The free NewsAPI plan allows\n\
                 100 requests per day; try again later.",
            ),
            "sourcesTooMany" => Some("Request at most 20 sources at a time."),
            "sourceDoesNotExist" => Some(
                "Unknown source id. List valid ids with 'simple-cli-news list sources'.",
            ),
            "parametersIncompatible" => Some(
                "--country and --category cannot be mixed with --source.",
            ),
            _ => None,
        }
    }
}
