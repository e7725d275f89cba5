//! Request descriptions for the NewsAPI endpoints
//!
//! A request only knows how to turn itself into a URL; sending it is the
//! job of [`super::NewsClient`].

use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use reqwest::Url;

/// Default number of articles per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size NewsAPI accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Headline categories supported by `/top-headlines`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which article endpoint to query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `/everything`, optionally limited to articles published since `from`
    Everything { from: Option<DateTime<Utc>> },

    /// `/top-headlines`
    Headlines {
        country: Option<String>,
        category: Option<Category>,
    },
}

impl Endpoint {
    fn path(&self) -> &'static str {
        match self {
            Endpoint::Everything { .. } => "everything",
            Endpoint::Headlines { .. } => "top-headlines",
        }
    }
}

/// Request for articles
#[derive(Debug, Clone)]
pub struct NewsRequest {
    pub endpoint: Endpoint,
    pub apikey: String,
    /// Comma-separated source ids
    pub sources: Option<String>,
    pub query: Option<String>,
    pub page_size: u32,
    pub language: String,
}

impl NewsRequest {
    /// Build the full request URL below `base`
    pub fn url(&self, base: &Url) -> Url {
        let mut url = join(base, self.endpoint.path());

        {
            let mut pairs = url.query_pairs_mut();

            match &self.endpoint {
                Endpoint::Everything { from } => {
                    if let Some(from) = from {
                        pairs.append_pair("from", &from.format("%Y-%m-%d").to_string());
                    }
                }
                Endpoint::Headlines { country, category } => {
                    if let Some(country) = country {
                        pairs.append_pair("country", country);
                    }
                    if let Some(category) = category {
                        pairs.append_pair("category", category.as_str());
                    }
                }
            }

            if let Some(query) = &self.query {
                pairs.append_pair("q", query);
            }
            if let Some(sources) = &self.sources {
                pairs.append_pair("sources", sources);
            }

            pairs
                .append_pair("language", &self.language)
                .append_pair("pageSize", &self.page_size.to_string())
                .append_pair("apikey", &self.apikey);
        }

        url
    }
}

/// Request for the list of available sources
#[derive(Debug, Clone)]
pub struct SourcesRequest {
    pub apikey: String,
    pub country: Option<String>,
}

impl SourcesRequest {
    /// Build the full request URL below `base`
    pub fn url(&self, base: &Url) -> Url {
        let mut url = join(base, "top-headlines/sources");

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.apikey);
            if let Some(country) = &self.country {
                pairs.append_pair("country", country);
            }
        }

        url
    }
}

/// Append `path` to `base`, treating `base` as a directory
fn join(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    let prefix = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{}/{}", prefix, path));
    url
}
