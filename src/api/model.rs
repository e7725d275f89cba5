//! NewsAPI response documents
//!
//! Decoding is lenient: unknown fields are ignored and `null` or missing
//! values fall back to `None` or an empty string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Response of `/everything` and `/top-headlines`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(default)]
    pub status: String,

    /// Total number of matches, not the number of articles returned
    #[serde(default)]
    pub total_results: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
}

/// A single article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: ArticleSource,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default)]
    pub url_to_image: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub content: Option<String>,
}

/// Source reference embedded in an article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Response of `/top-headlines/sources`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sources {
    #[serde(default)]
    pub status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
}

/// A news source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub country: Option<String>,
}

/// Error document NewsAPI sends alongside non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
