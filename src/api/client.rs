//! Blocking NewsAPI client

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::model::{ApiErrorBody, News, Sources};
use super::request::{NewsRequest, SourcesRequest};
use crate::error::NewsError;

/// NewsAPI base URL
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

/// Client for the NewsAPI v2 endpoints
pub struct NewsClient {
    http: Client,
    base_url: Url,
}

impl NewsClient {
    /// Create a client talking to `base_url`
    pub fn new(base_url: Url) -> Result<Self, NewsError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("simple-cli-news/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewsError::Http {
                url: base_url.to_string(),
                source: e,
            })?;

        Ok(Self { http, base_url })
    }

    /// Fetch articles
    pub fn news(&self, request: &NewsRequest) -> Result<News, NewsError> {
        self.get(request.url(&self.base_url))
    }

    /// Fetch the list of sources
    pub fn sources(&self, request: &SourcesRequest) -> Result<Sources, NewsError> {
        self.get(request.url(&self.base_url))
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, NewsError> {
        debug!(endpoint = url.path(), "sending request");

        let http_error = |source: reqwest::Error| NewsError::Http {
            url: redact(&url),
            source: source.without_url(),
        };

        let response = self.http.get(url.clone()).send().map_err(http_error)?;
        let status = response.status();
        let body = response.text().map_err(http_error)?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");
        decode_response(status, &body)
    }
}

/// Turn a raw response into the expected document or a typed error
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, NewsError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(NewsError::invalid_api_key());
    }

    let error_body = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .filter(|b| b.status == "error");

    if !status.is_success() || error_body.is_some() {
        let (code, message) = match error_body {
            Some(b) => (
                b.code.unwrap_or_else(|| status.as_u16().to_string()),
                b.message.unwrap_or_default(),
            ),
            None => (
                status.as_u16().to_string(),
                status.canonical_reason().unwrap_or("Unknown status").to_string(),
            ),
        };
        return Err(NewsError::api(code, message));
    }

    serde_json::from_str(body).map_err(|e| NewsError::Decode { source: e })
}

/// The URL with the api key removed, safe to show in error messages
fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
