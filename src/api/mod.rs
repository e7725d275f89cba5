//! NewsAPI v2 access
//!
//! [`request`] describes what to ask for, [`client`] sends it and
//! [`model`] holds the decoded documents.

pub mod client;
pub mod model;
pub mod request;

pub use client::{NewsClient, DEFAULT_BASE_URL};
pub use model::{Article, Source};
pub use request::{Category, Endpoint, NewsRequest, SourcesRequest};
