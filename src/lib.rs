pub use crate::document::SolrDocument;
pub use crate::response::*;

pub mod document;
pub mod http;
pub mod param;
pub mod query;
pub mod response;
pub mod update;

#[derive(Debug, thiserror::Error)]
pub enum SolrError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("Reqwest error: {0}")]
    Reqwest(reqwest::Error),
    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Solr error {code}: {msg}")]
    Api { code: u16, msg: String },
    #[error("Empty query: {0}")]
    EmptyQuery(String),
}

pub type Result<T> = std::result::Result<T, SolrError>;
