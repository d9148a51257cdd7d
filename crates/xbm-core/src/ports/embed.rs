//! Content-embed fetcher port.

use async_trait::async_trait;
use thiserror::Error;

/// Embeddable preview of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedData {
    pub html: String,
    pub author_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    #[error("Item not found: {url}")]
    NotFound { url: String },

    #[error("Malformed embed response: {message}")]
    Malformed { message: String },

    #[error("Embed service unavailable: {message}")]
    Unavailable { message: String },
}

/// Fetches a rich preview for a normalized item URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbedFetcherPort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<EmbedData, EmbedError>;
}
