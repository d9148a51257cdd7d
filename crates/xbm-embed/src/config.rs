//! Configuration for the relay client.

use std::time::Duration;

/// Configuration for `ProxyEmbedFetcher`.
///
/// # Example
///
/// ```
/// use xbm_embed::EmbedClientConfig;
/// use std::time::Duration;
///
/// let config = EmbedClientConfig::new("https://embed.example.workers.dev")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct EmbedClientConfig {
    pub(crate) proxy_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl EmbedClientConfig {
    #[must_use]
    pub fn new(proxy_url: impl Into<String>) -> Self {
        Self {
            proxy_url: proxy_url.into(),
            user_agent: concat!("xbm-embed/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Defaults to 15 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }
}
