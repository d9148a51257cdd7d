//! Offline fetcher producing synthetic markup.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;

use xbm_core::{EmbedData, EmbedError, EmbedFetcherPort};

static ITEM_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"twitter\.com/(\w+)/status/(\d+)").expect("valid regex")
});

/// Builds a blockquote from the user and status id found in the URL.
///
/// URLs that do not match fall back to user `unknown` and id `0`; this
/// fetcher never fails.
#[derive(Debug, Clone, Default)]
pub struct MockEmbedFetcher {
    latency: Duration,
}

impl MockEmbedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long before answering.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

fn synthesize(url: &str) -> EmbedData {
    let (user, status) = ITEM_PATH
        .captures(url)
        .map_or(("unknown", "0"), |caps| {
            (
                caps.get(1).map_or("unknown", |m| m.as_str()),
                caps.get(2).map_or("0", |m| m.as_str()),
            )
        });
    let date = chrono::Local::now().format("%Y/%-m/%-d");
    let html = format!(
        r#"<blockquote class="twitter-tweet"><p lang="ja" dir="ltr">This is a mock post. Tweet ID: {status} by @{user}</p>&mdash; {user} (@{user}) <a href="{url}">{date}</a></blockquote>"#
    );
    EmbedData {
        html,
        author_name: user.to_string(),
        url: url.to_string(),
    }
}

#[async_trait]
impl EmbedFetcherPort for MockEmbedFetcher {
    async fn fetch(&self, url: &str) -> Result<EmbedData, EmbedError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(synthesize(url))
    }
}
