//! Client for the embed relay.
//!
//! `GET {proxy}?url=<encoded item url>&omit_script=true` returns an oEmbed
//! document; `html` and `author_name` are required.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use xbm_core::{EmbedData, EmbedError, EmbedFetcherPort};

use crate::config::EmbedClientConfig;

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    html: Option<String>,
    author_name: Option<String>,
    url: Option<String>,
}

/// Fetches previews through the configured relay.
pub struct ProxyEmbedFetcher {
    client: reqwest::Client,
    proxy_url: Url,
}

impl ProxyEmbedFetcher {
    pub fn new(config: &EmbedClientConfig) -> Result<Self, EmbedError> {
        let proxy_url = Url::parse(&config.proxy_url).map_err(|e| EmbedError::Unavailable {
            message: format!("invalid proxy URL {}: {e}", config.proxy_url),
        })?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| unavailable(&e))?;
        Ok(Self { client, proxy_url })
    }

    fn request_url(&self, item_url: &str) -> String {
        let base = self.proxy_url.as_str();
        let separator = if self.proxy_url.query().is_some() { '&' } else { '?' };
        format!(
            "{base}{separator}url={}&omit_script=true",
            urlencoding::encode(item_url)
        )
    }
}

fn unavailable(e: &reqwest::Error) -> EmbedError {
    EmbedError::Unavailable {
        message: e.to_string(),
    }
}

/// Interpret a relay response for `requested_url`.
///
/// 404 becomes `NotFound`, any other non-2xx status `Unavailable`. A body
/// that is not JSON, or lacks a non-empty `html` or `author_name`, is
/// `Malformed`. A missing `url` falls back to `requested_url`.
pub fn parse_embed_response(
    requested_url: &str,
    status: u16,
    body: &str,
) -> Result<EmbedData, EmbedError> {
    if status == 404 {
        return Err(EmbedError::NotFound {
            url: requested_url.to_string(),
        });
    }
    if !(200..300).contains(&status) {
        return Err(EmbedError::Unavailable {
            message: format!("relay returned status {status}"),
        });
    }

    let response: EmbedResponse =
        serde_json::from_str(body).map_err(|e| EmbedError::Malformed {
            message: e.to_string(),
        })?;

    let html = response.html.filter(|h| !h.is_empty());
    let author_name = response.author_name.filter(|a| !a.is_empty());
    match (html, author_name) {
        (Some(html), Some(author_name)) => Ok(EmbedData {
            html,
            author_name,
            url: response
                .url
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| requested_url.to_string()),
        }),
        _ => Err(EmbedError::Malformed {
            message: "response lacks html or author_name".to_string(),
        }),
    }
}

#[async_trait]
impl EmbedFetcherPort for ProxyEmbedFetcher {
    async fn fetch(&self, url: &str) -> Result<EmbedData, EmbedError> {
        let request_url = self.request_url(url);
        debug!(target: "xbm.embed", url, "Fetching embed");

        let response = self
            .client
            .get(&request_url)
            .send()
            .await
            .map_err(|e| unavailable(&e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| unavailable(&e))?;

        parse_embed_response(url, status, &body)
    }
}
