//! Content-embed fetchers.
//!
//! - `ProxyEmbedFetcher` asks an HTTP relay for embeddable markup
//! - `MockEmbedFetcher` synthesizes markup from the URL without any I/O
//!
//! Both implement `xbm_core::EmbedFetcherPort`.

#![deny(unused_crate_dependencies)]

mod config;
mod mock;
mod proxy;

pub use config::EmbedClientConfig;
pub use mock::MockEmbedFetcher;
pub use proxy::{ProxyEmbedFetcher, parse_embed_response};
