//! Input validation applied before anything reaches the store.
//!
//! Item URLs:
//! - `x.com`, `www.x.com` and `www.twitter.com` are rewritten to `twitter.com`
//! - After rewriting, the host must be `twitter.com` and the path must start
//!   with `/<user>/status/<digits>`
//!
//! Tag names:
//! - Surrounding whitespace is trimmed
//! - Must not be empty
//! - Must not contain the tag delimiter (`,`)

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::table::TAG_DELIMITER;

const CANONICAL_HOST: &str = "twitter.com";
const ALIAS_HOSTS: [&str; 3] = ["x.com", "www.x.com", "www.twitter.com"];

static STATUS_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/[A-Za-z0-9_]+/status/[0-9]+").expect("valid regex")
});

/// Malformed input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input: {reason}")]
pub struct ValidationError {
    pub reason: String,
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Rewrite alias hosts to the canonical host.
///
/// Input that does not parse as a URL is returned trimmed but otherwise
/// untouched; `validate_item_url` rejects it.
pub fn normalize_item_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let Ok(mut parsed) = Url::parse(trimmed) else {
        return trimmed.to_string();
    };
    let is_alias = parsed
        .host_str()
        .is_some_and(|host| ALIAS_HOSTS.contains(&host));
    if is_alias && parsed.set_host(Some(CANONICAL_HOST)).is_err() {
        return trimmed.to_string();
    }
    parsed.to_string()
}

/// Normalize and validate an item URL, returning the canonical form.
pub fn validate_item_url(raw: &str) -> Result<String, ValidationError> {
    let normalized = normalize_item_url(raw);
    let parsed = Url::parse(&normalized)
        .map_err(|e| ValidationError::new(format!("not a URL ({e}): {}", raw.trim())))?;

    if parsed.host_str() != Some(CANONICAL_HOST) {
        return Err(ValidationError::new(format!(
            "unsupported host: {}",
            parsed.host_str().unwrap_or("")
        )));
    }
    if !STATUS_PATH.is_match(parsed.path()) {
        return Err(ValidationError::new(format!(
            "not a status URL: {}",
            parsed.path()
        )));
    }
    Ok(normalized)
}

/// Validate a new tag name, returning it trimmed.
///
/// Uniqueness against live tags is checked by the caller, which owns the
/// current tag list.
pub fn validate_tag_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::new("tag name is empty"));
    }
    if name.contains(TAG_DELIMITER) {
        return Err(ValidationError::new(format!(
            "tag name must not contain '{TAG_DELIMITER}': {name}"
        )));
    }
    Ok(name.to_string())
}
