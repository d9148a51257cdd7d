//! HTTP backend abstraction for the Sheets and Drive APIs.
//!
//! The store builds `ApiRequest`s and hands them to an `HttpBackend`. The
//! production backend uses reqwest and resends idempotent requests on
//! transient failures with exponential backoff.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::SheetsClientConfig;
use crate::error::{SheetsError, SheetsResult};

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        })
    }
}

/// One API round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
    /// Safe to resend: reads and overwriting writes. Appends and creates
    /// are not.
    pub idempotent: bool,
}

impl ApiRequest {
    pub const fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
            idempotent: true,
        }
    }

    pub const fn put(url: Url, body: Value) -> Self {
        Self {
            method: Method::Put,
            url,
            body: Some(body),
            idempotent: true,
        }
    }

    /// A POST that is safe to resend (range clear).
    pub const fn post_idempotent(url: Url, body: Option<Value>) -> Self {
        Self {
            method: Method::Post,
            url,
            body,
            idempotent: true,
        }
    }

    /// A POST that must be sent at most once (append, create).
    pub const fn post_once(url: Url, body: Value) -> Self {
        Self {
            method: Method::Post,
            url,
            body: Some(body),
            idempotent: false,
        }
    }

    pub const fn is_write(&self) -> bool {
        !matches!(self.method, Method::Get)
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Executes API requests and returns the decoded JSON body.
///
/// Non-success responses surface as `SheetsError::Api { status, body }`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> SheetsResult<Value>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
pub struct ReqwestBackend {
    client: reqwest::Client,
    token: String,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    pub fn new(config: &SheetsClientConfig, token: impl Into<String>) -> SheetsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    fn build_request(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let url = request.url.as_str();
        let builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
        };
        let builder = builder.bearer_auth(&self.token);
        match request.body {
            Some(ref body) => builder.json(body),
            None => builder,
        }
    }

    async fn send_once(&self, request: &ApiRequest) -> SheetsResult<Value> {
        let response = self.build_request(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Delay before retry `attempt` (1-based); saturates instead of overflowing.
    fn backoff(&self, attempt: u8) -> Duration {
        let factor = 2u32.saturating_pow(u32::from(attempt.saturating_sub(1)));
        self.retry_base_delay.saturating_mul(factor)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: &ApiRequest) -> SheetsResult<Value> {
        let max_retries = if request.idempotent { self.max_retries } else { 0 };
        let mut attempt = 0u8;

        loop {
            if attempt > 0 {
                tokio::time::sleep(self.backoff(attempt)).await;
            }

            debug!(target: "xbm.sheets", method = %request.method, url = %request.url, attempt, "Sending request");
            match self.send_once(request).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < max_retries => {
                    attempt += 1;
                    warn!(
                        target: "xbm.sheets",
                        method = %request.method,
                        url = %request.url,
                        attempt,
                        max_retries,
                        error = %err,
                        "Transient failure, retrying"
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }
}
