//! Public configuration for the spreadsheet store.

use std::time::Duration;

use xbm_core::StoreId;

/// Default Sheets v4 endpoint.
pub const DEFAULT_SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
/// Default Drive v3 files endpoint.
pub const DEFAULT_DRIVE_URL: &str = "https://www.googleapis.com/drive/v3/files";
/// Well-known title used to find an existing store.
pub const DEFAULT_TITLE: &str = "X Bookmark Manager";

/// Configuration for `SheetsStore`.
///
/// # Example
///
/// ```
/// use xbm_sheets::SheetsClientConfig;
/// use std::time::Duration;
///
/// let config = SheetsClientConfig::new()
///     .with_token("ya29.token")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct SheetsClientConfig {
    pub(crate) sheets_url: String,
    pub(crate) drive_url: String,
    pub(crate) title: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    /// Bearer credential sent with every request
    pub(crate) token: Option<String>,
    /// Identity of a previously initialised store, if known
    pub(crate) store_id: Option<StoreId>,
    /// Retry attempts for idempotent calls
    pub(crate) max_retries: u8,
    pub(crate) retry_base_delay: Duration,
}

impl Default for SheetsClientConfig {
    fn default() -> Self {
        Self {
            sheets_url: DEFAULT_SHEETS_URL.to_string(),
            drive_url: DEFAULT_DRIVE_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            user_agent: concat!("xbm-sheets/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
            store_id: None,
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl SheetsClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults to `https://sheets.googleapis.com/v4/spreadsheets`.
    #[must_use]
    pub fn with_sheets_url(mut self, url: impl Into<String>) -> Self {
        self.sheets_url = url.into();
        self
    }

    /// Defaults to `https://www.googleapis.com/drive/v3/files`.
    #[must_use]
    pub fn with_drive_url(mut self, url: impl Into<String>) -> Self {
        self.drive_url = url.into();
        self
    }

    /// Title searched for by `init()` and given to a newly created store.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Start with a known store identity; `init()` then returns it untouched.
    #[must_use]
    pub fn with_store_id(mut self, id: Option<StoreId>) -> Self {
        self.store_id = id;
        self
    }

    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
