//! Internal error types for spreadsheet operations.
//!
//! These are mapped to `xbm_core::StoreError` at the store boundary.

use thiserror::Error;
use xbm_core::StoreError;

pub type SheetsResult<T> = Result<T, SheetsError>;

#[derive(Debug, Error)]
pub enum SheetsError {
    /// The API answered with a non-success status.
    #[error("Sheets API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl SheetsError {
    /// Worth resending an idempotent request after this failure.
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Network(_) => true,
            Self::InvalidUrl(_) | Self::JsonParse(_) => false,
        }
    }
}

impl From<SheetsError> for StoreError {
    fn from(err: SheetsError) -> Self {
        match err {
            SheetsError::Api { status, body } => Self::Backend { status, body },
            SheetsError::Network(e) => Self::Transport {
                message: e.to_string(),
            },
            SheetsError::InvalidUrl(e) => Self::Transport {
                message: format!("invalid request URL: {e}"),
            },
            SheetsError::JsonParse(e) => Self::Storage {
                message: e.to_string(),
            },
        }
    }
}
