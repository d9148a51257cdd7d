//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` and its parts to exit codes and user-facing messages.

use thiserror::Error;
use xbm_core::{CascadeError, ConfigError, CoreError, EmbedError, StoreError};

#[derive(Debug, Error)]
pub enum CliError {
    /// Record missing from the store.
    #[error("{0}")]
    NotFound(String),

    /// Input rejected before it reached the store.
    #[error("{0}")]
    Arguments(String),

    #[error("{0}")]
    Config(String),

    /// Backend or embed service failed.
    #[error("{0}")]
    Service(String),

    /// Local database failure.
    #[error("{0}")]
    Storage(String),

    /// Tag deleted but some bookmarks still carry it.
    #[error("{0}")]
    Partial(String),
}

impl CliError {
    /// Map error to an exit code (sysexits.h where one fits).
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Partial(_) => 3,
            Self::Service(_) => 69, // EX_UNAVAILABLE
            Self::Storage(_) => 74, // EX_IOERR
            Self::Config(_) => 78,  // EX_CONFIG
        }
    }

    /// Classify an error bubbled up to `main`.
    pub fn classify(err: &anyhow::Error) -> Option<Self> {
        if let Some(e) = err.downcast_ref::<CoreError>() {
            return Some(Self::from_core(e));
        }
        if let Some(e) = err.downcast_ref::<StoreError>() {
            return Some(Self::from_store(e));
        }
        if let Some(e) = err.downcast_ref::<ConfigError>() {
            return Some(Self::Config(e.to_string()));
        }
        err.downcast_ref::<EmbedError>()
            .map(|e| Self::Service(e.to_string()))
    }

    fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Store(e) => Self::from_store(e),
            CoreError::Embed(EmbedError::NotFound { .. }) => Self::NotFound(err.to_string()),
            CoreError::Embed(_) => Self::Service(err.to_string()),
            CoreError::Cascade(CascadeError::Partial { .. }) => Self::Partial(err.to_string()),
            CoreError::Cascade(CascadeError::TagNotCleared {
                source: StoreError::Storage { .. },
                ..
            }) => Self::Storage(err.to_string()),
            CoreError::Cascade(CascadeError::TagNotCleared { .. }) => Self::Service(err.to_string()),
            CoreError::Validation(_) => Self::Arguments(err.to_string()),
            CoreError::Config(_) => Self::Config(err.to_string()),
        }
    }

    fn from_store(err: &StoreError) -> Self {
        let msg = err.to_string();
        match err {
            StoreError::NotFound { .. } => Self::NotFound(msg),
            StoreError::Validation(_) => Self::Arguments(msg),
            StoreError::Config(_) => Self::Config(msg),
            StoreError::Backend { .. } | StoreError::Transport { .. } => Self::Service(msg),
            StoreError::Storage { .. } => Self::Storage(msg),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core(&err)
    }
}
