//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `sqlx` types in any signature
//! - Store operations are row-level; typed helpers live in `EntityStoreExt`
//! - Every backend failure is surfaced as a `StoreError`, never swallowed

pub mod embed;
pub mod entity_store;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use embed::{EmbedData, EmbedError, EmbedFetcherPort};
pub use entity_store::{EntityStore, EntityStoreExt};
pub use session::SessionRepository;

#[cfg(test)]
pub use embed::MockEmbedFetcherPort;

use crate::services::CascadeError;
use crate::table::Collection;
use crate::utils::validation::ValidationError;

/// Opaque identity of a backing store, persisted by the caller across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StoreId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Required external configuration is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing configuration: {missing_key}")]
pub struct ConfigError {
    pub missing_key: String,
}

impl ConfigError {
    pub fn missing(key: impl Into<String>) -> Self {
        Self {
            missing_key: key.into(),
        }
    }
}

/// Errors surfaced by `EntityStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A targeted mutation's id is absent from the just-fetched snapshot.
    #[error("{collection} record not found: {id}")]
    NotFound { collection: Collection, id: String },

    /// Non-success response from the remote backend.
    #[error("Backend error (status {status}): {body}")]
    Backend { status: u16, body: String },

    /// Input rejected before reaching the backend.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Required configuration (credential, store identity) is absent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No response was obtained (connect failure, timeout).
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Local storage failed or held an undecodable payload.
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl StoreError {
    pub fn not_found(collection: Collection, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Core error type for facade callers.
///
/// Adapters map this to their own surface (CLI exit codes, messages).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Embed(#[from] EmbedError),

    #[error(transparent)]
    Cascade(#[from] CascadeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
