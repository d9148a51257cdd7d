//! Core domain for the spreadsheet-backed bookmark store.
//!
//! This crate owns everything that is independent of a concrete backend:
//!
//! - `domain` - `Bookmark`, `Tag` and bookmark filtering
//! - `table` - the tabular row model: collection schema, tag codec, row locator
//! - `ports` - the `EntityStore`, `EmbedFetcherPort` and `SessionRepository` traits
//! - `services` - the client facade (`AppCore`) and the tag-delete cascade
//! - `utils` - URL normalization, markup-to-text, timestamps
//! - `paths` - data directory resolution
//!
//! Adapters (`xbm-sheets`, `xbm-db`, `xbm-embed`) implement the ports;
//! the CLI wires them together.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod table;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{Bookmark, BookmarkFilter, NewBookmark, Tag};
pub use paths::{DATA_DIR_ENV, PathError, data_root, database_path, env_file_path};
pub use ports::{
    ConfigError, CoreError, EmbedData, EmbedError, EmbedFetcherPort, EntityStore, EntityStoreExt,
    SessionRepository, StoreError, StoreId, StoreResult,
};
pub use services::{
    AppCore, BookmarkService, CascadeCoordinator, CascadeError, CascadeReport, CascadeStep,
    SessionService, StepOutcome, TagService,
};
pub use table::{
    BookmarkField, Collection, Field, HEADER_ROWS, Row, RowLocation, TAG_DELIMITER, TagField,
};
pub use utils::validation::ValidationError;

// Silence unused dev-dependency warnings for crates only used by some test modules
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
