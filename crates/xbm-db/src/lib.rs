//! Local durable storage for xbm.
//!
//! - `setup` - `SQLite` pool creation and schema (`store_kv` key-value table)
//! - `SqliteSessionRepository` - the persisted store identity
//! - `MockStore` - offline `EntityStore` holding both collections as a JSON
//!   blob, seeded with fixed sample data on `init()`

#![deny(unsafe_code)]

mod fixtures;
mod kv;
pub mod mock_store;
pub mod repositories;
pub mod setup;

pub use fixtures::{MOCK_STORE_ID, mock_bookmarks, mock_tags};
pub use mock_store::MockStore;
pub use repositories::SqliteSessionRepository;

pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
