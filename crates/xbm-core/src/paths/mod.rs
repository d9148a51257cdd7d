//! Path utilities for xbm data directories.
//!
//! - Data root (`XBM_DATA_DIR` or the platform data directory)
//! - Local database file used for the session key and the mock backend
//! - Optional `.env` file next to the database
//!
//! No interactive I/O here; adapters decide how to report failures.

mod database;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use database::{database_path, env_file_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root};
