//! Remote entity store backed by a hosted spreadsheet.
//!
//! `SheetsStore` implements `xbm_core::EntityStore` over the Sheets v4 values
//! API. Each collection is a sheet; records are rows located by a full scan
//! immediately before every targeted write. Drive v3 file search finds an
//! existing store by title so `init()` never creates a duplicate.
//!
//! HTTP goes through the `HttpBackend` trait: reqwest with bounded retry in
//! production, an in-memory spreadsheet emulator for tests.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
mod http;
mod models;
mod store;
mod url;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// ============================================================================
// Public API
// ============================================================================

pub use config::SheetsClientConfig;
pub use error::{SheetsError, SheetsResult};
pub use http::{ApiRequest, HttpBackend, Method, ReqwestBackend};
pub use store::{DefaultSheetsStore, SheetsStore};
