//! Tabular row model shared by every backend.
//!
//! The backing store is a spreadsheet: each collection is a named sheet, row 1
//! holds the column headers and every following row holds one record as a
//! list of string cells. Nothing here performs I/O.

pub mod codec;
pub mod locator;
pub mod schema;

pub use codec::{TAG_DELIMITER, decode_tags, encode_tags};
pub use locator::{RowLocation, locate, locate_or_not_found};
pub use schema::{BookmarkField, Collection, Field, HEADER_ROWS, Row, TagField, cell, is_live};
