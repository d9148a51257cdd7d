//! Shared CLI presentation utilities.
//!
//! Format-only: no domain transforms.

pub mod bookmark_display;
pub mod tables;

pub use bookmark_display::{display_bookmark, display_cascade_report, format_tags};
pub use tables::{print_separator, truncate_string};
