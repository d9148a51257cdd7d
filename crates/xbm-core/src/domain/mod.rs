//! Domain types.
//!
//! These types represent stored records independent of any backend. Each
//! knows how to map itself to and from a spreadsheet row.

mod bookmark;
mod filter;
mod tag;

pub use bookmark::{Bookmark, NewBookmark};
pub use filter::BookmarkFilter;
pub use tag::Tag;
