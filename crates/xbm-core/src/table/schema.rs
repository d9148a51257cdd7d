//! Collection schema: sheet names, column order and field selectors.
//!
//! Column order is part of the on-disk format and must never change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of header rows at the top of every collection.
pub const HEADER_ROWS: usize = 1;

/// A single stored record as an ordered list of cells.
///
/// Cleared rows are represented by an empty row (or a row whose `id` cell is
/// empty). Rows may be shorter than the collection width when trailing cells
/// are blank.
pub type Row = Vec<String>;

const BOOKMARK_COLUMNS: [&str; 7] = [
    "id",
    "url",
    "author_name",
    "text",
    "embedded_html",
    "tags",
    "saved_at",
];

const TAG_COLUMNS: [&str; 3] = ["id", "name", "created_at"];

/// One of the two named collections inside a backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Bookmarks,
    Tags,
}

impl Collection {
    /// Both collections, in the order they are created.
    pub const ALL: [Self; 2] = [Self::Bookmarks, Self::Tags];

    /// Sheet name used by the backend.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bookmarks => "bookmarks",
            Self::Tags => "tags",
        }
    }

    /// Header row, in column order.
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Bookmarks => &BOOKMARK_COLUMNS,
            Self::Tags => &TAG_COLUMNS,
        }
    }

    /// Number of columns.
    pub const fn width(self) -> usize {
        self.columns().len()
    }

    /// Header row as owned cells.
    pub fn header_row(self) -> Row {
        self.columns().iter().map(|c| (*c).to_string()).collect()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns of the `bookmarks` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookmarkField {
    Id,
    Url,
    AuthorName,
    Text,
    EmbeddedHtml,
    Tags,
    SavedAt,
}

impl BookmarkField {
    /// Zero-based column index.
    pub const fn column(self) -> usize {
        match self {
            Self::Id => 0,
            Self::Url => 1,
            Self::AuthorName => 2,
            Self::Text => 3,
            Self::EmbeddedHtml => 4,
            Self::Tags => 5,
            Self::SavedAt => 6,
        }
    }
}

/// Columns of the `tags` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagField {
    Id,
    Name,
    CreatedAt,
}

impl TagField {
    /// Zero-based column index.
    pub const fn column(self) -> usize {
        match self {
            Self::Id => 0,
            Self::Name => 1,
            Self::CreatedAt => 2,
        }
    }
}

/// A field selector that knows which collection it belongs to.
///
/// Targeted mutations address exactly one cell: the row is resolved from the
/// record id, the column from the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Bookmark(BookmarkField),
    Tag(TagField),
}

impl Field {
    pub const fn collection(self) -> Collection {
        match self {
            Self::Bookmark(_) => Collection::Bookmarks,
            Self::Tag(_) => Collection::Tags,
        }
    }

    pub const fn column(self) -> usize {
        match self {
            Self::Bookmark(f) => f.column(),
            Self::Tag(f) => f.column(),
        }
    }

    /// Header name of the addressed column.
    pub const fn name(self) -> &'static str {
        self.collection().columns()[self.column()]
    }
}

/// Read a cell, treating missing trailing cells as empty.
pub fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map_or("", String::as_str)
}

/// A row is live when its `id` cell is non-empty.
pub fn is_live(row: &[String]) -> bool {
    !cell(row, 0).is_empty()
}
