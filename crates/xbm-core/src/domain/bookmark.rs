use serde::{Deserialize, Serialize};

use crate::table::{BookmarkField, Row, cell, decode_tags, encode_tags};

/// A saved item.
///
/// Only `tags` changes after creation (full replacement); `saved_at` is
/// immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Client-generated unique id (UUID v4).
    pub id: String,
    /// Normalized canonical item URL.
    pub url: String,
    pub author_name: String,
    /// Plain-text excerpt derived from `embedded_html`.
    pub text: String,
    /// Opaque embeddable markup.
    pub embedded_html: String,
    /// Tag names, in order. Bookmarks reference tags by name, not by id.
    pub tags: Vec<String>,
    /// RFC 3339 creation timestamp.
    pub saved_at: String,
}

/// Input for creating a bookmark through the facade.
#[derive(Debug, Clone, Default)]
pub struct NewBookmark {
    /// Raw URL as entered by the user.
    pub url: String,
    pub tags: Vec<String>,
}

impl Bookmark {
    /// Encode as a row in `bookmarks` column order.
    pub fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.url.clone(),
            self.author_name.clone(),
            self.text.clone(),
            self.embedded_html.clone(),
            encode_tags(&self.tags),
            self.saved_at.clone(),
        ]
    }

    /// Decode a row; returns `None` for cleared rows.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let id = cell(row, BookmarkField::Id.column());
        if id.is_empty() {
            return None;
        }
        Some(Self {
            id: id.to_string(),
            url: cell(row, BookmarkField::Url.column()).to_string(),
            author_name: cell(row, BookmarkField::AuthorName.column()).to_string(),
            text: cell(row, BookmarkField::Text.column()).to_string(),
            embedded_html: cell(row, BookmarkField::EmbeddedHtml.column()).to_string(),
            tags: decode_tags(cell(row, BookmarkField::Tags.column())),
            saved_at: cell(row, BookmarkField::SavedAt.column()).to_string(),
        })
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    /// Tags with every occurrence of `name` removed.
    pub fn tags_without(&self, name: &str) -> Vec<String> {
        self.tags.iter().filter(|t| *t != name).cloned().collect()
    }
}
