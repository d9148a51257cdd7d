use serde::{Deserialize, Serialize};

use crate::table::{Row, TagField, cell};

/// A tag record.
///
/// `name` is the cross-reference key used by bookmarks and is unique among
/// live tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl Tag {
    pub fn to_row(&self) -> Row {
        vec![self.id.clone(), self.name.clone(), self.created_at.clone()]
    }

    /// Decode a row; returns `None` for cleared rows.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let id = cell(row, TagField::Id.column());
        if id.is_empty() {
            return None;
        }
        Some(Self {
            id: id.to_string(),
            name: cell(row, TagField::Name.column()).to_string(),
            created_at: cell(row, TagField::CreatedAt.column()).to_string(),
        })
    }
}
