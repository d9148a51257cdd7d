//! Resolve a record id to its row inside a snapshot.
//!
//! The backend has no primary-key index, so a row position is only meaningful
//! for the snapshot it was computed from. Callers must fetch a new snapshot
//! immediately before every targeted mutation and never keep a `RowLocation`
//! across operations.

use super::schema::{Collection, HEADER_ROWS, Row, cell};
use crate::ports::StoreError;

/// Position of a record inside one snapshot of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLocation {
    /// Zero-based index into the snapshot (header excluded).
    pub position: usize,
}

impl RowLocation {
    /// One-based physical row number as addressed by the backend.
    ///
    /// With a single header row, snapshot position `p` is row `p + 2`.
    pub const fn physical_row(self) -> usize {
        self.position + HEADER_ROWS + 1
    }
}

/// Find the first row whose `id` cell equals `id`.
///
/// `snapshot` is the raw data range in storage order, cleared rows included,
/// so that positions line up with physical rows. An empty `id` never matches.
pub fn locate(snapshot: &[Row], id: &str) -> Option<RowLocation> {
    if id.is_empty() {
        return None;
    }
    snapshot
        .iter()
        .position(|row| cell(row, 0) == id)
        .map(|position| RowLocation { position })
}

/// Like [`locate`], but maps a miss to `StoreError::NotFound`.
pub fn locate_or_not_found(
    snapshot: &[Row],
    collection: Collection,
    id: &str,
) -> Result<RowLocation, StoreError> {
    locate(snapshot, id).ok_or_else(|| StoreError::NotFound {
        collection,
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn test_physical_row_offset() {
        assert_eq!(RowLocation { position: 0 }.physical_row(), 2);
        assert_eq!(RowLocation { position: 7 }.physical_row(), 9);
    }

    #[test]
    fn test_locate_finds_each_unique_id() {
        let snapshot = vec![row(&["a", "x"]), row(&["b", "y"]), row(&["c", "z"])];
        for (expected, id) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(locate(&snapshot, id), Some(RowLocation { position: expected }));
        }
    }

    #[test]
    fn test_locate_counts_cleared_rows() {
        // Row 3 was cleared earlier; "c" still lives on physical row 4.
        let snapshot = vec![row(&["a"]), vec![], row(&["c"])];
        let loc = locate(&snapshot, "c").unwrap();
        assert_eq!(loc.position, 2);
        assert_eq!(loc.physical_row(), 4);
    }

    #[test]
    fn test_locate_absent_id_is_none() {
        let snapshot = vec![row(&["a"]), row(&["b"])];
        assert_eq!(locate(&snapshot, "missing"), None);
        assert_eq!(locate(&[], "a"), None);
    }

    #[test]
    fn test_empty_id_never_matches_cleared_row() {
        let snapshot = vec![vec![], row(&["", "leftover"])];
        assert_eq!(locate(&snapshot, ""), None);
    }

    #[test]
    fn test_id_match_is_exact() {
        let snapshot = vec![row(&["abc"]), row(&["ab"])];
        assert_eq!(locate(&snapshot, "ab").unwrap().position, 1);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let snapshot = vec![row(&["dup", "first"]), row(&["dup", "second"])];
        assert_eq!(locate(&snapshot, "dup").unwrap().position, 0);
    }

    #[test]
    fn test_not_found_error_carries_id() {
        let err = locate_or_not_found(&[], Collection::Bookmarks, "gone").unwrap_err();
        match err {
            StoreError::NotFound { collection, id } => {
                assert_eq!(collection, Collection::Bookmarks);
                assert_eq!(id, "gone");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }
}
