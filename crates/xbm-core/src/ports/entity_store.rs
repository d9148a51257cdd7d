//! Entity store port.
//!
//! The store emulates keyed records over a backend that only offers
//! whole-table read, row append, single-range write and range clear.

use async_trait::async_trait;

use super::{StoreId, StoreResult};
use crate::domain::{Bookmark, Tag};
use crate::table::{BookmarkField, Collection, Field, Row, encode_tags};

/// Record-level CRUD over the `bookmarks` and `tags` collections.
///
/// Implementations must behave identically: a caller cannot tell backends
/// apart except by latency.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Short backend label for logs and `paths` output.
    fn backend_name(&self) -> &'static str;

    /// Locate the backing store by its well-known name or create it.
    ///
    /// Idempotent: repeated calls return the same identity and never create
    /// a second store or duplicate header rows.
    async fn init(&self) -> StoreResult<StoreId>;

    /// All live rows of `collection` in storage order. Cleared rows are excluded.
    async fn list(&self, collection: Collection) -> StoreResult<Vec<Row>>;

    /// Add a row after the last populated row.
    async fn append(&self, collection: Collection, row: Row) -> StoreResult<()>;

    /// Overwrite one field of the record `id`, located against a fresh snapshot.
    ///
    /// Fails with `StoreError::NotFound` without writing if `id` is absent.
    async fn set_field(&self, id: &str, field: Field, value: &str) -> StoreResult<()>;

    /// Clear the full row of the record `id`, located against a fresh snapshot.
    async fn clear(&self, collection: Collection, id: &str) -> StoreResult<()>;
}

/// Typed helpers over the row-level store.
#[async_trait]
pub trait EntityStoreExt: EntityStore {
    async fn list_bookmarks(&self) -> StoreResult<Vec<Bookmark>> {
        let rows = self.list(Collection::Bookmarks).await?;
        Ok(rows.iter().filter_map(|r| Bookmark::from_row(r)).collect())
    }

    async fn list_tags(&self) -> StoreResult<Vec<Tag>> {
        let rows = self.list(Collection::Tags).await?;
        Ok(rows.iter().filter_map(|r| Tag::from_row(r)).collect())
    }

    async fn append_bookmark(&self, bookmark: &Bookmark) -> StoreResult<()> {
        self.append(Collection::Bookmarks, bookmark.to_row()).await
    }

    async fn append_tag(&self, tag: &Tag) -> StoreResult<()> {
        self.append(Collection::Tags, tag.to_row()).await
    }

    /// Replace the tag list of a bookmark.
    async fn set_bookmark_tags(&self, id: &str, tags: &[String]) -> StoreResult<()> {
        self.set_field(id, Field::Bookmark(BookmarkField::Tags), &encode_tags(tags))
            .await
    }

    async fn clear_bookmark(&self, id: &str) -> StoreResult<()> {
        self.clear(Collection::Bookmarks, id).await
    }

    async fn clear_tag(&self, id: &str) -> StoreResult<()> {
        self.clear(Collection::Tags, id).await
    }
}

impl<S: EntityStore + ?Sized> EntityStoreExt for S {}
