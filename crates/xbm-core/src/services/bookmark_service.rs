//! Bookmark operations for the client facade.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::cache::LibraryCache;
use crate::domain::{Bookmark, BookmarkFilter, NewBookmark};
use crate::ports::{CoreError, EmbedFetcherPort, EntityStore, EntityStoreExt};
use crate::utils::{html_to_text, now_timestamp, validate_item_url, validate_tag_name};

/// Bookmark listing, creation, retagging and removal.
///
/// The cache changes only after the store confirms each write.
pub struct BookmarkService {
    store: Arc<dyn EntityStore>,
    embed: Arc<dyn EmbedFetcherPort>,
    cache: Arc<LibraryCache>,
}

impl BookmarkService {
    pub(crate) fn new(
        store: Arc<dyn EntityStore>,
        embed: Arc<dyn EmbedFetcherPort>,
        cache: Arc<LibraryCache>,
    ) -> Self {
        Self {
            store,
            embed,
            cache,
        }
    }

    /// Fetch all live bookmarks and refresh the cache.
    pub async fn load(&self) -> Result<Vec<Bookmark>, CoreError> {
        let bookmarks = self.store.list_bookmarks().await?;
        debug!(count = bookmarks.len(), "Loaded bookmarks");
        self.cache.replace_bookmarks(bookmarks.clone()).await;
        Ok(bookmarks)
    }

    /// Bookmarks as of the last load plus confirmed writes.
    pub async fn cached(&self) -> Vec<Bookmark> {
        self.cache.bookmarks().await
    }

    pub async fn filtered(&self, filter: &BookmarkFilter) -> Vec<Bookmark> {
        let bookmarks = self.cache.bookmarks().await;
        filter.apply(&bookmarks).into_iter().cloned().collect()
    }

    /// Validate the URL, fetch its embed and append a new bookmark.
    pub async fn add(&self, input: NewBookmark) -> Result<Bookmark, CoreError> {
        let url = validate_item_url(&input.url)?;
        let tags = input
            .tags
            .iter()
            .map(|t| validate_tag_name(t))
            .collect::<Result<Vec<_>, _>>()?;

        let embed = self.embed.fetch(&url).await?;
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            url,
            author_name: embed.author_name,
            text: html_to_text(&embed.html),
            embedded_html: embed.html,
            tags,
            saved_at: now_timestamp(),
        };

        self.store.append_bookmark(&bookmark).await?;
        info!(id = %bookmark.id, url = %bookmark.url, "Bookmark added");
        self.cache.prepend_bookmark(bookmark.clone()).await;
        Ok(bookmark)
    }

    /// Replace the tag list of a bookmark.
    pub async fn update_tags(&self, id: &str, tags: Vec<String>) -> Result<(), CoreError> {
        let tags = tags
            .iter()
            .map(|t| validate_tag_name(t))
            .collect::<Result<Vec<_>, _>>()?;
        self.store.set_bookmark_tags(id, &tags).await?;
        debug!(id = %id, tags = ?tags, "Bookmark retagged");
        self.cache.set_bookmark_tags(id, &tags).await;
        Ok(())
    }

    /// Soft-delete a bookmark.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.store.clear_bookmark(id).await?;
        info!(id = %id, "Bookmark removed");
        self.cache.remove_bookmark(id).await;
        Ok(())
    }
}
