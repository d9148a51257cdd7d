//! Tag operations for the client facade.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::cache::LibraryCache;
use super::cascade::{CascadeCoordinator, CascadeReport};
use crate::domain::Tag;
use crate::ports::{CoreError, EntityStore, EntityStoreExt};
use crate::utils::{ValidationError, now_timestamp, validate_tag_name};

pub struct TagService {
    store: Arc<dyn EntityStore>,
    cascade: CascadeCoordinator,
    cache: Arc<LibraryCache>,
}

impl TagService {
    pub(crate) fn new(store: Arc<dyn EntityStore>, cache: Arc<LibraryCache>) -> Self {
        Self {
            cascade: CascadeCoordinator::new(Arc::clone(&store)),
            store,
            cache,
        }
    }

    /// Fetch all live tags and refresh the cache.
    pub async fn load(&self) -> Result<Vec<Tag>, CoreError> {
        let tags = self.store.list_tags().await?;
        self.cache.replace_tags(tags.clone()).await;
        Ok(tags)
    }

    pub async fn cached(&self) -> Vec<Tag> {
        self.cache.tags().await
    }

    /// Create a tag after checking the name against a fresh tag list.
    pub async fn add(&self, name: &str) -> Result<Tag, CoreError> {
        let name = validate_tag_name(name)?;
        let existing = self.store.list_tags().await?;
        if existing.iter().any(|t| t.name == name) {
            return Err(ValidationError::new(format!("tag already exists: {name}")).into());
        }

        let tag = Tag {
            id: Uuid::new_v4().to_string(),
            name,
            created_at: now_timestamp(),
        };
        self.store.append_tag(&tag).await?;
        info!(id = %tag.id, name = %tag.name, "Tag created");

        self.cache.replace_tags(existing).await;
        self.cache.push_tag(tag.clone()).await;
        Ok(tag)
    }

    /// Delete a tag and strip it from every bookmark.
    ///
    /// On partial failure the confirmed steps are still applied to the
    /// cache before the error is returned.
    pub async fn delete(&self, name: &str) -> Result<CascadeReport, CoreError> {
        match self.cascade.delete_tag(name).await {
            Ok(report) => {
                self.cache.apply_cascade(&report).await;
                Ok(report)
            }
            Err(err) => {
                if let Some(report) = err.report() {
                    self.cache.apply_cascade(report).await;
                }
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockEmbedFetcherPort;
    use crate::services::BookmarkService;
    use crate::services::test_support::{InMemoryStore, bookmark, tag};

    fn services(store: &Arc<InMemoryStore>) -> (TagService, BookmarkService) {
        let cache = Arc::new(LibraryCache::new());
        let tags = TagService::new(store.clone(), Arc::clone(&cache));
        let bookmarks =
            BookmarkService::new(store.clone(), Arc::new(MockEmbedFetcherPort::new()), cache);
        (tags, bookmarks)
    }

    #[tokio::test]
    async fn test_add_trims_and_rejects_duplicates() {
        let store = Arc::new(InMemoryStore::with_data(&[], &[tag("t-1", "sample")]));
        let (tags, _) = services(&store);

        let created = tags.add("  tech ").await.unwrap();
        assert_eq!(created.name, "tech");
        assert!(Uuid::parse_str(&created.id).is_ok());

        let err = tags.add("sample").await.unwrap_err();
        assert!(err.to_string().contains("already exists"));
        let err = tags.add("a,b").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        let err = tags.add("   ").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        assert_eq!(store.writes(), 1);
        let names: Vec<_> = tags.cached().await.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["sample", "tech"]);
    }

    #[tokio::test]
    async fn test_delete_updates_both_caches() {
        let store = Arc::new(InMemoryStore::with_data(
            &[bookmark("a", &["x", "y"]), bookmark("b", &["y"])],
            &[tag("t-x", "x"), tag("t-y", "y")],
        ));
        let (tags, bookmarks) = services(&store);
        tags.load().await.unwrap();
        bookmarks.load().await.unwrap();

        let report = tags.delete("x").await.unwrap();
        assert!(report.is_complete());

        let cached_tags: Vec<_> = tags.cached().await.into_iter().map(|t| t.name).collect();
        assert_eq!(cached_tags, vec!["y"]);
        assert_eq!(bookmarks.cached().await[0].tags, vec!["y"]);
        assert_eq!(bookmarks.cached().await, store.list_bookmarks().await.unwrap());
    }

    #[tokio::test]
    async fn test_partial_delete_applies_confirmed_steps() {
        let store = Arc::new(InMemoryStore::with_data(
            &[bookmark("a", &["x"]), bookmark("b", &["x"])],
            &[tag("t-x", "x")],
        ));
        store.fail_updates_for("b");
        let (tags, bookmarks) = services(&store);
        tags.load().await.unwrap();
        bookmarks.load().await.unwrap();

        let err = tags.delete("x").await.unwrap_err();
        assert!(matches!(err, CoreError::Cascade(_)));

        assert!(tags.cached().await.is_empty());
        let cached = bookmarks.cached().await;
        assert!(cached[0].tags.is_empty());
        assert_eq!(cached[1].tags, vec!["x"]);
        assert_eq!(cached, store.list_bookmarks().await.unwrap());
    }
}
