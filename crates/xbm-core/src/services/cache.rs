//! Write-through cache of the last listed records.
//!
//! Only updated after the backend has confirmed a write.

use tokio::sync::RwLock;

use super::cascade::{CascadeReport, StepOutcome};
use crate::domain::{Bookmark, Tag};

#[derive(Debug, Default)]
pub(crate) struct LibraryCache {
    bookmarks: RwLock<Vec<Bookmark>>,
    tags: RwLock<Vec<Tag>>,
}

impl LibraryCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks.read().await.clone()
    }

    pub(crate) async fn tags(&self) -> Vec<Tag> {
        self.tags.read().await.clone()
    }

    pub(crate) async fn replace_bookmarks(&self, bookmarks: Vec<Bookmark>) {
        *self.bookmarks.write().await = bookmarks;
    }

    pub(crate) async fn replace_tags(&self, tags: Vec<Tag>) {
        *self.tags.write().await = tags;
    }

    /// Newest first.
    pub(crate) async fn prepend_bookmark(&self, bookmark: Bookmark) {
        self.bookmarks.write().await.insert(0, bookmark);
    }

    pub(crate) async fn set_bookmark_tags(&self, id: &str, tags: &[String]) {
        let mut bookmarks = self.bookmarks.write().await;
        for bookmark in bookmarks.iter_mut().filter(|b| b.id == id) {
            bookmark.tags = tags.to_vec();
        }
    }

    pub(crate) async fn remove_bookmark(&self, id: &str) {
        self.bookmarks.write().await.retain(|b| b.id != id);
    }

    pub(crate) async fn push_tag(&self, tag: Tag) {
        self.tags.write().await.push(tag);
    }

    /// Apply the confirmed steps of a cascade in one write per collection.
    ///
    /// A report only exists once the tag record is gone, so the tag is
    /// always dropped.
    pub(crate) async fn apply_cascade(&self, report: &CascadeReport) {
        self.tags
            .write()
            .await
            .retain(|t| t.name != report.tag_name);

        let mut bookmarks = self.bookmarks.write().await;
        for step in &report.steps {
            if let StepOutcome::Updated { tags } = &step.outcome {
                for bookmark in bookmarks.iter_mut().filter(|b| b.id == step.bookmark_id) {
                    bookmark.tags.clone_from(tags);
                }
            }
        }
    }
}
