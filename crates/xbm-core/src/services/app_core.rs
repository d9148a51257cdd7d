//! `AppCore` - the client facade.
//!
//! Constructed once at the adapter's composition root with the selected
//! store backend, embed fetcher and session repository.

use std::sync::Arc;

use super::cache::LibraryCache;
use super::{BookmarkService, SessionService, TagService};
use crate::ports::{EmbedFetcherPort, EntityStore, SessionRepository};

/// Entry point for adapters.
///
/// # Example
///
/// ```ignore
/// let core = AppCore::new(store, embed, session);
/// core.session().resolve().await?;
/// let bookmarks = core.bookmarks().load().await?;
/// ```
pub struct AppCore {
    store: Arc<dyn EntityStore>,
    bookmarks: BookmarkService,
    tags: TagService,
    session: SessionService,
}

impl AppCore {
    pub fn new(
        store: Arc<dyn EntityStore>,
        embed: Arc<dyn EmbedFetcherPort>,
        session: Arc<dyn SessionRepository>,
    ) -> Self {
        let cache = Arc::new(LibraryCache::new());
        Self {
            bookmarks: BookmarkService::new(Arc::clone(&store), embed, Arc::clone(&cache)),
            tags: TagService::new(Arc::clone(&store), cache),
            session: SessionService::new(Arc::clone(&store), session),
            store,
        }
    }

    pub const fn bookmarks(&self) -> &BookmarkService {
        &self.bookmarks
    }

    pub const fn tags(&self) -> &TagService {
        &self.tags
    }

    pub const fn session(&self) -> &SessionService {
        &self.session
    }

    /// Name of the selected backend.
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }
}
