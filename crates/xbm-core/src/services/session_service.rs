//! Store identity lifecycle.

use std::sync::Arc;

use tracing::info;

use crate::ports::{EntityStore, SessionRepository, StoreId, StoreResult};

/// Resolves the store identity at startup and forgets it on logout.
pub struct SessionService {
    store: Arc<dyn EntityStore>,
    session: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub(crate) fn new(store: Arc<dyn EntityStore>, session: Arc<dyn SessionRepository>) -> Self {
        Self { store, session }
    }

    /// The saved identity, if any.
    pub async fn current(&self) -> StoreResult<Option<StoreId>> {
        self.session.load_store_id().await
    }

    /// Run `init()` on the store and persist the identity if it changed.
    pub async fn resolve(&self) -> StoreResult<StoreId> {
        let saved = self.session.load_store_id().await?;
        let id = self.store.init().await?;
        if saved.as_ref() != Some(&id) {
            self.session.save_store_id(&id).await?;
            info!(store_id = %id, backend = self.store.backend_name(), "Store identity saved");
        }
        Ok(id)
    }

    pub async fn logout(&self) -> StoreResult<()> {
        self.session.clear().await?;
        info!("Store identity cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::services::test_support::InMemoryStore;

    #[derive(Default)]
    struct MemorySession {
        id: Mutex<Option<StoreId>>,
        saves: Mutex<usize>,
    }

    #[async_trait]
    impl SessionRepository for MemorySession {
        async fn load_store_id(&self) -> StoreResult<Option<StoreId>> {
            Ok(self.id.lock().unwrap().clone())
        }

        async fn save_store_id(&self, id: &StoreId) -> StoreResult<()> {
            *self.id.lock().unwrap() = Some(id.clone());
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }

        async fn clear(&self) -> StoreResult<()> {
            *self.id.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_resolve_saves_once() {
        let session = Arc::new(MemorySession::default());
        let svc = SessionService::new(Arc::new(InMemoryStore::default()), session.clone());

        assert!(svc.current().await.unwrap().is_none());
        let first = svc.resolve().await.unwrap();
        let second = svc.resolve().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(*session.saves.lock().unwrap(), 1);
        assert_eq!(svc.current().await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_logout_clears() {
        let session = Arc::new(MemorySession::default());
        let svc = SessionService::new(Arc::new(InMemoryStore::default()), session);
        svc.resolve().await.unwrap();

        svc.logout().await.unwrap();
        assert!(svc.current().await.unwrap().is_none());
    }
}
