//! `SQLite` implementation of the `SessionRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use xbm_core::{SessionRepository, StoreId, StoreResult};

use crate::kv;

const STORE_ID_KEY_PREFIX: &str = "store_id";

/// Keeps the store identity in `store_kv`, one key per backend
/// (`store_id.remote`, `store_id.mock`).
pub struct SqliteSessionRepository {
    pool: SqlitePool,
    key: String,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool, backend: &str) -> Self {
        Self {
            pool,
            key: format!("{STORE_ID_KEY_PREFIX}.{backend}"),
        }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn load_store_id(&self) -> StoreResult<Option<StoreId>> {
        Ok(kv::get(&self.pool, &self.key)
            .await?
            .filter(|id| !id.is_empty())
            .map(StoreId::new))
    }

    async fn save_store_id(&self, id: &StoreId) -> StoreResult<()> {
        kv::put(&self.pool, &self.key, id.as_str()).await
    }

    async fn clear(&self) -> StoreResult<()> {
        kv::delete(&self.pool, &self.key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn test_load_returns_none_when_empty() {
        let repo = SqliteSessionRepository::new(setup_test_database().await.unwrap(), "remote");
        assert!(repo.load_store_id().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrite_and_clear() {
        let repo = SqliteSessionRepository::new(setup_test_database().await.unwrap(), "remote");

        repo.save_store_id(&StoreId::new("first")).await.unwrap();
        repo.save_store_id(&StoreId::new("second")).await.unwrap();
        assert_eq!(
            repo.load_store_id().await.unwrap(),
            Some(StoreId::new("second"))
        );

        repo.clear().await.unwrap();
        assert!(repo.load_store_id().await.unwrap().is_none());
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_backends_keep_separate_identities() {
        let pool = setup_test_database().await.unwrap();
        let mock = SqliteSessionRepository::new(pool.clone(), "mock");
        let remote = SqliteSessionRepository::new(pool, "remote");

        mock.save_store_id(&StoreId::new("mock-spreadsheet-id"))
            .await
            .unwrap();
        assert!(remote.load_store_id().await.unwrap().is_none());

        remote.save_store_id(&StoreId::new("sheet-1")).await.unwrap();
        mock.clear().await.unwrap();
        assert!(mock.load_store_id().await.unwrap().is_none());
        assert_eq!(
            remote.load_store_id().await.unwrap(),
            Some(StoreId::new("sheet-1"))
        );
    }
}
