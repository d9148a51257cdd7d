//! Offline `EntityStore` persisted in the local database.
//!
//! Both collections live as one JSON document under the `mock_store` key of
//! `store_kv`. Rows are kept raw, so a cleared record stays behind as an
//! empty row exactly like it does in the spreadsheet backend. The document
//! is created with sample data by the first `init()`; every other operation
//! fails with a configuration error until then.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tracing::{debug, info};

use xbm_core::table::{is_live, locate_or_not_found};
use xbm_core::{
    Bookmark, Collection, ConfigError, EntityStore, Field, Row, StoreError, StoreId, StoreResult,
    Tag,
};

use crate::fixtures::{MOCK_STORE_ID, mock_bookmarks, mock_tags};
use crate::kv;

const DOCUMENT_KEY: &str = "mock_store";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    bookmarks: Vec<Row>,
    tags: Vec<Row>,
}

impl Document {
    fn seeded() -> Self {
        Self {
            bookmarks: mock_bookmarks().iter().map(Bookmark::to_row).collect(),
            tags: mock_tags().iter().map(Tag::to_row).collect(),
        }
    }

    fn rows(&self, collection: Collection) -> &Vec<Row> {
        match collection {
            Collection::Bookmarks => &self.bookmarks,
            Collection::Tags => &self.tags,
        }
    }

    fn rows_mut(&mut self, collection: Collection) -> &mut Vec<Row> {
        match collection {
            Collection::Bookmarks => &mut self.bookmarks,
            Collection::Tags => &mut self.tags,
        }
    }
}

/// Local stand-in for the spreadsheet backend.
///
/// Every operation reads the whole document, mutates it and writes it back
/// while holding `lock`, so concurrent calls on one instance never lose a
/// write.
pub struct MockStore {
    pool: SqlitePool,
    lock: Mutex<()>,
}

impl MockStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> StoreResult<Option<Document>> {
        let Some(raw) = kv::get(&self.pool, DOCUMENT_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Storage {
                message: format!("mock store document is unreadable: {e}"),
            })
    }

    async fn load_initialised(&self) -> StoreResult<Document> {
        self.load()
            .await?
            .ok_or_else(|| ConfigError::missing("store_id").into())
    }

    async fn save(&self, document: &Document) -> StoreResult<()> {
        let raw = serde_json::to_string(document).map_err(|e| StoreError::Storage {
            message: e.to_string(),
        })?;
        kv::put(&self.pool, DOCUMENT_KEY, &raw).await
    }
}

#[async_trait]
impl EntityStore for MockStore {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    async fn init(&self) -> StoreResult<StoreId> {
        let _guard = self.lock.lock().await;
        if self.load().await?.is_none() {
            self.save(&Document::seeded()).await?;
            info!(target: "xbm.mock", "Seeded mock store with sample data");
        }
        Ok(StoreId::new(MOCK_STORE_ID))
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<Row>> {
        let _guard = self.lock.lock().await;
        let document = self.load_initialised().await?;
        Ok(document
            .rows(collection)
            .iter()
            .filter(|r| is_live(r))
            .cloned()
            .collect())
    }

    async fn append(&self, collection: Collection, row: Row) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load_initialised().await?;
        document.rows_mut(collection).push(row);
        self.save(&document).await?;
        debug!(target: "xbm.mock", %collection, "Appended row");
        Ok(())
    }

    async fn set_field(&self, id: &str, field: Field, value: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load_initialised().await?;
        let collection = field.collection();
        let rows = document.rows_mut(collection);
        let location = locate_or_not_found(rows, collection, id)?;

        let row = &mut rows[location.position];
        if row.len() < collection.width() {
            row.resize(collection.width(), String::new());
        }
        row[field.column()] = value.to_string();

        self.save(&document).await?;
        debug!(target: "xbm.mock", %collection, id, field = field.name(), "Updated field");
        Ok(())
    }

    async fn clear(&self, collection: Collection, id: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load_initialised().await?;
        let rows = document.rows_mut(collection);
        let location = locate_or_not_found(rows, collection, id)?;
        rows[location.position].clear();

        self.save(&document).await?;
        debug!(target: "xbm.mock", %collection, id, "Cleared row");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use xbm_core::EntityStoreExt;

    async fn store() -> MockStore {
        MockStore::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_operations_before_init_are_config_errors() {
        let store = store().await;
        let err = store.list(Collection::Bookmarks).await.unwrap_err();
        assert!(matches!(err, StoreError::Config(ref c) if c.missing_key == "store_id"));
    }

    #[tokio::test]
    async fn test_init_seeds_sample_data_once() {
        let store = store().await;
        assert_eq!(store.init().await.unwrap().as_str(), MOCK_STORE_ID);
        assert_eq!(store.list_bookmarks().await.unwrap(), mock_bookmarks());
        assert_eq!(store.list_tags().await.unwrap(), mock_tags());

        store.clear_bookmark("mock-bookmark-1").await.unwrap();
        store.init().await.unwrap();
        assert_eq!(store.list_bookmarks().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cleared_row_is_kept_as_gap() {
        let store = store().await;
        store.init().await.unwrap();
        store.clear_tag("mock-tag-1").await.unwrap();

        let document = store.load().await.unwrap().unwrap();
        assert_eq!(document.tags.len(), 2);
        assert!(document.tags[0].is_empty());
        assert_eq!(store.list_tags().await.unwrap()[0].name, "tech");
    }

    #[tokio::test]
    async fn test_set_field_on_short_row_pads_to_width() {
        let store = store().await;
        store.init().await.unwrap();
        store
            .append(Collection::Bookmarks, vec!["short".to_string()])
            .await
            .unwrap();

        store
            .set_bookmark_tags("short", &["a".to_string(), "b".to_string()])
            .await
            .unwrap();

        let listed = store.list_bookmarks().await.unwrap();
        let short = listed.iter().find(|b| b.id == "short").unwrap();
        assert_eq!(short.tags, vec!["a", "b"]);
        assert!(short.url.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_document_is_a_storage_error() {
        let pool = setup_test_database().await.unwrap();
        kv::put(&pool, DOCUMENT_KEY, "not json").await.unwrap();
        let store = MockStore::new(pool);

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, StoreError::Storage { .. }));
    }
}
