//! Hand-rolled in-memory store for service tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Bookmark, Tag};
use crate::ports::{EntityStore, StoreError, StoreId, StoreResult};
use crate::table::{Collection, Field, Row, is_live, locate_or_not_found};

/// Keeps raw rows (cleared rows stay as empty rows) and counts writes.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    bookmarks: Mutex<Vec<Row>>,
    tags: Mutex<Vec<Row>>,
    writes: Mutex<usize>,
    fail_updates_for: Mutex<HashSet<String>>,
    fail_clears: Mutex<bool>,
}

impl InMemoryStore {
    pub(crate) fn with_data(bookmarks: &[Bookmark], tags: &[Tag]) -> Self {
        let store = Self::default();
        *store.bookmarks.lock().unwrap() = bookmarks.iter().map(Bookmark::to_row).collect();
        *store.tags.lock().unwrap() = tags.iter().map(Tag::to_row).collect();
        store
    }

    /// Make `set_field` on `id` fail with a backend error.
    pub(crate) fn fail_updates_for(&self, id: &str) {
        self.fail_updates_for.lock().unwrap().insert(id.to_string());
    }

    pub(crate) fn fail_clears(&self) {
        *self.fail_clears.lock().unwrap() = true;
    }

    pub(crate) fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn rows(&self, collection: Collection) -> &Mutex<Vec<Row>> {
        match collection {
            Collection::Bookmarks => &self.bookmarks,
            Collection::Tags => &self.tags,
        }
    }

    fn record_write(&self) {
        *self.writes.lock().unwrap() += 1;
    }
}

fn injected() -> StoreError {
    StoreError::Backend {
        status: 503,
        body: "injected failure".to_string(),
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn init(&self) -> StoreResult<StoreId> {
        Ok(StoreId::new("memory"))
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<Row>> {
        let rows = self.rows(collection).lock().unwrap();
        Ok(rows.iter().filter(|r| is_live(r)).cloned().collect())
    }

    async fn append(&self, collection: Collection, row: Row) -> StoreResult<()> {
        self.rows(collection).lock().unwrap().push(row);
        self.record_write();
        Ok(())
    }

    async fn set_field(&self, id: &str, field: Field, value: &str) -> StoreResult<()> {
        let collection = field.collection();
        let mut rows = self.rows(collection).lock().unwrap();
        let location = locate_or_not_found(&rows, collection, id)?;
        if self.fail_updates_for.lock().unwrap().contains(id) {
            return Err(injected());
        }
        let row = &mut rows[location.position];
        if row.len() <= field.column() {
            row.resize(field.column() + 1, String::new());
        }
        row[field.column()] = value.to_string();
        drop(rows);
        self.record_write();
        Ok(())
    }

    async fn clear(&self, collection: Collection, id: &str) -> StoreResult<()> {
        let mut rows = self.rows(collection).lock().unwrap();
        let location = locate_or_not_found(&rows, collection, id)?;
        if *self.fail_clears.lock().unwrap() {
            return Err(injected());
        }
        rows[location.position].clear();
        drop(rows);
        self.record_write();
        Ok(())
    }
}

pub(crate) fn bookmark(id: &str, tags: &[&str]) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        url: format!("https://twitter.com/user/status/{}", id.len()),
        author_name: "user".to_string(),
        text: format!("text of {id}"),
        embedded_html: format!("<p>text of {id}</p>"),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        saved_at: "2026-02-20T00:00:00.000Z".to_string(),
    }
}

pub(crate) fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        created_at: "2026-02-01T00:00:00.000Z".to_string(),
    }
}
