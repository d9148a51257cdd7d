//! `EntityStore` over a hosted spreadsheet.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use xbm_core::table::{is_live, locate_or_not_found};
use xbm_core::{Collection, ConfigError, EntityStore, Field, Row, StoreId, StoreResult};

use crate::config::SheetsClientConfig;
use crate::error::SheetsResult;
use crate::http::{ApiRequest, HttpBackend, ReqwestBackend};
use crate::models::{CreateSpreadsheet, CreatedSpreadsheet, DriveFileList, ValueRange, ValuesBody};
use crate::url;

/// Store using the reqwest HTTP backend.
pub type DefaultSheetsStore = SheetsStore<ReqwestBackend>;

/// Spreadsheet-backed entity store.
///
/// Generic over the HTTP backend so tests can run against an emulator.
/// Every targeted write is preceded by a fresh read of the collection; row
/// positions are never kept between calls.
pub struct SheetsStore<B: HttpBackend> {
    backend: B,
    sheets_url: String,
    drive_url: String,
    title: String,
    store_id: RwLock<Option<StoreId>>,
}

impl DefaultSheetsStore {
    /// Create a store from configuration. A bearer token is required.
    pub fn new(config: &SheetsClientConfig) -> StoreResult<Self> {
        let token = config
            .token
            .clone()
            .ok_or_else(|| ConfigError::missing("access_token"))?;
        let backend = ReqwestBackend::new(config, token)?;
        Ok(Self::with_backend(config, backend))
    }
}

impl<B: HttpBackend> SheetsStore<B> {
    /// Create a store with a custom backend.
    pub fn with_backend(config: &SheetsClientConfig, backend: B) -> Self {
        Self {
            backend,
            sheets_url: config.sheets_url.clone(),
            drive_url: config.drive_url.clone(),
            title: config.title.clone(),
            store_id: RwLock::new(config.store_id.clone()),
        }
    }

    /// The identity in use, if `init()` has run or one was configured.
    pub fn store_id(&self) -> Option<StoreId> {
        self.store_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_store_id(&self, id: StoreId) {
        *self
            .store_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(id);
    }

    fn require_store_id(&self) -> StoreResult<StoreId> {
        self.store_id()
            .ok_or_else(|| ConfigError::missing("store_id").into())
    }

    async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> SheetsResult<T> {
        let value = self.backend.execute(&request).await?;
        let value = if value.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            value
        };
        Ok(serde_json::from_value(value)?)
    }

    async fn send_ignored(&self, request: ApiRequest) -> SheetsResult<()> {
        self.backend.execute(&request).await.map(|_| ())
    }

    fn json<T: Serialize>(body: &T) -> SheetsResult<serde_json::Value> {
        Ok(serde_json::to_value(body)?)
    }

    async fn find_existing(&self) -> SheetsResult<Option<StoreId>> {
        let url = url::drive_search_url(&self.drive_url, &self.title)?;
        let list: DriveFileList = self.send(ApiRequest::get(url)).await?;
        Ok(list.files.into_iter().next().map(|file| {
            info!(target: "xbm.sheets", store_id = %file.id, name = %file.name, "Found existing store");
            StoreId::new(file.id)
        }))
    }

    async fn create(&self) -> SheetsResult<StoreId> {
        let url = url::create_url(&self.sheets_url)?;
        let body = Self::json(&CreateSpreadsheet::new(&self.title))?;
        let created: CreatedSpreadsheet = self.send(ApiRequest::post_once(url, body)).await?;
        let id = created.spreadsheet_id;

        for collection in Collection::ALL {
            let header = collection.header_row();
            let url = url::update_url(&self.sheets_url, &id, &url::header_range(collection))?;
            let body = Self::json(&ValuesBody::single(&header))?;
            self.send_ignored(ApiRequest::put(url, body)).await?;
        }

        info!(target: "xbm.sheets", store_id = %id, title = %self.title, "Created store");
        Ok(StoreId::new(id))
    }

    /// Raw data rows of `collection`, cleared rows included, so that
    /// positions line up with physical rows.
    async fn snapshot(&self, id: &StoreId, collection: Collection) -> SheetsResult<Vec<Row>> {
        let url = url::values_url(&self.sheets_url, id.as_str(), &url::data_range(collection))?;
        let range: ValueRange = self.send(ApiRequest::get(url)).await?;
        let rows = range.into_rows();
        debug!(target: "xbm.sheets", collection = %collection, rows = rows.len(), "Fetched snapshot");
        Ok(rows)
    }
}

#[async_trait]
impl<B: HttpBackend> EntityStore for SheetsStore<B> {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    async fn init(&self) -> StoreResult<StoreId> {
        if let Some(id) = self.store_id() {
            debug!(target: "xbm.sheets", store_id = %id, "Store identity already known");
            return Ok(id);
        }

        let id = match self.find_existing().await? {
            Some(id) => id,
            None => self.create().await?,
        };
        self.set_store_id(id.clone());
        Ok(id)
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<Row>> {
        let id = self.require_store_id()?;
        let rows = self.snapshot(&id, collection).await?;
        Ok(rows.into_iter().filter(|r| is_live(r)).collect())
    }

    async fn append(&self, collection: Collection, row: Row) -> StoreResult<()> {
        let id = self.require_store_id()?;
        let url = url::append_url(&self.sheets_url, id.as_str(), &url::header_range(collection))?;
        let body = Self::json(&ValuesBody::single(&row))?;
        self.send_ignored(ApiRequest::post_once(url, body)).await?;
        debug!(target: "xbm.sheets", collection = %collection, id = %row.first().map_or("", String::as_str), "Appended row");
        Ok(())
    }

    async fn set_field(&self, record_id: &str, field: Field, value: &str) -> StoreResult<()> {
        let id = self.require_store_id()?;
        let collection = field.collection();
        let snapshot = self.snapshot(&id, collection).await?;
        let row = locate_or_not_found(&snapshot, collection, record_id)?.physical_row();

        let url = url::update_url(&self.sheets_url, id.as_str(), &url::cell_range(field, row))?;
        let cells = [value.to_string()];
        let body = Self::json(&ValuesBody::single(&cells))?;
        self.send_ignored(ApiRequest::put(url, body)).await?;
        debug!(target: "xbm.sheets", collection = %collection, id = %record_id, field = field.name(), row, "Updated field");
        Ok(())
    }

    async fn clear(&self, collection: Collection, record_id: &str) -> StoreResult<()> {
        let id = self.require_store_id()?;
        let snapshot = self.snapshot(&id, collection).await?;
        let row = locate_or_not_found(&snapshot, collection, record_id)?.physical_row();

        let url = url::clear_url(&self.sheets_url, id.as_str(), &url::row_range(collection, row))?;
        self.send_ignored(ApiRequest::post_idempotent(url, None))
            .await?;
        debug!(target: "xbm.sheets", collection = %collection, id = %record_id, row, "Cleared row");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
