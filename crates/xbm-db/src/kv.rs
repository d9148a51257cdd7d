//! Key-value access to the `store_kv` table.

use sqlx::{Row, SqlitePool};
use xbm_core::{StoreError, StoreResult};

fn storage(e: &sqlx::Error) -> StoreError {
    StoreError::Storage {
        message: e.to_string(),
    }
}

pub(crate) async fn get(pool: &SqlitePool, key: &str) -> StoreResult<Option<String>> {
    let row = sqlx::query("SELECT value FROM store_kv WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .map_err(|e| storage(&e))?;
    Ok(row.map(|r| r.get("value")))
}

pub(crate) async fn put(pool: &SqlitePool, key: &str, value: &str) -> StoreResult<()> {
    let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    sqlx::query("INSERT OR REPLACE INTO store_kv (key, value, updated_at) VALUES (?, ?, ?)")
        .bind(key)
        .bind(value)
        .bind(&updated_at)
        .execute(pool)
        .await
        .map_err(|e| storage(&e))?;
    Ok(())
}

pub(crate) async fn delete(pool: &SqlitePool, key: &str) -> StoreResult<()> {
    sqlx::query("DELETE FROM store_kv WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await
        .map_err(|e| storage(&e))?;
    Ok(())
}
