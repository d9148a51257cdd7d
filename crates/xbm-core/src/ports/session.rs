//! Session state port.
//!
//! Holds the store identity between runs. It is read at startup, written
//! once after `init()` and cleared on logout.

use async_trait::async_trait;

use super::{StoreId, StoreResult};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// The persisted store identity, if any.
    async fn load_store_id(&self) -> StoreResult<Option<StoreId>>;

    async fn save_store_id(&self, id: &StoreId) -> StoreResult<()>;

    /// Remove the persisted identity. No-op if none is stored.
    async fn clear(&self) -> StoreResult<()>;
}
