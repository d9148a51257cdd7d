//! Logout command handler.
//!
//! Forgets the remembered store identity of the selected backend. The store
//! itself is untouched and no credentials are needed.

use anyhow::Result;
use tracing::info;
use xbm_core::SessionRepository;

pub async fn execute(session: &dyn SessionRepository) -> Result<()> {
    match session.load_store_id().await? {
        Some(id) => {
            session.clear().await?;
            info!(store_id = %id, "Store identity cleared");
            println!("Forgot store {id}");
        }
        None => println!("No store remembered"),
    }
    Ok(())
}
