//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Resolve the store identity (`connect`), call one `AppCore` operation,
//!   print the result
//!
//! Handlers never talk to a store directly. `logout` is the exception to the
//! signature: it only needs the session, opened by `bootstrap::open_session`.

pub mod add;
pub mod init;
pub mod list;
pub mod logout;
pub mod paths;
pub mod remove;
pub mod retag;
pub mod tags;

use anyhow::Result;
use xbm_core::StoreId;

use crate::bootstrap::CliContext;

/// Run `init()` on the selected backend and remember its identity.
pub(crate) async fn connect(ctx: &CliContext) -> Result<StoreId> {
    Ok(ctx.app().session().resolve().await?)
}
