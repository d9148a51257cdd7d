//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    super::connect(ctx).await?;
    ctx.app().bookmarks().delete(id).await?;
    println!("Removed bookmark {id}");
    Ok(())
}
