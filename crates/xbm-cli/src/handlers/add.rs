//! Add command handler.

use anyhow::Result;
use xbm_core::NewBookmark;

use crate::bootstrap::CliContext;
use crate::presentation::display_bookmark;

pub async fn execute(ctx: &CliContext, url: String, tags: Vec<String>) -> Result<()> {
    ctx.require_embed()?;
    super::connect(ctx).await?;

    let bookmark = ctx.app().bookmarks().add(NewBookmark { url, tags }).await?;
    println!("Saved bookmark:");
    display_bookmark(&bookmark);
    Ok(())
}
