//! Retag command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::format_tags;

pub async fn execute(ctx: &CliContext, id: &str, tags: Vec<String>) -> Result<()> {
    super::connect(ctx).await?;

    let shown = format_tags(&tags);
    ctx.app().bookmarks().update_tags(id, tags).await?;
    println!("Tags of {id}: {shown}");
    Ok(())
}
