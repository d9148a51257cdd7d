//! Init command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext) -> Result<()> {
    let id = super::connect(ctx).await?;
    println!("Store ready ({} backend): {id}", ctx.app().backend_name());
    Ok(())
}
