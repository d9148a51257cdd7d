//! Tag command handlers: list, add, delete.

use anyhow::Result;
use xbm_core::CoreError;

use crate::bootstrap::CliContext;
use crate::presentation::{display_cascade_report, print_separator};

pub async fn list(ctx: &CliContext) -> Result<()> {
    super::connect(ctx).await?;
    let tags = ctx.app().tags().load().await?;

    if tags.is_empty() {
        println!("No tags yet. Use 'xbm tag-add <name>' to create one.");
        return Ok(());
    }

    println!("{:<20} {:<26} ID", "Name", "Created");
    print_separator(84);
    for tag in tags {
        println!("{:<20} {:<26} {}", tag.name, tag.created_at, tag.id);
    }
    Ok(())
}

pub async fn add(ctx: &CliContext, name: &str) -> Result<()> {
    super::connect(ctx).await?;
    let tag = ctx.app().tags().add(name).await?;
    println!("Created tag '{}' ({})", tag.name, tag.id);
    Ok(())
}

/// Delete a tag; on partial failure the steps are printed before the error.
pub async fn delete(ctx: &CliContext, name: &str) -> Result<()> {
    super::connect(ctx).await?;
    match ctx.app().tags().delete(name).await {
        Ok(report) => {
            display_cascade_report(&report);
            Ok(())
        }
        Err(err) => {
            if let CoreError::Cascade(ref cascade) = err {
                if let Some(report) = cascade.report() {
                    display_cascade_report(report);
                }
            }
            Err(err.into())
        }
    }
}
