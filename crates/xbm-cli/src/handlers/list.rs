//! List command handler.
//!
//! Loads every live bookmark and prints those matching the filter.

use anyhow::Result;
use xbm_core::BookmarkFilter;

use crate::bootstrap::CliContext;
use crate::presentation::{format_tags, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, search: Option<String>, tag: Option<String>) -> Result<()> {
    super::connect(ctx).await?;
    let total = ctx.app().bookmarks().load().await?.len();

    let mut filter = BookmarkFilter::new();
    if let Some(query) = search {
        filter = filter.with_query(query);
    }
    if let Some(tag) = tag {
        filter = filter.with_tag(tag);
    }
    let bookmarks = ctx.app().bookmarks().filtered(&filter).await;

    if bookmarks.is_empty() {
        if total == 0 {
            println!("No bookmarks yet.");
            println!("Use 'xbm add <url>' to save your first post.");
        } else {
            println!("No bookmarks match ({total} in store).");
        }
        return Ok(());
    }

    println!("Showing {} of {total} bookmark(s):\n", bookmarks.len());
    println!("{:<36} {:<20} {:<20} Text", "ID", "Author", "Tags");
    print_separator(110);
    for bookmark in &bookmarks {
        println!(
            "{:<36} {:<20} {:<20} {}",
            bookmark.id,
            truncate_string(&bookmark.author_name, 19),
            truncate_string(&format_tags(&bookmark.tags), 19),
            truncate_string(&bookmark.text, 40),
        );
    }

    Ok(())
}
