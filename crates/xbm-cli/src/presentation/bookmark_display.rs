//! Bookmark and cascade display helpers.

use xbm_core::{Bookmark, CascadeReport, StepOutcome};

use super::tables::truncate_string;

/// Comma-separated tag list, `--` when empty.
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "--".to_string()
    } else {
        tags.join(", ")
    }
}

/// Multi-line summary of one bookmark.
pub fn display_bookmark(bookmark: &Bookmark) {
    println!("{}", bookmark.id);
    println!("  Author: {}", bookmark.author_name);
    println!("  Text:   {}", truncate_string(&bookmark.text, 100));
    println!("  URL:    {}", bookmark.url);
    println!("  Tags:   {}", format_tags(&bookmark.tags));
    println!("  Saved:  {}", bookmark.saved_at);
}

pub fn display_cascade_report(report: &CascadeReport) {
    if report.cleared_tag_ids.is_empty() {
        println!("No tag named '{}'", report.tag_name);
    } else {
        println!(
            "Deleted tag '{}' ({})",
            report.tag_name,
            report.cleared_tag_ids.join(", ")
        );
    }
    for step in &report.steps {
        let status = match step.outcome {
            StepOutcome::Updated { .. } => "updated".to_string(),
            StepOutcome::Failed { ref error } => format!("failed: {error}"),
            StepOutcome::NotAttempted => "not attempted".to_string(),
        };
        println!("  {:<38} {status}", step.bookmark_id);
    }
}
