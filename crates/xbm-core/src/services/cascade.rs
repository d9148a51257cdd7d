//! Tag deletion cascade.
//!
//! Deleting a tag is a saga over independent store calls:
//!
//! 1. Clear every tag record with the name (absent is a no-op)
//! 2. List bookmarks
//! 3. For every bookmark carrying the name, overwrite its tag list
//!
//! Steps run sequentially, one store call per affected bookmark. Nothing is
//! rolled back or retried: the first failure stops the saga and is returned
//! together with the per-bookmark outcomes recorded so far.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ports::{EntityStore, EntityStoreExt, StoreError};

/// Outcome of one bookmark update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Tag list was overwritten with `tags`.
    Updated { tags: Vec<String> },
    /// The update failed; the bookmark still carries the tag.
    Failed { error: String },
    /// Skipped because an earlier step failed.
    NotAttempted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    pub bookmark_id: String,
    pub outcome: StepOutcome,
}

/// Structured result of a tag deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeReport {
    pub tag_name: String,
    /// Ids of the cleared tag records, in clear order. Empty if no live
    /// record had the name.
    pub cleared_tag_ids: Vec<String>,
    /// One step per bookmark that referenced the tag, in storage order.
    pub steps: Vec<CascadeStep>,
}

impl CascadeReport {
    fn new(tag_name: &str, cleared_tag_ids: Vec<String>) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            cleared_tag_ids,
            steps: Vec::new(),
        }
    }

    /// Ids of bookmarks whose tag list was rewritten.
    pub fn updated(&self) -> impl Iterator<Item = &str> {
        self.ids_where(|o| matches!(o, StepOutcome::Updated { .. }))
    }

    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.ids_where(|o| matches!(o, StepOutcome::Failed { .. }))
    }

    pub fn not_attempted(&self) -> impl Iterator<Item = &str> {
        self.ids_where(|o| matches!(o, StepOutcome::NotAttempted))
    }

    /// Bookmarks that still carry the deleted tag.
    pub fn remaining(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| !matches!(s.outcome, StepOutcome::Updated { .. }))
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    fn ids_where(&self, pred: impl Fn(&StepOutcome) -> bool) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .filter(move |s| pred(&s.outcome))
            .map(|s| s.bookmark_id.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CascadeError {
    /// Step 1 failed; nothing was changed.
    #[error("Failed to delete tag '{name}': {source}")]
    TagNotCleared {
        name: String,
        #[source]
        source: StoreError,
    },

    /// The tag record is gone but some bookmarks still reference it.
    #[error(
        "Tag '{}' deleted but {} bookmark(s) still reference it: {source}",
        .report.tag_name,
        .report.remaining()
    )]
    Partial {
        report: Box<CascadeReport>,
        #[source]
        source: StoreError,
    },
}

impl CascadeError {
    /// The partial report, if the tag record was already cleared.
    pub fn report(&self) -> Option<&CascadeReport> {
        match self {
            Self::TagNotCleared { .. } => None,
            Self::Partial { report, .. } => Some(report),
        }
    }
}

/// Runs the tag deletion saga against any `EntityStore`.
pub struct CascadeCoordinator {
    store: Arc<dyn EntityStore>,
}

impl CascadeCoordinator {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Delete the tag `name` and strip it from every bookmark.
    ///
    /// Deleting a tag that no longer exists still sweeps bookmarks, so a
    /// retry after a partial failure finishes the job.
    pub async fn delete_tag(&self, name: &str) -> Result<CascadeReport, CascadeError> {
        let cleared_tag_ids = self.clear_tag_records(name).await?;
        let mut report = CascadeReport::new(name, cleared_tag_ids);

        let bookmarks = match self.store.list_bookmarks().await {
            Ok(bookmarks) => bookmarks,
            Err(source) => {
                warn!(target: "xbm.cascade", tag = %name, error = %source, "Listing bookmarks failed after tag was cleared");
                return Err(CascadeError::Partial {
                    report: Box::new(report),
                    source,
                });
            }
        };

        let affected: Vec<_> = bookmarks.into_iter().filter(|b| b.has_tag(name)).collect();
        debug!(target: "xbm.cascade", tag = %name, affected = affected.len(), "Stripping tag from bookmarks");

        let mut failure = None;
        for bookmark in &affected {
            if failure.is_some() {
                report.steps.push(CascadeStep {
                    bookmark_id: bookmark.id.clone(),
                    outcome: StepOutcome::NotAttempted,
                });
                continue;
            }

            let tags = bookmark.tags_without(name);
            let outcome = match self.store.set_bookmark_tags(&bookmark.id, &tags).await {
                Ok(()) => StepOutcome::Updated { tags },
                Err(e) => {
                    warn!(target: "xbm.cascade", tag = %name, id = %bookmark.id, error = %e, "Bookmark update failed, stopping cascade");
                    let outcome = StepOutcome::Failed {
                        error: e.to_string(),
                    };
                    failure = Some(e);
                    outcome
                }
            };
            report.steps.push(CascadeStep {
                bookmark_id: bookmark.id.clone(),
                outcome,
            });
        }

        if let Some(source) = failure {
            return Err(CascadeError::Partial {
                report: Box::new(report),
                source,
            });
        }

        info!(
            target: "xbm.cascade",
            tag = %name,
            cleared = report.cleared_tag_ids.len(),
            updated = report.steps.len(),
            "Tag deleted"
        );
        Ok(report)
    }

    /// Clear every live record named `name`.
    ///
    /// Each clear is preceded by a fresh listing, so duplicates created by
    /// concurrent adds or direct sheet edits are removed too.
    async fn clear_tag_records(&self, name: &str) -> Result<Vec<String>, CascadeError> {
        let not_cleared = |source| CascadeError::TagNotCleared {
            name: name.to_string(),
            source,
        };

        let mut cleared = Vec::new();
        let mut seen = HashSet::new();
        loop {
            let tags = self.store.list_tags().await.map_err(not_cleared)?;
            let Some(tag) = tags
                .into_iter()
                .find(|t| t.name == name && !seen.contains(&t.id))
            else {
                break;
            };
            seen.insert(tag.id.clone());

            match self.store.clear_tag(&tag.id).await {
                Ok(()) => cleared.push(tag.id),
                // Cleared concurrently between list and clear.
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(not_cleared(e)),
            }
        }

        if cleared.is_empty() {
            debug!(target: "xbm.cascade", tag = %name, "No live tag record, skipping clear");
        }
        Ok(cleared)
    }
}
