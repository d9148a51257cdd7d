//! Behavioural contract shared by every `EntityStore` backend.
//!
//! Each scenario takes a freshly initialised store and panics on the first
//! violated expectation. Adapter crates run all of them against their own
//! backend so that callers cannot tell backends apart by behaviour.
//!
//! Scenarios only touch records they create (ids prefixed `contract-`), so
//! seeded stores are fine.

use std::sync::Arc;

use crate::domain::{Bookmark, Tag};
use crate::ports::{EntityStore, EntityStoreExt, StoreError};
use crate::services::CascadeCoordinator;
use crate::table::{BookmarkField, Collection, Field};

pub fn sample_bookmark(id: &str, tags: &[&str]) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        url: format!("https://twitter.com/contract/status/{}", id.len()),
        author_name: "contract".to_string(),
        text: format!("contract bookmark {id}"),
        embedded_html: format!("<blockquote><p>contract bookmark {id}</p></blockquote>"),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        saved_at: "2026-02-20T00:00:00.000Z".to_string(),
    }
}

pub fn sample_tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
        created_at: "2026-02-01T00:00:00.000Z".to_string(),
    }
}

async fn bookmark_ids(store: &dyn EntityStore) -> Vec<String> {
    store
        .list_bookmarks()
        .await
        .expect("list bookmarks")
        .into_iter()
        .map(|b| b.id)
        .collect()
}

/// Two `init()` calls return the same identity.
pub async fn init_is_idempotent(store: Arc<dyn EntityStore>) {
    let first = store.init().await.expect("first init");
    let second = store.init().await.expect("second init");
    assert_eq!(first, second);
}

/// Targeted mutations on an absent id fail with `NotFound` for that id.
pub async fn missing_id_is_not_found(store: Arc<dyn EntityStore>) {
    let before = bookmark_ids(store.as_ref()).await;

    let err = store
        .set_bookmark_tags("contract-missing", &["x".to_string()])
        .await
        .expect_err("set_field on missing id");
    assert!(
        matches!(err, StoreError::NotFound { collection: Collection::Bookmarks, ref id } if id == "contract-missing"),
        "unexpected error: {err}"
    );

    let err = store
        .clear(Collection::Tags, "contract-missing")
        .await
        .expect_err("clear on missing id");
    assert!(
        matches!(err, StoreError::NotFound { collection: Collection::Tags, ref id } if id == "contract-missing"),
        "unexpected error: {err}"
    );

    let err = store
        .set_field("", Field::Bookmark(BookmarkField::Tags), "")
        .await
        .expect_err("empty id never matches");
    assert!(err.is_not_found());

    assert_eq!(bookmark_ids(store.as_ref()).await, before);
}

/// A cleared record disappears from `list()`; others are untouched.
pub async fn soft_delete_hides_record(store: Arc<dyn EntityStore>) {
    let keep = sample_bookmark("contract-keep", &["k"]);
    let gone = sample_bookmark("contract-gone", &[]);
    store.append_bookmark(&gone).await.expect("append gone");
    store.append_bookmark(&keep).await.expect("append keep");

    store.clear_bookmark("contract-gone").await.expect("clear");

    let listed = store.list_bookmarks().await.expect("list");
    assert!(listed.iter().all(|b| b.id != "contract-gone"));
    assert_eq!(listed.iter().find(|b| b.id == "contract-keep"), Some(&keep));

    let err = store
        .clear_bookmark("contract-gone")
        .await
        .expect_err("second clear");
    assert!(err.is_not_found());
}

/// Appends keep their order even when rows were cleared in between.
pub async fn appends_keep_order_across_clears(store: Arc<dyn EntityStore>) {
    store
        .append_bookmark(&sample_bookmark("contract-1", &[]))
        .await
        .expect("append 1");
    store
        .append_bookmark(&sample_bookmark("contract-tmp", &[]))
        .await
        .expect("append tmp");
    store
        .clear_bookmark("contract-tmp")
        .await
        .expect("clear tmp");
    store
        .append_bookmark(&sample_bookmark("contract-2", &[]))
        .await
        .expect("append 2");

    let ids: Vec<_> = bookmark_ids(store.as_ref())
        .await
        .into_iter()
        .filter(|id| id.starts_with("contract-"))
        .collect();
    assert_eq!(ids, vec!["contract-1", "contract-2"]);
}

/// A field write after an earlier clear hits the intended record.
pub async fn update_after_clear_targets_right_row(store: Arc<dyn EntityStore>) {
    for id in ["contract-a", "contract-b", "contract-c"] {
        store
            .append_bookmark(&sample_bookmark(id, &["old"]))
            .await
            .expect("append");
    }
    store.clear_bookmark("contract-a").await.expect("clear a");

    store
        .set_bookmark_tags("contract-c", &["new".to_string(), "tags".to_string()])
        .await
        .expect("retag c");

    let listed = store.list_bookmarks().await.expect("list");
    let tags_of = |id: &str| {
        listed
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.tags.clone())
            .expect("bookmark present")
    };
    assert_eq!(tags_of("contract-b"), vec!["old"]);
    assert_eq!(tags_of("contract-c"), vec!["new", "tags"]);
}

/// `append(A, [x, y])` then deleting `x` leaves `A.tags == [y]` and no tag `x`.
pub async fn cascade_removes_tag_everywhere(store: Arc<dyn EntityStore>) {
    store
        .append_tag(&sample_tag("contract-tag-x", "contract-x"))
        .await
        .expect("append tag x");
    store
        .append_tag(&sample_tag("contract-tag-y", "contract-y"))
        .await
        .expect("append tag y");
    store
        .append_bookmark(&sample_bookmark("contract-A", &["contract-x", "contract-y"]))
        .await
        .expect("append A");
    store
        .append_bookmark(&sample_bookmark("contract-B", &["contract-x"]))
        .await
        .expect("append B");

    let report = CascadeCoordinator::new(Arc::clone(&store))
        .delete_tag("contract-x")
        .await
        .expect("cascade");
    assert_eq!(report.cleared_tag_ids, vec!["contract-tag-x"]);
    assert!(report.is_complete());

    let bookmarks = store.list_bookmarks().await.expect("list bookmarks");
    assert!(bookmarks.iter().all(|b| !b.has_tag("contract-x")));
    let a = bookmarks.iter().find(|b| b.id == "contract-A").expect("A present");
    assert_eq!(a.tags, vec!["contract-y"]);

    let tags = store.list_tags().await.expect("list tags");
    assert!(tags.iter().all(|t| t.name != "contract-x"));
    assert!(tags.iter().any(|t| t.name == "contract-y"));

    let again = CascadeCoordinator::new(Arc::clone(&store))
        .delete_tag("contract-x")
        .await
        .expect("repeat cascade");
    assert!(again.cleared_tag_ids.is_empty());
    assert!(again.steps.is_empty());
}

/// Two live records sharing a name are both cleared by one deletion.
pub async fn duplicate_tag_records_are_all_cleared(store: Arc<dyn EntityStore>) {
    store
        .append_tag(&sample_tag("contract-dup-1", "contract-dup"))
        .await
        .expect("append first dup");
    store
        .append_tag(&sample_tag("contract-keep", "contract-keep"))
        .await
        .expect("append keep");
    store
        .append_tag(&sample_tag("contract-dup-2", "contract-dup"))
        .await
        .expect("append second dup");
    store
        .append_bookmark(&sample_bookmark("contract-D", &["contract-dup", "contract-keep"]))
        .await
        .expect("append D");

    let report = CascadeCoordinator::new(Arc::clone(&store))
        .delete_tag("contract-dup")
        .await
        .expect("cascade");
    assert_eq!(report.cleared_tag_ids, vec!["contract-dup-1", "contract-dup-2"]);
    assert!(report.is_complete());

    let tags = store.list_tags().await.expect("list tags");
    assert!(tags.iter().all(|t| t.name != "contract-dup"));
    assert!(tags.iter().any(|t| t.id == "contract-keep"));

    let bookmarks = store.list_bookmarks().await.expect("list bookmarks");
    let d = bookmarks.iter().find(|b| b.id == "contract-D").expect("D present");
    assert_eq!(d.tags, vec!["contract-keep"]);
}
