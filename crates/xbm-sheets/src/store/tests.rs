use std::sync::Arc;

use serde_json::json;
use xbm_core::testing;
use xbm_core::{CascadeCoordinator, CascadeError, EntityStoreExt, StoreError};

use super::*;
use crate::http::Method;
use crate::testing::FakeSheetsBackend;

fn config() -> SheetsClientConfig {
    SheetsClientConfig::new()
        .with_sheets_url("https://sheets.test/v4/spreadsheets")
        .with_drive_url("https://drive.test/drive/v3/files")
}

fn store_on(fake: &FakeSheetsBackend) -> SheetsStore<FakeSheetsBackend> {
    SheetsStore::with_backend(&config(), fake.clone())
}

async fn initialised(fake: &FakeSheetsBackend) -> Arc<SheetsStore<FakeSheetsBackend>> {
    let store = Arc::new(store_on(fake));
    store.init().await.unwrap();
    store
}

fn put_ranges(fake: &FakeSheetsBackend) -> Vec<String> {
    fake.requests()
        .into_iter()
        .filter(|r| r.method == Method::Put)
        .map(|r| r.url.path().rsplit('/').next().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_init_creates_store_with_headers_once() {
    let fake = FakeSheetsBackend::new();
    let store = store_on(&fake);

    let id = store.init().await.unwrap();
    assert_eq!(id, StoreId::new("fake-sheet-1"));
    assert_eq!(fake.spreadsheet_count(), 1);
    assert_eq!(
        fake.sheet_rows("fake-sheet-1", "bookmarks"),
        vec![Collection::Bookmarks.header_row()]
    );
    assert_eq!(
        fake.sheet_rows("fake-sheet-1", "tags"),
        vec![Collection::Tags.header_row()]
    );

    let requests = fake.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[1].body.as_ref().unwrap()["properties"]["title"], "X Bookmark Manager");
    assert!(!requests[1].idempotent);
    assert_eq!(put_ranges(&fake), vec!["bookmarks!A1:G1", "tags!A1:C1"]);

    fake.reset_requests();
    assert_eq!(store.init().await.unwrap(), id);
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_init_reuses_existing_store_by_title() {
    let fake = FakeSheetsBackend::new();
    let first = store_on(&fake).init().await.unwrap();

    fake.reset_requests();
    let second = store_on(&fake).init().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(fake.spreadsheet_count(), 1);
    assert_eq!(fake.write_count(), 0);
    assert_eq!(fake.sheet_rows(first.as_str(), "bookmarks").len(), 1);
}

#[tokio::test]
async fn test_configured_store_id_skips_lookup() {
    let fake = FakeSheetsBackend::new();
    let store = SheetsStore::with_backend(
        &config().with_store_id(Some(StoreId::new("known"))),
        fake.clone(),
    );
    assert_eq!(store.init().await.unwrap(), StoreId::new("known"));
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_operations_before_init_are_config_errors() {
    let fake = FakeSheetsBackend::new();
    let store = store_on(&fake);
    let err = store.list(Collection::Tags).await.unwrap_err();
    assert!(matches!(err, StoreError::Config(ref e) if e.missing_key == "store_id"));
    assert!(fake.requests().is_empty());
}

#[test]
fn test_new_requires_token() {
    let err = DefaultSheetsStore::new(&SheetsClientConfig::new()).err().unwrap();
    assert!(matches!(err, StoreError::Config(_)));
    assert!(DefaultSheetsStore::new(&SheetsClientConfig::new().with_token("t")).is_ok());
}

#[tokio::test]
async fn test_set_field_missing_id_makes_no_write() {
    let fake = FakeSheetsBackend::new();
    let store = initialised(&fake).await;
    store
        .append_bookmark(&testing::sample_bookmark("present", &["x"]))
        .await
        .unwrap();
    fake.reset_requests();

    let err = store
        .set_bookmark_tags("missingId", &["y".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { ref id, .. } if id == "missingId"));

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(fake.write_count(), 0);
}

#[tokio::test]
async fn test_append_sends_full_row_once() {
    let fake = FakeSheetsBackend::new();
    let store = initialised(&fake).await;
    fake.reset_requests();

    let bookmark = testing::sample_bookmark("b-1", &["x", "y"]);
    store.append_bookmark(&bookmark).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let append = &requests[0];
    assert_eq!(append.method, Method::Post);
    assert!(!append.idempotent);
    assert!(append.url.path().ends_with("bookmarks!A1:G1:append"));
    assert_eq!(
        append.url.query(),
        Some("valueInputOption=RAW&insertDataOption=INSERT_ROWS")
    );
    assert_eq!(append.body.as_ref().unwrap()["values"][0][5], json!("x,y"));
}

#[tokio::test]
async fn test_clear_leaves_gap_and_later_rows_stay_addressable() {
    let fake = FakeSheetsBackend::new();
    let store = initialised(&fake).await;
    for id in ["a", "b", "c"] {
        store
            .append_bookmark(&testing::sample_bookmark(id, &[]))
            .await
            .unwrap();
    }

    store.clear_bookmark("a").await.unwrap();
    let raw = fake.sheet_rows("fake-sheet-1", "bookmarks");
    assert_eq!(raw.len(), 4);
    assert!(raw[1].iter().all(String::is_empty));

    fake.reset_requests();
    store
        .set_bookmark_tags("c", &["late".to_string()])
        .await
        .unwrap();
    assert_eq!(put_ranges(&fake), vec!["bookmarks!F4"]);

    let listed = store.list_bookmarks().await.unwrap();
    assert_eq!(listed.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), vec!["b", "c"]);
    assert_eq!(listed[1].tags, vec!["late"]);

    fake.reset_requests();
    store.clear_bookmark("c").await.unwrap();
    let clear = fake.requests().pop().unwrap();
    assert!(clear.url.path().ends_with("bookmarks!A4:G4:clear"));
    assert!(clear.idempotent);
}

#[tokio::test]
async fn test_backend_failure_surfaces_status_and_body() {
    let fake = FakeSheetsBackend::new();
    let store = initialised(&fake).await;
    store
        .append_bookmark(&testing::sample_bookmark("a", &[]))
        .await
        .unwrap();
    fake.fail_when(Method::Put, "bookmarks!F", 403, 1);

    let err = store
        .set_bookmark_tags("a", &["x".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Backend { status: 403, ref body } if body == "injected failure"
    ));
}

#[tokio::test]
async fn test_cascade_issues_one_write_per_affected_bookmark() {
    let fake = FakeSheetsBackend::new();
    let store = initialised(&fake).await;
    store.append_tag(&testing::sample_tag("t-x", "x")).await.unwrap();
    for (id, tags) in [("A", vec!["x", "y"]), ("B", vec!["y"]), ("C", vec!["x"])] {
        store
            .append_bookmark(&testing::sample_bookmark(id, &tags))
            .await
            .unwrap();
    }
    fake.reset_requests();

    let report = CascadeCoordinator::new(store.clone())
        .delete_tag("x")
        .await
        .unwrap();
    assert_eq!(report.updated().collect::<Vec<_>>(), vec!["A", "C"]);

    // tags list, tag clear, tags recheck, bookmarks list, then locate + write per bookmark
    assert_eq!(fake.write_count(), 3);
    assert_eq!(put_ranges(&fake), vec!["bookmarks!F2", "bookmarks!F4"]);

    let listed = store.list_bookmarks().await.unwrap();
    assert_eq!(listed[0].tags, vec!["y"]);
    assert!(listed[2].tags.is_empty());
    assert!(store.list_tags().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cascade_partial_failure_is_reported() {
    let fake = FakeSheetsBackend::new();
    let store = initialised(&fake).await;
    store.append_tag(&testing::sample_tag("t-x", "x")).await.unwrap();
    for id in ["A", "B", "C"] {
        store
            .append_bookmark(&testing::sample_bookmark(id, &["x"]))
            .await
            .unwrap();
    }
    fake.fail_when(Method::Put, "bookmarks!F3", 500, 1);

    let err = CascadeCoordinator::new(store.clone())
        .delete_tag("x")
        .await
        .unwrap_err();
    let CascadeError::Partial { report, source } = err else {
        panic!("expected partial failure");
    };
    assert!(matches!(source, StoreError::Backend { status: 500, .. }));
    assert_eq!(report.updated().collect::<Vec<_>>(), vec!["A"]);
    assert_eq!(report.failed().collect::<Vec<_>>(), vec!["B"]);
    assert_eq!(report.not_attempted().collect::<Vec<_>>(), vec!["C"]);

    // Tag record is gone while B and C still reference it.
    assert!(store.list_tags().await.unwrap().is_empty());
    let stale = store
        .list_bookmarks()
        .await
        .unwrap()
        .into_iter()
        .filter(|b| b.has_tag("x"))
        .count();
    assert_eq!(stale, 2);
}

async fn fresh() -> Arc<dyn EntityStore> {
    initialised(&FakeSheetsBackend::new()).await as Arc<dyn EntityStore>
}

#[tokio::test]
async fn test_contract_scenarios() {
    testing::init_is_idempotent(fresh().await).await;
    testing::missing_id_is_not_found(fresh().await).await;
    testing::soft_delete_hides_record(fresh().await).await;
    testing::appends_keep_order_across_clears(fresh().await).await;
    testing::update_after_clear_targets_right_row(fresh().await).await;
    testing::cascade_removes_tag_everywhere(fresh().await).await;
    testing::duplicate_tag_records_are_all_cleared(fresh().await).await;
}
