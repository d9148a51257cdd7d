//! URL and A1-range construction for the Sheets and Drive APIs.
//!
//! Pure functions; every request URL the store sends is built here.

use url::Url;
use xbm_core::{Collection, Field, HEADER_ROWS};

use crate::error::SheetsResult;

const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

/// Spreadsheet column letter for a zero-based index (`0 -> A`, `26 -> AA`).
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        // rem < 26
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn last_column(collection: Collection) -> String {
    column_letter(collection.width() - 1)
}

/// Header row range, e.g. `bookmarks!A1:G1`.
pub fn header_range(collection: Collection) -> String {
    format!("{}!A1:{}1", collection.name(), last_column(collection))
}

/// Open-ended data range below the header, e.g. `bookmarks!A2:G`.
pub fn data_range(collection: Collection) -> String {
    format!(
        "{}!A{}:{}",
        collection.name(),
        HEADER_ROWS + 1,
        last_column(collection)
    )
}

/// Full width of one physical row, e.g. `bookmarks!A5:G5`.
pub fn row_range(collection: Collection, row: usize) -> String {
    format!(
        "{}!A{row}:{}{row}",
        collection.name(),
        last_column(collection)
    )
}

/// Single cell of one field, e.g. `bookmarks!F5`.
pub fn cell_range(field: Field, row: usize) -> String {
    format!(
        "{}!{}{row}",
        field.collection().name(),
        column_letter(field.column())
    )
}

fn join_path(base: &str, tail: &str) -> SheetsResult<Url> {
    Ok(Url::parse(&format!("{}/{tail}", base.trim_end_matches('/')))?)
}

/// `POST {sheets}` creates a spreadsheet.
pub fn create_url(sheets_base: &str) -> SheetsResult<Url> {
    Ok(Url::parse(sheets_base.trim_end_matches('/'))?)
}

/// `values/{range}` for reads.
pub fn values_url(sheets_base: &str, spreadsheet_id: &str, range: &str) -> SheetsResult<Url> {
    join_path(sheets_base, &format!("{spreadsheet_id}/values/{range}"))
}

/// `values/{range}?valueInputOption=RAW` for overwriting writes.
pub fn update_url(sheets_base: &str, spreadsheet_id: &str, range: &str) -> SheetsResult<Url> {
    let mut url = values_url(sheets_base, spreadsheet_id, range)?;
    url.set_query(Some("valueInputOption=RAW"));
    Ok(url)
}

/// `values/{range}:append` inserting new rows after the last populated row.
pub fn append_url(sheets_base: &str, spreadsheet_id: &str, range: &str) -> SheetsResult<Url> {
    let mut url = join_path(
        sheets_base,
        &format!("{spreadsheet_id}/values/{range}:append"),
    )?;
    url.set_query(Some("valueInputOption=RAW&insertDataOption=INSERT_ROWS"));
    Ok(url)
}

/// `values/{range}:clear`.
pub fn clear_url(sheets_base: &str, spreadsheet_id: &str, range: &str) -> SheetsResult<Url> {
    join_path(
        sheets_base,
        &format!("{spreadsheet_id}/values/{range}:clear"),
    )
}

/// Drive query matching live spreadsheets with exactly `title`.
pub fn drive_query(title: &str) -> String {
    let escaped = title.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name='{escaped}' and mimeType='{SPREADSHEET_MIME}' and trashed=false")
}

/// Drive file search for a spreadsheet by title.
pub fn drive_search_url(drive_base: &str, title: &str) -> SheetsResult<Url> {
    let mut url = Url::parse(drive_base.trim_end_matches('/'))?;
    url.set_query(Some(&format!(
        "q={}&fields=files(id,name)",
        urlencoding::encode(&drive_query(title))
    )));
    Ok(url)
}
