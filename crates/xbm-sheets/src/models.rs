//! Wire types for the Sheets v4 and Drive v3 endpoints the store uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use xbm_core::{Collection, Row};

/// `values/{range}` GET response. `values` is omitted for an empty range.
#[derive(Debug, Default, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Rows as strings. Non-string cells (numbers, booleans) are rendered.
    pub fn into_rows(self) -> Vec<Row> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Body for update and append calls.
#[derive(Debug, Serialize)]
pub struct ValuesBody<'a> {
    pub values: Vec<&'a [String]>,
}

impl<'a> ValuesBody<'a> {
    pub fn single(row: &'a [String]) -> Self {
        Self { values: vec![row] }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DriveFileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SheetProperties {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct SheetSpec {
    pub properties: SheetProperties,
}

/// `POST /spreadsheets` body with one sheet per collection.
#[derive(Debug, Serialize)]
pub struct CreateSpreadsheet {
    pub properties: SheetProperties,
    pub sheets: Vec<SheetSpec>,
}

impl CreateSpreadsheet {
    pub fn new(title: &str) -> Self {
        Self {
            properties: SheetProperties {
                title: title.to_string(),
            },
            sheets: Collection::ALL
                .iter()
                .map(|c| SheetSpec {
                    properties: SheetProperties {
                        title: c.name().to_string(),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSpreadsheet {
    pub spreadsheet_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_range_missing_values() {
        let range: ValueRange = serde_json::from_value(json!({"range": "tags!A2:C"})).unwrap();
        assert!(range.into_rows().is_empty());
    }

    #[test]
    fn test_value_range_keeps_empty_rows() {
        let range: ValueRange = serde_json::from_value(json!({
            "values": [["a", "x"], [], ["b", 42, true]]
        }))
        .unwrap();
        let rows = range.into_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2], vec!["b", "42", "true"]);
    }

    #[test]
    fn test_create_body_shape() {
        let body = serde_json::to_value(CreateSpreadsheet::new("X Bookmark Manager")).unwrap();
        assert_eq!(
            body,
            json!({
                "properties": {"title": "X Bookmark Manager"},
                "sheets": [
                    {"properties": {"title": "bookmarks"}},
                    {"properties": {"title": "tags"}}
                ]
            })
        );
    }

    #[test]
    fn test_values_body_shape() {
        let row = vec!["t1".to_string(), "tech".to_string()];
        let body = serde_json::to_value(ValuesBody::single(&row)).unwrap();
        assert_eq!(body, json!({"values": [["t1", "tech"]]}));
    }

    #[test]
    fn test_created_spreadsheet_is_camel_case() {
        let created: CreatedSpreadsheet =
            serde_json::from_value(json!({"spreadsheetId": "abc", "properties": {}})).unwrap();
        assert_eq!(created.spreadsheet_id, "abc");
    }
}
