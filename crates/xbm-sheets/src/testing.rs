//! In-memory spreadsheet emulator for tests.
//!
//! `FakeSheetsBackend` interprets the same URLs and bodies the real API
//! receives, keeps every sheet as a grid of string cells and records each
//! request so tests can assert which calls were (or were not) made.
//!
//! Appends land after the last row holding any non-empty cell, matching the
//! API's table detection for a range anchored at `A1`.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{Value, json};
use xbm_core::Row;

use crate::error::{SheetsError, SheetsResult};
use crate::http::{ApiRequest, HttpBackend, Method};

#[derive(Debug, Clone)]
struct FakeSpreadsheet {
    id: String,
    title: String,
    /// Sheet name to rows; index 0 is physical row 1.
    sheets: BTreeMap<String, Vec<Row>>,
}

#[derive(Debug, Clone)]
struct FailureRule {
    method: Method,
    url_contains: String,
    status: u16,
    remaining: usize,
}

#[derive(Debug, Default)]
struct State {
    spreadsheets: Vec<FakeSpreadsheet>,
    requests: Vec<ApiRequest>,
    failures: Vec<FailureRule>,
    created: usize,
}

/// Shared handle to an emulated spreadsheet account. Clones see the same state.
#[derive(Debug, Clone, Default)]
pub struct FakeSheetsBackend {
    state: Arc<Mutex<State>>,
}

impl FakeSheetsBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing spreadsheet with the given sheets (header row first).
    #[must_use]
    pub fn with_spreadsheet(self, id: &str, title: &str, sheets: &[(&str, Vec<Row>)]) -> Self {
        self.lock().spreadsheets.push(FakeSpreadsheet {
            id: id.to_string(),
            title: title.to_string(),
            sheets: sheets
                .iter()
                .map(|(name, rows)| ((*name).to_string(), rows.clone()))
                .collect(),
        });
        self
    }

    /// Fail the next `times` requests whose method matches and whose URL
    /// contains `url_contains` with `status`.
    pub fn fail_when(&self, method: Method, url_contains: &str, status: u16, times: usize) {
        self.lock().failures.push(FailureRule {
            method,
            url_contains: url_contains.to_string(),
            status,
            remaining: times,
        });
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn write_count(&self) -> usize {
        self.lock().requests.iter().filter(|r| r.is_write()).count()
    }

    pub fn reset_requests(&self) {
        self.lock().requests.clear();
    }

    pub fn spreadsheet_count(&self) -> usize {
        self.lock().spreadsheets.len()
    }

    /// Raw rows of one sheet, header included, or empty if absent.
    pub fn sheet_rows(&self, spreadsheet_id: &str, sheet: &str) -> Vec<Row> {
        self.lock()
            .spreadsheets
            .iter()
            .find(|s| s.id == spreadsheet_id)
            .and_then(|s| s.sheets.get(sheet).cloned())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn api_error(status: u16, body: impl Into<String>) -> SheetsError {
    SheetsError::Api {
        status,
        body: body.into(),
    }
}

// ============================================================================
// A1 notation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellRef {
    /// Zero-based column.
    col: usize,
    /// One-based row, absent for open-ended ranges like `A2:G`.
    row: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct A1Range {
    sheet: String,
    start: CellRef,
    end: CellRef,
}

fn parse_cell(s: &str) -> Option<CellRef> {
    let split = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
    let (letters, digits) = s.split_at(split);
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let col = letters
        .bytes()
        .fold(0usize, |acc, b| acc * 26 + usize::from(b - b'A' + 1))
        - 1;
    let row = if digits.is_empty() {
        None
    } else {
        Some(digits.parse().ok()?)
    };
    Some(CellRef { col, row })
}

fn parse_range(raw: &str) -> Option<A1Range> {
    let (sheet, cells) = raw.split_once('!')?;
    let (start, end) = match cells.split_once(':') {
        Some((a, b)) => (parse_cell(a)?, parse_cell(b)?),
        None => {
            let cell = parse_cell(cells)?;
            (cell, cell)
        }
    };
    Some(A1Range {
        sheet: sheet.to_string(),
        start,
        end,
    })
}

// ============================================================================
// Sheet operations
// ============================================================================

fn is_blank(row: &[String]) -> bool {
    row.iter().all(String::is_empty)
}

fn write_cells(rows: &mut Vec<Row>, row_index: usize, col: usize, values: &[String]) {
    if rows.len() <= row_index {
        rows.resize(row_index + 1, Vec::new());
    }
    let row = &mut rows[row_index];
    if row.len() < col + values.len() {
        row.resize(col + values.len(), String::new());
    }
    row[col..col + values.len()].clone_from_slice(values);
}

fn read_range(rows: &[Row], range: &A1Range) -> Vec<Vec<String>> {
    let first = range.start.row.unwrap_or(1).saturating_sub(1);
    let last = range.end.row.map_or(rows.len(), |r| r.min(rows.len()));
    let mut out: Vec<Vec<String>> = rows
        .get(first..last.max(first))
        .unwrap_or_default()
        .iter()
        .map(|row| {
            let end = (range.end.col + 1).min(row.len());
            let mut cells: Vec<String> = row.get(range.start.col..end).unwrap_or_default().to_vec();
            while cells.last().is_some_and(String::is_empty) {
                cells.pop();
            }
            cells
        })
        .collect();
    while out.last().is_some_and(Vec::is_empty) {
        out.pop();
    }
    out
}

fn body_values(request: &ApiRequest) -> SheetsResult<Vec<Vec<String>>> {
    let values = request
        .body
        .as_ref()
        .and_then(|b| b.get("values"))
        .cloned()
        .ok_or_else(|| api_error(400, "missing values"))?;
    Ok(serde_json::from_value(values)?)
}

impl State {
    fn take_failure(&mut self, request: &ApiRequest) -> Option<SheetsError> {
        let url = request.url.as_str();
        let rule = self.failures.iter_mut().find(|r| {
            r.remaining > 0 && r.method == request.method && url.contains(&r.url_contains)
        })?;
        rule.remaining -= 1;
        Some(api_error(rule.status, "injected failure"))
    }

    fn handle(&mut self, request: &ApiRequest) -> SheetsResult<Value> {
        let path = request.url.path().to_string();
        if path.ends_with("/files") {
            return Ok(self.drive_search(request));
        }

        let Some((_, rest)) = path.split_once("/spreadsheets") else {
            return Err(api_error(404, format!("unknown endpoint {path}")));
        };
        let rest = rest.trim_start_matches('/');
        if rest.is_empty() {
            return match request.method {
                Method::Post => self.create(request),
                _ => Err(api_error(405, "method not allowed")),
            };
        }

        let Some((id, raw_range)) = rest.split_once("/values/") else {
            return Err(api_error(404, format!("unknown endpoint {path}")));
        };
        let decoded = urlencoding::decode(raw_range)
            .map_err(|e| api_error(400, e.to_string()))?
            .into_owned();
        let (range_str, action) = match decoded.rsplit_once(':') {
            Some((r, a)) if a == "append" || a == "clear" => (r.to_string(), Some(a.to_string())),
            _ => (decoded.clone(), None),
        };
        let range =
            parse_range(&range_str).ok_or_else(|| api_error(400, format!("Unable to parse range: {range_str}")))?;

        let spreadsheet = self
            .spreadsheets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| api_error(404, format!("Requested entity was not found: {id}")))?;
        let rows = spreadsheet
            .sheets
            .get_mut(&range.sheet)
            .ok_or_else(|| api_error(400, format!("Unable to parse range: {range_str}")))?;

        match (request.method, action.as_deref()) {
            (Method::Get, None) => {
                let values = read_range(rows, &range);
                if values.is_empty() {
                    Ok(json!({ "range": range_str, "majorDimension": "ROWS" }))
                } else {
                    Ok(json!({ "range": range_str, "majorDimension": "ROWS", "values": values }))
                }
            }
            (Method::Put, None) => {
                let start_row = range.start.row.ok_or_else(|| api_error(400, "row required"))?;
                let values = body_values(request)?;
                for (offset, row_values) in values.iter().enumerate() {
                    write_cells(rows, start_row - 1 + offset, range.start.col, row_values);
                }
                Ok(json!({ "updatedRange": range_str }))
            }
            (Method::Post, Some("append")) => {
                let values = body_values(request)?;
                let after = rows.iter().rposition(|r| !is_blank(r)).map_or(0, |i| i + 1);
                for (offset, row_values) in values.iter().enumerate() {
                    let index = after + offset;
                    if index < rows.len() {
                        rows.insert(index, Vec::new());
                    }
                    write_cells(rows, index, range.start.col, row_values);
                }
                Ok(json!({ "updates": { "updatedRows": values.len() } }))
            }
            (Method::Post, Some("clear")) => {
                let first = range.start.row.unwrap_or(1);
                let last = range.end.row.unwrap_or(rows.len());
                for row in rows.iter_mut().take(last).skip(first - 1) {
                    let end = (range.end.col + 1).min(row.len());
                    for cell in row.iter_mut().take(end).skip(range.start.col) {
                        cell.clear();
                    }
                }
                Ok(json!({ "clearedRange": range_str }))
            }
            _ => Err(api_error(405, "method not allowed")),
        }
    }

    fn create(&mut self, request: &ApiRequest) -> SheetsResult<Value> {
        let body = request.body.clone().unwrap_or(Value::Null);
        let title = body["properties"]["title"]
            .as_str()
            .unwrap_or("Untitled spreadsheet")
            .to_string();
        let sheets = body["sheets"]
            .as_array()
            .map(|sheets| {
                sheets
                    .iter()
                    .filter_map(|s| s["properties"]["title"].as_str())
                    .map(|name| (name.to_string(), Vec::new()))
                    .collect()
            })
            .unwrap_or_default();

        self.created += 1;
        let id = format!("fake-sheet-{}", self.created);
        self.spreadsheets.push(FakeSpreadsheet {
            id: id.clone(),
            title: title.clone(),
            sheets,
        });
        Ok(json!({ "spreadsheetId": id, "properties": { "title": title } }))
    }

    fn drive_search(&self, request: &ApiRequest) -> Value {
        let query = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();
        let wanted = query
            .strip_prefix("name='")
            .and_then(|rest| rest.split_once("' and "))
            .map(|(name, _)| name.replace("\\'", "'"));

        let files: Vec<Value> = self
            .spreadsheets
            .iter()
            .filter(|s| wanted.as_deref() == Some(s.title.as_str()))
            .map(|s| json!({ "id": s.id, "name": s.title }))
            .collect();
        json!({ "files": files })
    }
}

#[async_trait]
impl HttpBackend for FakeSheetsBackend {
    async fn execute(&self, request: &ApiRequest) -> SheetsResult<Value> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        if let Some(err) = state.take_failure(request) {
            return Err(err);
        }
        state.handle(request)
    }
}
