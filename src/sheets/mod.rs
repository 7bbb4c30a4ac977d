//! Read-only access to the schedule worksheet through the Google Sheets v4
//! `values.get` endpoint. The sheet is never written to; an API key is all
//! the credential the bot needs.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::schedule::record::RawRow;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com";

/// Client for one spreadsheet worksheet.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    sheet_id: String,
    worksheet: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl SheetsClient {
    pub fn new(sheet_id: &str, worksheet: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            sheet_id: sheet_id.to_string(),
            worksheet: worksheet.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetches the worksheet and returns its data rows keyed by the header
    /// row. Raises on auth/network failure; an empty worksheet is not an
    /// error.
    pub async fn get_rows(&self) -> Result<Vec<RawRow>> {
        let url = format!(
            "{SHEETS_API_BASE}/v4/spreadsheets/{}/values/{}",
            self.sheet_id, self.worksheet
        );
        let range: ValueRange = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .context("spreadsheet request failed")?
            .error_for_status()
            .context("spreadsheet request rejected")?
            .json()
            .await
            .context("malformed spreadsheet response")?;

        let rows = rows_from_values(range.values);
        tracing::info!(
            "Loaded {} rows from worksheet '{}'",
            rows.len(),
            self.worksheet
        );
        Ok(rows)
    }
}

// First row is the header; short data rows are padded with empty cells and
// cells beyond the header width are dropped.
fn rows_from_values(values: Vec<Vec<serde_json::Value>>) -> Vec<RawRow> {
    let mut iter = values.into_iter();
    let headers: Vec<String> = match iter.next() {
        Some(header_row) => header_row.iter().map(cell_text).collect(),
        None => return Vec::new(),
    };
    iter.map(|row| {
        headers
            .iter()
            .cloned()
            .zip(
                row.iter()
                    .map(cell_text)
                    .chain(std::iter::repeat(String::new())),
            )
            .collect()
    })
    .collect()
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
