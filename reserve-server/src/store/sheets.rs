//! Google-Sheets-style REST store client (no SDK dependency)

use async_trait::async_trait;
use serde::Deserialize;
use shared::error::{AppError, AppResult};

use super::SheetStore;
use crate::core::Config;

/// HTTP client for the spreadsheet REST API.
///
/// Holds no per-request state; one instance is constructed at startup and
/// injected into [`crate::core::ServerState`].
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    sheet_name: String,
    api_token: String,
}

/// Response body of the `values` read endpoints
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Convert a 1-based column number to its A1 letter form (1 -> A, 27 -> AA).
fn col_to_a1(col: u32) -> String {
    debug_assert!(col >= 1);
    let mut col = col;
    let mut letters = Vec::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        letters.push(b'A' + rem);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).expect("ASCII letters")
}

impl SheetsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.sheets_base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: config.sheets_spreadsheet_id.clone(),
            sheet_name: config.sheet_name.clone(),
            api_token: config.sheets_api_token.clone(),
        }
    }

    fn values_url(&self, range: &str, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}{}",
            self.base_url,
            self.spreadsheet_id,
            urlencoding::encode(range),
            suffix
        )
    }

    async fn read_range(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let url = self.values_url(range, "");
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| AppError::store_read(format!("store request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::store_read(format!(
                "store returned {} for range {range}",
                response.status()
            )));
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| AppError::store_read(format!("invalid store response: {e}")))?;
        Ok(body.values)
    }
}

#[async_trait]
impl SheetStore for SheetsClient {
    async fn read_header_row(&self) -> AppResult<Vec<String>> {
        let range = format!("{}!1:1", self.sheet_name);
        let mut rows = self.read_range(&range).await?;
        if rows.is_empty() {
            return Err(AppError::store_read("store has no header row"));
        }
        Ok(rows.remove(0))
    }

    async fn read_all_rows(&self) -> AppResult<Vec<Vec<String>>> {
        self.read_range(&self.sheet_name).await
    }

    async fn write_cell(&self, row: u32, col: u32, value: &str) -> AppResult<()> {
        let range = format!("{}!{}{}", self.sheet_name, col_to_a1(col), row);
        let url = self.values_url(&range, "?valueInputOption=RAW");
        let body = serde_json::json!({ "values": [[value]] });

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::store_write(format!("store request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::store_write(format!(
                "store returned {} writing cell ({row},{col})",
                response.status()
            )));
        }
        Ok(())
    }

    async fn append_row(&self, values: &[String]) -> AppResult<()> {
        let url = self.values_url(
            &self.sheet_name,
            ":append?valueInputOption=RAW&insertDataOption=INSERT_ROWS",
        );
        let body = serde_json::json!({ "values": [values] });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::store_write(format!("store request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::store_write(format!(
                "store returned {} appending row",
                response.status()
            )));
        }
        Ok(())
    }
}
