//! Google Sheets v4 values API client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::SheetError;
use crate::intake::model::StoredRow;

use super::auth::{ServiceAccountKey, TokenProvider};
use super::store::SheetStore;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Response shape of a values range GET.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Spreadsheet client bound to one spreadsheet and worksheet.
pub struct SheetsClient {
    http: reqwest::Client,
    tokens: TokenProvider,
    spreadsheet_id: String,
    worksheet: String,
}

impl SheetsClient {
    pub fn new(key: ServiceAccountKey, spreadsheet_id: String, worksheet: String) -> Self {
        let http = reqwest::Client::new();
        Self {
            tokens: TokenProvider::new(key, http.clone()),
            http,
            spreadsheet_id,
            worksheet,
        }
    }

    /// URL for the worksheet's full value range, plus an optional method
    /// suffix such as `:append`.
    fn values_url(&self, suffix: &str) -> String {
        format!(
            "{SHEETS_API_BASE}/{}/values/{}{suffix}",
            self.spreadsheet_id, self.worksheet
        )
    }

    async fn append_cells(&self, cells: Vec<String>) -> Result<(), SheetError> {
        let token = self.tokens.access_token().await?;
        let body = serde_json::json!({ "values": [cells] });

        let resp = self
            .http
            .post(self.values_url(":append"))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetError::Api { status, body });
        }

        Ok(())
    }

    async fn fetch_cells(&self) -> Result<Vec<Vec<String>>, SheetError> {
        let token = self.tokens.access_token().await?;

        let resp = self
            .http
            .get(self.values_url(""))
            .bearer_auth(token)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetError::Api { status, body });
        }

        let range: ValueRange = resp
            .json()
            .await
            .map_err(|e| SheetError::MalformedResponse(e.to_string()))?;
        Ok(range.values)
    }
}

/// Convert raw cell rows into `StoredRow`s, dropping a leading header row.
fn rows_from_values(values: Vec<Vec<String>>) -> Vec<StoredRow> {
    values
        .into_iter()
        .enumerate()
        .filter(|(i, cells)| !(*i == 0 && StoredRow::is_header(cells)))
        .map(|(_, cells)| StoredRow::from_cells(&cells))
        .collect()
}

#[async_trait]
impl SheetStore for SheetsClient {
    async fn append(&self, row: &StoredRow) -> Result<(), SheetError> {
        self.append_cells(row.to_cells()).await?;
        debug!(name = %row.name, "Appended onboarding row");
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRow>, SheetError> {
        let values = self.fetch_cells().await?;
        Ok(rows_from_values(values))
    }
}
