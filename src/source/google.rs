//! Google Sheets API v4 source.

use std::path::Path;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::{
    SpreadsheetSource, WorksheetInfo,
    auth::{SHEETS_SCOPE, ServiceAccountKey},
};
use crate::{
    core::RawRow,
    error::{Result, SyncError},
};

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// A spreadsheet read through the Sheets API with a bearer token.
#[derive(Debug, Clone)]
pub struct GoogleSheetsSource {
    client: Client,
    base: Url,
    token: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetsSource {
    /// Authenticate with the service account key at `credentials_path` and
    /// open the spreadsheet `sheet_id`.
    pub async fn connect(sheet_id: &str, credentials_path: &Path) -> Result<Self> {
        let key = ServiceAccountKey::load(credentials_path)?;
        let client = Client::builder()
            .build()
            .map_err(|err| SyncError::AuthFailure(format!("Failed to create HTTP client: {}", err)))?;
        let token = key.access_token(&client, SHEETS_SCOPE).await?;
        debug!(client_email = %key.client_email, "authenticated service account");
        Self::with_token(client, sheet_id, token)
    }

    /// Use an already obtained bearer token.
    pub fn with_token(client: Client, sheet_id: &str, token: String) -> Result<Self> {
        let base = Url::parse(API_BASE)
            .and_then(|api| api.join(&format!("{}/", sheet_id)))
            .map_err(|err| SyncError::AuthFailure(format!("Invalid sheet id '{}': {}", sheet_id, err)))?;
        Ok(Self {
            client,
            base,
            token,
        })
    }

    fn values_url(&self, title: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SyncError::fetch(title, "invalid API base URL"))?
            .pop_if_empty()
            .push("values")
            .push(&a1_range(title));
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url, worksheet: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|err| SyncError::fetch(worksheet, err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::fetch(
                worksheet,
                format!("HTTP {}: {}", status, body.trim()),
            ));
        }

        response
            .json()
            .await
            .map_err(|err| SyncError::fetch(worksheet, err))
    }
}

/// A range covering a whole worksheet, quoted for A1 notation.
fn a1_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Split a value range into a header and data rows.
fn rows_from_values(values: Vec<Vec<String>>) -> Vec<RawRow> {
    let mut values = values.into_iter();
    let Some(headers) = values.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = headers.iter().map(|header| header.trim().to_string()).collect();
    values
        .map(|cells| RawRow::from_record(&headers, &cells))
        .collect()
}

#[async_trait]
impl SpreadsheetSource for GoogleSheetsSource {
    async fn list_worksheets(&self) -> Result<Vec<WorksheetInfo>> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SyncError::fetch("<spreadsheet>", "invalid API base URL"))?
            .pop_if_empty();
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(sheetId,title,index)");

        let metadata: SpreadsheetMetadata = self.get_json(url, "<spreadsheet>").await?;
        Ok(metadata
            .sheets
            .into_iter()
            .map(|sheet| WorksheetInfo {
                id: sheet.properties.title.clone(),
                title: sheet.properties.title,
            })
            .collect())
    }

    async fn get_rows(&self, worksheet_id: &str) -> Result<Vec<RawRow>> {
        let url = self.values_url(worksheet_id)?;
        let range: ValueRange = self.get_json(url, worksheet_id).await?;
        Ok(rows_from_values(range.values))
    }
}
