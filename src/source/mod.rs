//! Spreadsheet sources: where raw rows come from.
//!
//! The pipeline only sees the `SpreadsheetSource` trait. Connection and
//! authentication happen when a source is constructed.
//!
//! - `google`: the Google Sheets API, authenticated with a service account
//! - `csv_dir`: a local directory of CSV files, one per worksheet
//! - `memory`: in-memory worksheets for embedding and tests

mod auth;
mod csv_dir;
mod google;
mod memory;

use async_trait::async_trait;

pub use auth::ServiceAccountKey;
pub use csv_dir::CsvDirSource;
pub use google::GoogleSheetsSource;
pub use memory::MemorySource;

use crate::{core::RawRow, error::Result};

/// A worksheet as listed by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetInfo {
    /// Source-specific handle passed back to `get_rows`.
    pub id: String,
    pub title: String,
}

#[async_trait]
pub trait SpreadsheetSource: Send + Sync {
    /// All worksheets, in spreadsheet order.
    async fn list_worksheets(&self) -> Result<Vec<WorksheetInfo>>;

    /// Data rows of one worksheet, keyed by its header row.
    async fn get_rows(&self, worksheet_id: &str) -> Result<Vec<RawRow>>;
}
