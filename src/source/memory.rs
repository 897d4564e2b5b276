use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{SpreadsheetSource, WorksheetInfo};
use crate::{
    core::RawRow,
    error::{Result, SyncError},
};

/// Worksheets held in memory.
#[derive(Debug, Default)]
pub struct MemorySource {
    worksheets: Vec<(WorksheetInfo, Vec<RawRow>)>,
    failing: Option<String>,
    fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worksheet(mut self, title: &str, rows: Vec<RawRow>) -> Self {
        let info = WorksheetInfo {
            id: title.to_string(),
            title: title.to_string(),
        };
        self.worksheets.push((info, rows));
        self
    }

    /// Make fetching the named worksheet fail.
    pub fn failing_on(mut self, title: &str) -> Self {
        self.failing = Some(title.to_string());
        self
    }

    /// Number of `get_rows` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpreadsheetSource for MemorySource {
    async fn list_worksheets(&self) -> Result<Vec<WorksheetInfo>> {
        Ok(self.worksheets.iter().map(|(info, _)| info.clone()).collect())
    }

    async fn get_rows(&self, worksheet_id: &str) -> Result<Vec<RawRow>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.failing.as_deref() == Some(worksheet_id) {
            return Err(SyncError::fetch(worksheet_id, "worksheet unavailable"));
        }

        self.worksheets
            .iter()
            .find(|(info, _)| info.id == worksheet_id)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| SyncError::fetch(worksheet_id, "no such worksheet"))
    }
}
