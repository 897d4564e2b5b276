use std::path::{Path, PathBuf};

use async_trait::async_trait;
use walkdir::WalkDir;

use super::{SpreadsheetSource, WorksheetInfo};
use crate::{
    core::RawRow,
    error::{Result, SyncError},
};

/// A directory of `*.csv` files standing in for a spreadsheet.
///
/// Each file is one worksheet titled after its file stem. The first record of
/// a file is its header row.
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"))
}

fn parse_rows(worksheet: &str, content: &[u8]) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| SyncError::fetch(worksheet, err))?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    reader
        .records()
        .map(|record| {
            let record = record.map_err(|err| SyncError::fetch(worksheet, err))?;
            let cells: Vec<&str> = record.iter().collect();
            Ok(RawRow::from_record(&headers, &cells))
        })
        .collect()
}

#[async_trait]
impl SpreadsheetSource for CsvDirSource {
    async fn list_worksheets(&self) -> Result<Vec<WorksheetInfo>> {
        let source_name = self.dir.display().to_string();
        let mut worksheets = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|err| SyncError::fetch(&source_name, err))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_csv(path) {
                continue;
            }
            let Some(title) = path.file_stem().map(|stem| stem.to_string_lossy().to_string())
            else {
                continue;
            };
            worksheets.push(WorksheetInfo {
                id: path.to_string_lossy().to_string(),
                title,
            });
        }

        Ok(worksheets)
    }

    async fn get_rows(&self, worksheet_id: &str) -> Result<Vec<RawRow>> {
        let content = tokio::fs::read(worksheet_id)
            .await
            .map_err(|err| SyncError::fetch(worksheet_id, err))?;
        parse_rows(worksheet_id, &content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::core::RowAccessor;

    #[test]
    fn test_parse_rows_with_short_records() {
        let rows = parse_rows(
            "common",
            b"section,key,en,fr\ncommon,greeting,Hello\ncommon,bye,Bye,Au revoir\n",
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("en"), Some("Hello"));
        assert_eq!(rows[0].get("fr"), None);
        assert_eq!(rows[1].get("fr"), Some("Au revoir"));
    }

    #[test]
    fn test_parse_rows_quoted_cells() {
        let rows = parse_rows("common", b"key,en\n\"a.b\",\"Hello, world\"\n").unwrap();
        assert_eq!(rows[0].get("en"), Some("Hello, world"));
    }

    #[tokio::test]
    async fn test_lists_csv_files_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Errors.csv"), "key,en\n").unwrap();
        fs::write(dir.path().join("Common.csv"), "key,en\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let source = CsvDirSource::new(dir.path());
        let titles: Vec<String> = source
            .list_worksheets()
            .await
            .unwrap()
            .into_iter()
            .map(|worksheet| worksheet.title)
            .collect();

        assert_eq!(titles, vec!["Common", "Errors"]);
    }

    #[tokio::test]
    async fn test_get_rows_reads_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("Common.csv"),
            "section,key,en\ncommon,greeting,Hello\n",
        )
        .unwrap();

        let source = CsvDirSource::new(dir.path());
        let worksheets = source.list_worksheets().await.unwrap();
        let rows = source.get_rows(&worksheets[0].id).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("key"), Some("greeting"));
    }

    #[tokio::test]
    async fn test_missing_directory_is_fetch_failure() {
        let dir = tempdir().unwrap();
        let source = CsvDirSource::new(dir.path().join("missing"));
        let err = source.list_worksheets().await.unwrap_err();
        assert!(matches!(err, SyncError::FetchFailure { .. }));
    }
}
