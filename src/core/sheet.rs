//! Worksheet aggregation: fetch every worksheet, format its rows and apply the
//! tab filter.

use futures::future::try_join_all;
use tracing::debug;

use super::{
    entry::{FlatEntry, format_row},
    key::KeySpec,
    row::RowAccessor,
};
use crate::{
    error::{Result, SyncError},
    source::SpreadsheetSource,
};

/// One worksheet reduced to its eligible entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Lower-cased worksheet title, used for output file names.
    pub title: String,
    pub entries: Vec<FlatEntry>,
}

impl Sheet {
    /// Format raw rows into a sheet, dropping excluded rows.
    pub fn from_rows<R, S>(title: &str, rows: &[R], spec: &KeySpec, languages: &[S]) -> Self
    where
        R: RowAccessor,
        S: AsRef<str>,
    {
        let entries: Vec<FlatEntry> = rows
            .iter()
            .filter_map(|row| format_row(row, spec, languages))
            .collect();

        debug!(
            worksheet = title,
            rows = rows.len(),
            excluded = rows.len() - entries.len(),
            "formatted worksheet"
        );

        Self {
            title: title.to_lowercase(),
            entries,
        }
    }
}

/// Which worksheets take part in the output. Titles compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabFilter {
    /// When set, only these tabs are kept.
    include: Option<Vec<String>>,
    /// Tabs always dropped.
    exclude: Vec<String>,
}

impl TabFilter {
    /// Keep every worksheet.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn include<S: AsRef<str>>(tabs: impl IntoIterator<Item = S>) -> Self {
        Self::all().and_include(tabs)
    }

    pub fn exclude<S: AsRef<str>>(tabs: impl IntoIterator<Item = S>) -> Self {
        Self::all().and_exclude(tabs)
    }

    pub fn and_include<S: AsRef<str>>(mut self, tabs: impl IntoIterator<Item = S>) -> Self {
        self.include = Some(lowercase_all(tabs));
        self
    }

    pub fn and_exclude<S: AsRef<str>>(mut self, tabs: impl IntoIterator<Item = S>) -> Self {
        self.exclude = lowercase_all(tabs);
        self
    }

    pub fn allows(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        let included = self
            .include
            .as_ref()
            .is_none_or(|tabs| tabs.contains(&title));
        included && !self.exclude.contains(&title)
    }
}

fn lowercase_all<S: AsRef<str>>(tabs: impl IntoIterator<Item = S>) -> Vec<String> {
    tabs.into_iter().map(|tab| tab.as_ref().to_lowercase()).collect()
}

/// Fetch and format every worksheet of `source`, then drop the worksheets the
/// tab filter rejects.
///
/// All worksheets are fetched concurrently, including the ones that end up
/// filtered out. The first fetch failure aborts the whole aggregation.
pub async fn aggregate_sheets<Src, S>(
    source: &Src,
    spec: &KeySpec,
    languages: &[S],
    filter: &TabFilter,
) -> Result<Vec<Sheet>>
where
    Src: SpreadsheetSource + ?Sized,
    S: AsRef<str> + Sync,
{
    let worksheets = source.list_worksheets().await?;

    let fetches = worksheets.iter().map(|worksheet| async move {
        let rows = source.get_rows(&worksheet.id).await?;
        debug!(worksheet = %worksheet.title, rows = rows.len(), "fetched worksheet");
        Ok::<_, SyncError>(Sheet::from_rows(
            &worksheet.title,
            &rows,
            spec,
            languages,
        ))
    });
    let sheets = try_join_all(fetches).await?;

    let kept: Vec<Sheet> = sheets
        .into_iter()
        .filter(|sheet| {
            let allowed = filter.allows(&sheet.title);
            if !allowed {
                debug!(worksheet = %sheet.title, "worksheet dropped by tab filter");
            }
            allowed
        })
        .collect();
    check_file_stems(&kept)?;
    Ok(kept)
}

/// Titles become file names, so they must stay inside the language directory
/// and be unique once lower-cased.
fn check_file_stems(sheets: &[Sheet]) -> Result<()> {
    let invalid = |sheet: &Sheet, message: &str| SyncError::InvalidWorksheet {
        worksheet: sheet.title.clone(),
        message: message.to_string(),
    };

    for (index, sheet) in sheets.iter().enumerate() {
        let title = sheet.title.as_str();
        if title.trim().is_empty() || title == "." || title == ".." {
            return Err(invalid(sheet, "title is not a usable file name"));
        }
        if title.contains(['/', '\\']) {
            return Err(invalid(sheet, "title must not contain path separators"));
        }
        if sheets[..index].iter().any(|earlier| earlier.title == sheet.title) {
            return Err(invalid(
                sheet,
                "another worksheet maps to the same output file (titles are case-insensitive)",
            ));
        }
    }
    Ok(())
}
