//! The full fetch pipeline: aggregate worksheets, then write every target.

use tracing::debug;

use super::{
    key::KeySpec,
    sheet::{TabFilter, aggregate_sheets},
    writer::{OutputTarget, TargetReport, write_targets},
};
use crate::{error::Result, source::SpreadsheetSource};

/// Everything the pipeline needs, resolved once before the run starts.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub spec: KeySpec,
    pub tab_filter: TabFilter,
    pub targets: Vec<OutputTarget>,
}

impl SyncConfig {
    /// Languages extracted from each row: every target's languages, in first
    /// seen order, without duplicates.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for language in self.targets.iter().flat_map(|target| &target.languages) {
            if !languages.contains(language) {
                languages.push(language.clone());
            }
        }
        languages
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub worksheets: usize,
    pub targets: Vec<TargetReport>,
}

impl SyncReport {
    pub fn files_written(&self) -> usize {
        self.targets.iter().map(|target| target.written.len()).sum()
    }
}

/// Fetch all worksheets from `source` and regenerate every output target.
pub async fn run_sync<S>(source: &S, config: &SyncConfig) -> Result<SyncReport>
where
    S: SpreadsheetSource + ?Sized,
{
    let languages = config.languages();
    let sheets = aggregate_sheets(source, &config.spec, &languages, &config.tab_filter).await?;
    debug!(worksheets = sheets.len(), ?languages, "aggregated worksheets");

    let targets = write_targets(&sheets, &config.targets, &config.spec.delimiter).await?;

    Ok(SyncReport {
        worksheets: sheets.len(),
        targets,
    })
}
