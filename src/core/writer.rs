//! Writing per-language dictionaries for each output target.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use futures::future::try_join_all;
use tracing::debug;

use super::{
    entry::{FlatEntry, language_pairs},
    serializer::{OutputFormat, Serializer},
    sheet::Sheet,
    unflatten::unflatten,
};
use crate::error::{Result, SyncError};

/// How a target lays out its files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// `<outDir>/<language>/<prefix><title><suffix><ext>` per worksheet.
    #[default]
    PerWorksheet,
    /// `<outDir>/<prefix><language><suffix><ext>` with all worksheets merged.
    Concatenated,
}

/// One configured destination, written independently of the others.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub name: String,
    pub out_dir: PathBuf,
    pub languages: Vec<String>,
    pub mode: OutputMode,
    pub prefix: String,
    pub suffix: String,
    pub format: OutputFormat,
    /// Write a file even when the dictionary for it is empty.
    pub write_empty: bool,
}

impl OutputTarget {
    pub fn new(name: impl Into<String>, out_dir: impl Into<PathBuf>, languages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            out_dir: out_dir.into(),
            languages,
            mode: OutputMode::default(),
            prefix: String::new(),
            suffix: String::new(),
            format: OutputFormat::default(),
            write_empty: false,
        }
    }

    /// Directory the file for `language` goes into.
    fn language_dir(&self, language: &str) -> PathBuf {
        match self.mode {
            OutputMode::PerWorksheet => self.out_dir.join(language),
            OutputMode::Concatenated => self.out_dir.clone(),
        }
    }

    fn file_name(&self, stem: &str, extension: &str) -> String {
        format!("{}{}{}{}", self.prefix, stem, self.suffix, extension)
    }
}

/// Outcome of writing one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetReport {
    pub name: String,
    pub written: Vec<PathBuf>,
    /// Files not written because their dictionary was empty.
    pub skipped: usize,
}

/// A single file to produce: one language, and either one worksheet or all
/// of them.
struct FileJob<'a> {
    language: &'a str,
    stem: &'a str,
    entries: Vec<&'a FlatEntry>,
}

/// Write every language file for `target` into its (already reset) directory.
///
/// Files are written concurrently; they never share a path. The first error
/// aborts the target, leaving whatever was already written in place.
async fn write_target(
    sheets: &[Sheet],
    target: &OutputTarget,
    delimiter: &str,
) -> Result<TargetReport> {
    let jobs = plan_jobs(sheets, target);
    let writes = jobs.into_iter().map(|job| write_job(job, target, delimiter));
    let results = try_join_all(writes).await?;

    let mut report = TargetReport {
        name: target.name.clone(),
        ..Default::default()
    };
    for result in results {
        match result {
            Some(path) => report.written.push(path),
            None => report.skipped += 1,
        }
    }
    report.written.sort();
    Ok(report)
}

/// Reset every distinct output directory, then write the targets in order.
///
/// All directories are wiped up front so targets sharing an `out_dir` keep
/// each other's files.
pub async fn write_targets(
    sheets: &[Sheet],
    targets: &[OutputTarget],
    delimiter: &str,
) -> Result<Vec<TargetReport>> {
    let mut reset: Vec<&Path> = Vec::with_capacity(targets.len());
    for target in targets {
        if !reset.contains(&target.out_dir.as_path()) {
            reset_dir(&target.out_dir).await?;
            reset.push(&target.out_dir);
        }
    }

    let mut reports = Vec::with_capacity(targets.len());
    for target in targets {
        reports.push(write_target(sheets, target, delimiter).await?);
    }
    Ok(reports)
}

fn plan_jobs<'a>(sheets: &'a [Sheet], target: &'a OutputTarget) -> Vec<FileJob<'a>> {
    match target.mode {
        OutputMode::PerWorksheet => target
            .languages
            .iter()
            .flat_map(|language| {
                sheets.iter().map(move |sheet| FileJob {
                    language,
                    stem: &sheet.title,
                    entries: sheet.entries.iter().collect(),
                })
            })
            .collect(),
        OutputMode::Concatenated => target
            .languages
            .iter()
            .map(|language| FileJob {
                language,
                stem: language,
                entries: sheets.iter().flat_map(|sheet| &sheet.entries).collect(),
            })
            .collect(),
    }
}

async fn write_job(
    job: FileJob<'_>,
    target: &OutputTarget,
    delimiter: &str,
) -> Result<Option<PathBuf>> {
    let dir = target.language_dir(job.language);
    create_dir(&dir).await?;

    let dictionary = unflatten(language_pairs(job.entries, job.language), delimiter);
    if dictionary.is_empty() && !target.write_empty {
        debug!(
            output = %target.name,
            language = job.language,
            file = job.stem,
            "skipping empty dictionary"
        );
        return Ok(None);
    }

    let rendered = target.format.serialize(&dictionary, job.language)?;
    let path = dir.join(target.file_name(job.stem, &rendered.extension));
    tokio::fs::write(&path, &rendered.contents)
        .await
        .map_err(|err| SyncError::write(&path, err))?;

    debug!(path = %path.display(), keys = dictionary.len(), "wrote dictionary");
    Ok(Some(path))
}

/// Remove `dir` with everything in it, then recreate it empty.
async fn reset_dir(dir: &Path) -> Result<()> {
    match tokio::fs::remove_dir_all(dir).await {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(SyncError::write(dir, err)),
    }
    create_dir(dir).await
}

async fn create_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|err| SyncError::write(dir, err))
}
