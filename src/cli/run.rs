//! Dispatch of parsed arguments to the command handlers.

use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use super::{
    args::{Action, Arguments},
    commands::{CommandResult, fetch::fetch, init::init, sheets::sheets},
};
use crate::{
    config::{LoadedConfig, SourceConfig, load_config},
    source::{CsvDirSource, GoogleSheetsSource, SpreadsheetSource},
};

/// Run every requested action, in order, stopping at the first error.
///
/// `on_result` is called after each action completes so output appears as
/// the run progresses.
pub fn run(args: &Arguments, mut on_result: impl FnMut(&CommandResult)) -> Result<bool> {
    let actions = args.actions();
    let cwd = env::current_dir().context("Failed to read the current directory")?;

    if actions.contains(&Action::Init) {
        let result = init(&cwd)?;
        on_result(&result);
        return Ok(result.succeeded());
    }

    let loaded = load_config(&cwd, args.config.as_deref())?;
    debug!(path = %loaded.path.display(), "loaded config");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    runtime.block_on(async {
        let source = connect(&loaded).await?;
        let mut succeeded = true;

        for action in actions {
            let result = match action {
                Action::Fetch => fetch(source.as_ref(), &loaded).await?,
                Action::ListSheets => sheets(source.as_ref(), &loaded).await?,
                Action::Init => continue,
            };
            succeeded &= result.succeeded();
            on_result(&result);
        }

        Ok::<_, anyhow::Error>(succeeded)
    })
}

/// Open the configured spreadsheet source.
async fn connect(loaded: &LoadedConfig) -> Result<Box<dyn SpreadsheetSource>> {
    let source: Box<dyn SpreadsheetSource> = match loaded.config.source(loaded.base_dir())? {
        SourceConfig::CsvDir(dir) => {
            debug!(dir = %dir.display(), "reading worksheets from CSV files");
            Box::new(CsvDirSource::new(dir))
        }
        SourceConfig::Google {
            sheet_id,
            credentials_path,
        } => {
            debug!(%sheet_id, "connecting to Google Sheets");
            Box::new(GoogleSheetsSource::connect(&sheet_id, &credentials_path).await?)
        }
    };
    Ok(source)
}
