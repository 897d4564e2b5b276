use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::{config::LoadedConfig, core::run_sync, source::SpreadsheetSource};

/// Regenerate every configured output target from the spreadsheet.
pub async fn fetch(
    source: &dyn SpreadsheetSource,
    loaded: &LoadedConfig,
) -> Result<CommandResult> {
    let config = loaded.config.resolve(loaded.base_dir())?;
    let report = run_sync(source, &config).await?;

    Ok(CommandResult {
        summary: CommandSummary::Fetch(report),
    })
}
