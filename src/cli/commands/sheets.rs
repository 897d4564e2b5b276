use anyhow::Result;

use super::{CommandResult, CommandSummary, SheetListing, SheetsSummary};
use crate::{config::LoadedConfig, source::SpreadsheetSource};

/// List the worksheets of the spreadsheet and whether they would be synced.
pub async fn sheets(
    source: &dyn SpreadsheetSource,
    loaded: &LoadedConfig,
) -> Result<CommandResult> {
    let filter = loaded.config.resolve(loaded.base_dir())?.tab_filter;

    let sheets = source
        .list_worksheets()
        .await?
        .into_iter()
        .map(|worksheet| SheetListing {
            included: filter.allows(&worksheet.title),
            title: worksheet.title,
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Sheets(SheetsSummary { sheets }),
    })
}
