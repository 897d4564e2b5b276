pub mod fetch;
pub mod init;
pub mod sheets;

use crate::core::SyncReport;

#[derive(Debug)]
pub enum CommandSummary {
    Fetch(SyncReport),
    Sheets(SheetsSummary),
    Init(InitSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetListing {
    pub title: String,
    /// Whether the tab filter keeps this worksheet.
    pub included: bool,
}

#[derive(Debug)]
pub struct SheetsSummary {
    pub sheets: Vec<SheetListing>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running one action.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// False when the command declined to do its work.
    pub fn succeeded(&self) -> bool {
        !matches!(self.summary, CommandSummary::Init(InitSummary { created: false }))
    }
}
