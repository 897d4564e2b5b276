//! CLI argument definitions using clap.
//!
//! With no options the tool fetches. `--sheets` lists worksheets instead;
//! combine it with `--fetch` to do both.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Generate translations (default when no other option is given)
    #[arg(short, long)]
    pub fetch: bool,

    /// List available sheets
    #[arg(short, long)]
    pub sheets: bool,

    /// Config file to use instead of searching for i18n-sheets.config.json
    #[arg(short, long, global = true, env = "I18N_SHEETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    ListSheets,
    Init,
}

impl Arguments {
    /// What to do, in order.
    pub fn actions(&self) -> Vec<Action> {
        if matches!(self.command, Some(Command::Init)) {
            return vec![Action::Init];
        }

        let mut actions = Vec::new();
        if self.fetch || !self.sheets {
            actions.push(Action::Fetch);
        }
        if self.sheets {
            actions.push(Action::ListSheets);
        }
        actions
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an i18n-sheets.config.json in the current directory
    Init,
}
