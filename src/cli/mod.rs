//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: fetch, sheets and init handlers
//! - `report`: colored terminal output
//! - `exit_status`: process exit codes

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use args::{Action, Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;
    let succeeded = run::run(&args, |result| report::print(result, verbose))?;

    Ok(ExitStatus::from_outcome(succeeded))
}

/// Install the stderr diagnostics subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "i18n_sheets=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
