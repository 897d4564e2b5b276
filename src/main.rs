use std::process::ExitCode;

use clap::Parser;
use i18n_sheets::cli::{Arguments, ExitStatus, init_tracing};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose);

    match i18n_sheets::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
