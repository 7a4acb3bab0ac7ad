use std::process::ExitCode;

use clap::Parser;
use termpick_cli::cli_args::Args;
use termpick_cli::{logging, run};
use termpick_core::error::Result;

fn execute() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref())?;
    run::execute(&args)
}

fn main() -> ExitCode {
    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
