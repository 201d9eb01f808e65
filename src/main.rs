mod cli;
mod config;
mod domain;
mod error;
mod infra;
mod logging;
mod workflows;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io;
use tracing::debug;

use cli::Cli;
use config::RunConfig;
use workflows::renamer;

fn main() {
    let cli = match Cli::try_parse_from(cli::normalize_flags(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => std::process::exit(report_usage(e)),
    };

    logging::init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::from_cli(&cli)?;
    let summary = renamer::run(&config, io::stdout().lock())?;
    debug!(
        renamed = summary.renamed,
        skipped = summary.skipped,
        unrecognized = summary.unrecognized,
        decisions = summary.outcomes.len(),
        "run finished"
    );
    Ok(())
}

/// Prints clap's help or error text and returns the exit status to use.
fn report_usage(e: clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            0
        }
        ErrorKind::MissingRequiredArgument => {
            let _ = Cli::command().print_help();
            1
        }
        _ => {
            let _ = e.print();
            1
        }
    }
}
