//! CLI entry point for four-image composition

use clap::Parser;
use quadmosaic::io::cli::{Cli, CompositeProcessor};
use quadmosaic::io::logging;
use std::process::ExitCode;

// One-line message for the user, the process exit code carries the failure
#[allow(clippy::print_stderr)]
fn report_failure(error: &quadmosaic::CompositeError) {
    eprintln!("Error: {error}");
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    match CompositeProcessor::new(cli).process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            report_failure(&error);
            ExitCode::FAILURE
        }
    }
}
